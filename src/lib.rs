//! QNT (AliceSoft image format) decoding library.
//!
//! A QNT image holds 24-bit color planes and an optional alpha plane, each zlib-compressed and
//! predictively filtered. Decoding always yields an RGBA8 raster whose dimensions are the image
//! dimensions rounded up to even.
//!
//! # Examples
//!
//! Convert QNT to PNG (with [`image`] crate):
//!
//! ```no_run
//! use image::RgbaImage;
//! use img_qnt::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let buf = std::fs::read("foo.qnt")?;
//! let qnt = qnt_decode(&buf)?;
//!
//! let (width, height) = (qnt.header().width(), qnt.header().height());
//! let img = RgbaImage::from_vec(width, height, qnt.to_cropped()).unwrap();
//! img.save("foo.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! [`image`]: https://docs.rs/image/

mod error;
mod inflate;
mod input;
mod options;
mod planes;
mod qnt;
mod unfilter;

#[cfg(test)]
mod testutil;

pub use self::error::*;
pub use self::input::*;
pub use self::options::*;
pub use self::qnt::*;
