//! Reference QNT encoder for tests.

use std::io::Write as _;

use byteorder::{WriteBytesExt as _, LE};
use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::qnt::{
    padded, QNT_ALPHA_OFFSET, QNT_BPP, QNT_HEADER_SIZE_V0, QNT_MAGIC, QNT_PLANE_ORDER,
};

pub(crate) fn compress(data: &[u8]) -> Vec<u8> {
    let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
    enc.write_all(data).unwrap();
    enc.finish().unwrap()
}

/// Inverse of `unfilter`.
pub(crate) fn filter(rgba: &[u8], width: usize, height: usize) -> Vec<u8> {
    let stride = width * 4;
    assert_eq!(rgba.len(), stride * height);

    let mut out = vec![0; rgba.len()];
    for y in 0..height {
        for i in 0..stride {
            let pos = y * stride + i;
            out[pos] = match (y, i) {
                (0, 0..=3) => rgba[pos],
                (0, _) => rgba[pos - 4].wrapping_sub(rgba[pos]),
                (_, 0..=3) => rgba[pos - stride].wrapping_sub(rgba[pos]),
                _ => {
                    let up = u16::from(rgba[pos - stride]);
                    let left = u16::from(rgba[pos - 4]);
                    (((up + left) >> 1) as u8).wrapping_sub(rgba[pos])
                }
            };
        }
    }
    out
}

/// Inverse of `extract_pixels`.
pub(crate) fn interleave(rgba: &[u8], width: usize, height: usize) -> Vec<u8> {
    let stride = width * 4;
    let mut out = Vec::with_capacity(width * height * 3);
    for c in QNT_PLANE_ORDER {
        for y in (0..height).step_by(2) {
            for x in (0..width).step_by(2) {
                out.push(rgba[y * stride + x * 4 + c]);
                out.push(rgba[(y + 1) * stride + x * 4 + c]);
                out.push(rgba[y * stride + (x + 1) * 4 + c]);
                out.push(rgba[(y + 1) * stride + (x + 1) * 4 + c]);
            }
        }
    }
    out
}

/// Builds QNT files. Fields default to a well-formed version 0 header.
#[derive(Clone, Debug)]
pub(crate) struct QntBuilder {
    pub(crate) version: u32,
    pub(crate) header_size: u32,
    pub(crate) x: u32,
    pub(crate) y: u32,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) bpp: u32,
    pub(crate) reserved: u32,
}

impl QntBuilder {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            version: 0,
            header_size: QNT_HEADER_SIZE_V0,
            x: 0,
            y: 0,
            width,
            height,
            bpp: QNT_BPP,
            reserved: 1,
        }
    }

    pub(crate) fn padded_size(&self) -> (usize, usize) {
        (padded(self.width) as usize, padded(self.height) as usize)
    }

    /// Encodes a padded RGBA8 raster. The alpha plane is omitted if `with_alpha` is false, in
    /// which case every alpha in `rgba` must be 0xFF.
    pub(crate) fn encode(&self, rgba: &[u8], with_alpha: bool) -> Vec<u8> {
        let (width, height) = self.padded_size();
        let filtered = filter(rgba, width, height);

        let pixel = compress(&interleave(&filtered, width, height));
        let alpha = with_alpha.then(|| {
            let plane: Vec<u8> = filtered
                .iter()
                .skip(QNT_ALPHA_OFFSET)
                .step_by(4)
                .copied()
                .collect();
            compress(&plane)
        });

        self.build(&pixel, alpha.as_deref().unwrap_or_default())
    }

    /// Assembles a file from already compressed streams. An empty `alpha` means no alpha plane.
    pub(crate) fn build(&self, pixel: &[u8], alpha: &[u8]) -> Vec<u8> {
        self.build_with_sizes(pixel, alpha, pixel.len() as u32, alpha.len() as u32)
    }

    /// Like [`build`](Self::build), but with arbitrary size fields.
    pub(crate) fn build_with_sizes(
        &self,
        pixel: &[u8],
        alpha: &[u8],
        pixel_size: u32,
        alpha_size: u32,
    ) -> Vec<u8> {
        let mut buf = self.header(pixel_size, alpha_size);
        if buf.len() < self.header_size as usize {
            buf.resize(self.header_size as usize, 0);
        }
        buf.extend_from_slice(pixel);
        buf.extend_from_slice(alpha);
        buf
    }

    pub(crate) fn header(&self, pixel_size: u32, alpha_size: u32) -> Vec<u8> {
        let mut buf = QNT_MAGIC.to_vec();
        buf.write_u32::<LE>(self.version).unwrap();
        if self.version != 0 {
            buf.write_u32::<LE>(self.header_size).unwrap();
        }
        for value in [
            self.x,
            self.y,
            self.width,
            self.height,
            self.bpp,
            self.reserved,
            pixel_size,
            alpha_size,
        ] {
            buf.write_u32::<LE>(value).unwrap();
        }
        buf
    }
}

/// Deterministic RGBA8 test pattern.
pub(crate) fn pattern(width: usize, height: usize, opaque: bool) -> Vec<u8> {
    (0..width * height * 4)
        .map(|i| {
            if opaque && i % 4 == 3 {
                0xFF
            } else {
                (i * 97 % 253) as u8
            }
        })
        .collect()
}
