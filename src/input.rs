use byteorder::{ByteOrder as _, LE};
use log::{debug, trace, warn};

use crate::error::{QntError, QntResult, QntStream};
use crate::inflate::inflate_exact;
use crate::options::QntOptions;
use crate::planes::{extract_pixels, merge_alpha, seed_opaque_alpha};
use crate::qnt::{
    padded, QntHeader, QntImage, QNT_BPP, QNT_DIMENSION_MAX, QNT_HEADER_SIZE_V0, QNT_MAGIC,
    QNT_RASTER_CHANNELS,
};
use crate::unfilter::unfilter;

/// Number of `u32` fields following `version` (and `header_size`, if present).
const FIELD_COUNT: usize = 8;

/// Decodes a complete QNT image on memory with default [`QntOptions`].
///
/// The returned raster covers the padded dimensions (width and height rounded up to even).
/// Use [`QntImage::to_cropped`] to obtain the nominal region.
///
/// # Errors
///
/// * For reading header, the same as [`qnt_read_header`].
/// * For decoding body, the same as [`qnt_decode_with_options`].
pub fn qnt_decode<T>(qnt: T) -> QntResult<QntImage>
where
    T: AsRef<[u8]>,
{
    qnt_decode_with_options(qnt, &QntOptions::default())
}

/// Decodes a complete QNT image on memory.
///
/// # Errors
///
/// * For reading header, the same as [`qnt_read_header`].
/// * Returns [`QntError::Format`] if the image exceeds the limits in `opts`.
/// * Returns [`QntError::Decompress`] if a compressed stream lies outside of `qnt`, is corrupt,
///   or does not expand to the size implied by the header.
pub fn qnt_decode_with_options<T>(qnt: T, opts: &QntOptions) -> QntResult<QntImage>
where
    T: AsRef<[u8]>,
{
    let qnt = qnt.as_ref();

    let header = qnt_read_header(qnt)?;

    if header.width() > opts.max_width() {
        return Err(QntError::new_format(format!(
            "image width {} exceeds limit {}",
            header.width(),
            opts.max_width()
        )));
    }
    if header.height() > opts.max_height() {
        return Err(QntError::new_format(format!(
            "image height {} exceeds limit {}",
            header.height(),
            opts.max_height()
        )));
    }

    let width = header.padded_width() as usize;
    let height = header.padded_height() as usize;

    let pixel_ofs = header.header_size() as usize;
    let pixel_stream = stream_slice(qnt, pixel_ofs, header.pixel_size())
        .ok_or_else(|| QntError::new_decompress(QntStream::Pixel, "stream exceeds input"))?;

    let mut pixels = {
        let raw = inflate_exact(pixel_stream, header.pixel_stream_len(), QntStream::Pixel)?;
        extract_pixels(&raw, width, height)
    };
    trace!("extracted {}x{} color planes", width, height);

    if header.alpha_size() == 0 {
        seed_opaque_alpha(&mut pixels);
    } else {
        let alpha_ofs = pixel_ofs + pixel_stream.len();
        let alpha_stream = stream_slice(qnt, alpha_ofs, header.alpha_size())
            .ok_or_else(|| QntError::new_decompress(QntStream::Alpha, "stream exceeds input"))?;

        let alpha = inflate_exact(alpha_stream, header.alpha_stream_len(), QntStream::Alpha)?;
        merge_alpha(&mut pixels, &alpha);
        trace!("merged alpha plane");
    }

    unfilter(&mut pixels, width, height);

    Ok(QntImage::new(header, pixels))
}

/// Reads QNT header on memory, and returns [`QntHeader`].
///
/// Only the header is examined. Compressed streams are neither located nor inflated.
///
/// # Errors
///
/// * Returns [`QntError::Format`] if `qnt` does not start with the QNT magic.
/// * Returns [`QntError::Format`] if `qnt` is shorter than the header.
/// * Returns [`QntError::Format`] if the header is invalid. (e.g. bits per pixel is not 24,
///   width is 0)
/// * Returns [`QntError::Format`] if the padded raster size exceeds [`usize::MAX`].
pub fn qnt_read_header<T>(qnt: T) -> QntResult<QntHeader>
where
    T: AsRef<[u8]>,
{
    let qnt = qnt.as_ref();

    if qnt.get(..QNT_MAGIC.len()) != Some(QNT_MAGIC) {
        return Err(QntError::new_format("not a QNT file"));
    }

    let mut ofs = QNT_MAGIC.len();
    let version = read_u32(qnt, &mut ofs)?;
    let header_size = if version == 0 {
        QNT_HEADER_SIZE_V0
    } else {
        read_u32(qnt, &mut ofs)?
    };

    let mut fields = [0; FIELD_COUNT];
    for field in &mut fields {
        *field = read_u32(qnt, &mut ofs)?;
    }
    let [x, y, width, height, bpp, reserved, pixel_size, alpha_size] = fields;

    if (header_size as usize) < ofs {
        return Err(QntError::new_format(format!(
            "header size {} is smaller than header fields ({} bytes)",
            header_size, ofs
        )));
    }
    if qnt.len() < header_size as usize {
        return Err(QntError::new_format(format!(
            "truncated header: expected {} bytes, got {}",
            header_size,
            qnt.len()
        )));
    }

    if bpp != QNT_BPP {
        warn!("unsupported bits-per-pixel: {}", bpp);
        return Err(QntError::new_format(format!(
            "unsupported bit depth: {}",
            bpp
        )));
    }
    if reserved != 1 {
        warn!("reserved header field is {}, expected 1", reserved);
    }

    if width == 0 {
        return Err(QntError::new_format("width is 0"));
    }
    if height == 0 {
        return Err(QntError::new_format("height is 0"));
    }
    if width > QNT_DIMENSION_MAX || height > QNT_DIMENSION_MAX {
        return Err(QntError::new_format(format!(
            "image dimensions {}x{} out of range",
            width, height
        )));
    }
    if (padded(width) as usize)
        .checked_mul(padded(height) as usize)
        .and_then(|n| n.checked_mul(QNT_RASTER_CHANNELS))
        .is_none()
    {
        return Err(QntError::new_format("raster size exceeds usize::MAX"));
    }

    let header = QntHeader {
        version,
        header_size,
        x,
        y,
        width,
        height,
        bpp,
        reserved,
        pixel_size,
        alpha_size,
    };

    debug!(
        "QNT v{}: {}x{} at ({}, {}), pixel {} bytes, alpha {} bytes",
        version, width, height, x, y, pixel_size, alpha_size
    );

    Ok(header)
}

fn read_u32(qnt: &[u8], ofs: &mut usize) -> QntResult<u32> {
    let bytes = qnt
        .get(*ofs..*ofs + 4)
        .ok_or_else(|| QntError::new_format("truncated header"))?;
    *ofs += 4;
    Ok(LE::read_u32(bytes))
}

fn stream_slice(qnt: &[u8], ofs: usize, len: u32) -> Option<&[u8]> {
    let end = ofs.checked_add(usize::try_from(len).ok()?)?;
    qnt.get(ofs..end)
}
