use crate::qnt::{QNT_ALPHA_OFFSET, QNT_PLANE_ORDER, QNT_RASTER_CHANNELS};

/// Rebuilds an RGBA8 raster from inflated color planes. Alpha bytes are left zero.
///
/// Each plane is a sequence of 2x2 blocks in row-major block order, and each block is stored
/// column by column: (x, y), (x, y + 1), (x + 1, y), (x + 1, y + 1).
///
/// # Panics
///
/// * Panics if `width` or `height` is not a positive even number.
/// * Panics if `raw.len()` is not `width * height * 3`.
pub(crate) fn extract_pixels(raw: &[u8], width: usize, height: usize) -> Vec<u8> {
    assert!(
        width > 0 && height > 0 && width % 2 == 0 && height % 2 == 0,
        "padded dimensions must be positive and even"
    );
    let plane_len = width * height;
    assert_eq!(
        raw.len(),
        plane_len * QNT_PLANE_ORDER.len(),
        "pixel stream size mismatch"
    );

    let stride = width * QNT_RASTER_CHANNELS;
    let blocks_per_row = width / 2;
    let mut pixels = vec![0; stride * height];

    for (plane, c) in raw.chunks_exact(plane_len).zip(QNT_PLANE_ORDER) {
        for (i, block) in plane.chunks_exact(4).enumerate() {
            let x = (i % blocks_per_row) * 2;
            let y = (i / blocks_per_row) * 2;

            let row0 = y * stride;
            let row1 = row0 + stride;
            let col0 = x * QNT_RASTER_CHANNELS + c;
            let col1 = col0 + QNT_RASTER_CHANNELS;

            pixels[row0 + col0] = block[0];
            pixels[row1 + col0] = block[1];
            pixels[row0 + col1] = block[2];
            pixels[row1 + col1] = block[3];
        }
    }

    pixels
}

/// Copies an inflated alpha plane into the alpha channel of `pixels`, one byte per pixel.
///
/// # Panics
///
/// * Panics if `alpha` does not hold exactly one byte per pixel of `pixels`.
pub(crate) fn merge_alpha(pixels: &mut [u8], alpha: &[u8]) {
    assert_eq!(
        pixels.len(),
        alpha.len() * QNT_RASTER_CHANNELS,
        "alpha stream size mismatch"
    );

    for (px, &a) in pixels.chunks_exact_mut(QNT_RASTER_CHANNELS).zip(alpha) {
        px[QNT_ALPHA_OFFSET] = a;
    }
}

/// Marks an image without alpha plane as opaque.
///
/// Only the top-left alpha is set. Every other alpha delta is zero, so [`unfilter`] spreads
/// 0xFF to all pixels.
///
/// [`unfilter`]: crate::unfilter::unfilter
pub(crate) fn seed_opaque_alpha(pixels: &mut [u8]) {
    if let Some(a) = pixels.get_mut(QNT_ALPHA_OFFSET) {
        *a = 0xFF;
    }
}
