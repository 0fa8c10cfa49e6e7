use crate::qnt::QNT_RASTER_CHANNELS;

/// Reverses the QNT predictive filter in place. All four channels are treated alike.
///
/// * Top row: each pixel is predicted by its left neighbor.
/// * Left column: each pixel is predicted by the pixel above.
/// * Others: each pixel is predicted by the average of the pixels above and to the left.
///
/// A stored byte is `prediction - value` (wrapping), and predictions always use already
/// reconstructed values.
///
/// # Panics
///
/// * Panics if `pixels.len()` is not `width * height * 4`.
pub(crate) fn unfilter(pixels: &mut [u8], width: usize, height: usize) {
    let stride = width * QNT_RASTER_CHANNELS;
    assert_eq!(pixels.len(), stride * height, "raster size mismatch");

    if stride == 0 {
        return;
    }

    let mut rows = pixels.chunks_exact_mut(stride);
    let Some(mut prev) = rows.next() else {
        return;
    };

    for i in QNT_RASTER_CHANNELS..stride {
        prev[i] = prev[i - QNT_RASTER_CHANNELS].wrapping_sub(prev[i]);
    }

    for row in rows {
        for c in 0..QNT_RASTER_CHANNELS {
            row[c] = prev[c].wrapping_sub(row[c]);
        }
        for i in QNT_RASTER_CHANNELS..stride {
            let up = u16::from(prev[i]);
            let left = u16::from(row[i - QNT_RASTER_CHANNELS]);
            let pred = ((up + left) >> 1) as u8;
            row[i] = pred.wrapping_sub(row[i]);
        }
        prev = row;
    }
}
