use std::io::Read;

use flate2::read::ZlibDecoder;
use log::trace;

use crate::error::{QntError, QntResult, QntStream};

/// Inflates a zlib stream which must expand to exactly `raw_len` bytes.
///
/// At most `raw_len + 1` bytes are pulled from the inflater, so a stream that expands further
/// than declared never grows the output past that.
///
/// # Errors
///
/// * Returns error if the stream is corrupt.
/// * Returns error if the stream expands to a size other than `raw_len`.
pub(crate) fn inflate_exact(
    compressed: &[u8],
    raw_len: usize,
    stream: QntStream,
) -> QntResult<Vec<u8>> {
    let limit = u64::try_from(raw_len)
        .ok()
        .and_then(|n| n.checked_add(1))
        .ok_or_else(|| QntError::new_decompress(stream, "expected size overflow"))?;

    let mut raw = Vec::new();
    ZlibDecoder::new(compressed)
        .take(limit)
        .read_to_end(&mut raw)
        .map_err(|e| QntError::new_decompress(stream, e.to_string()))?;

    if raw.len() != raw_len {
        let msg = if raw.len() > raw_len {
            format!("stream expands past {} bytes", raw_len)
        } else {
            format!("expected {} bytes, got {}", raw_len, raw.len())
        };
        return Err(QntError::new_decompress(stream, msg));
    }

    trace!(
        "inflated {:?} stream: {} -> {} bytes",
        stream,
        compressed.len(),
        raw.len()
    );

    Ok(raw)
}
