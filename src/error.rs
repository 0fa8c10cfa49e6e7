use thiserror::Error;

/// Specialized [`Result`] for `img-qnt` crate.
pub type QntResult<T> = Result<T, QntError>;

/// Errors on `img-qnt` crate.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Error)]
pub enum QntError {
    /// The input is not a QNT image this crate can decode (bad magic, unsupported bit depth,
    /// truncated header, ...).
    #[error("format error: {0}")]
    Format(String),

    /// A compressed stream is corrupt, truncated, or inflates to an unexpected size.
    #[error("{stream}: {msg}")]
    Decompress { stream: QntStream, msg: String },
}

impl QntError {
    pub(crate) fn new_format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    pub(crate) fn new_decompress(stream: QntStream, msg: impl Into<String>) -> Self {
        Self::Decompress {
            stream,
            msg: msg.into(),
        }
    }
}

/// Compressed streams in a QNT container.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum QntStream {
    /// Color planes.
    Pixel,

    /// Alpha plane.
    Alpha,
}

impl std::fmt::Display for QntStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pixel => f.write_str("broken image"),
            Self::Alpha => f.write_str("broken alpha image"),
        }
    }
}
