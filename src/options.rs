/// Decoder limits.
///
/// Header fields come from untrusted input, so the decoder refuses images whose nominal
/// dimensions exceed these limits before inflating anything.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct QntOptions {
    max_width: u32,
    max_height: u32,
}

impl QntOptions {
    /// Returns the maximum accepted width. Defaults to `1 << 14`.
    pub const fn max_width(&self) -> u32 {
        self.max_width
    }

    /// Returns the maximum accepted height. Defaults to `1 << 14`.
    pub const fn max_height(&self) -> u32 {
        self.max_height
    }

    /// Sets the maximum accepted width.
    #[must_use]
    pub fn set_max_width(mut self, width: u32) -> Self {
        self.max_width = width;
        self
    }

    /// Sets the maximum accepted height.
    #[must_use]
    pub fn set_max_height(mut self, height: u32) -> Self {
        self.max_height = height;
        self
    }
}

impl Default for QntOptions {
    fn default() -> Self {
        Self {
            max_width: 1 << 14,
            max_height: 1 << 14,
        }
    }
}
