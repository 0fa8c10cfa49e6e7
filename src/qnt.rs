/// QNT image header.
///
/// The padded raster size (`padded_width() * padded_height() * 4` bytes) of a `QntHeader` is
/// guaranteed not to exceed [`usize::MAX`], and both `width` and `height` are positive.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct QntHeader {
    pub(crate) version: u32,
    pub(crate) header_size: u32,
    pub(crate) x: u32,
    pub(crate) y: u32,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) bpp: u32,
    pub(crate) reserved: u32,
    pub(crate) pixel_size: u32,
    pub(crate) alpha_size: u32,
}

impl QntHeader {
    /// Returns the format version.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Returns the header size in bytes. Compressed pixel data starts at this offset.
    ///
    /// Version 0 headers do not store this value, and it is always 48.
    pub fn header_size(&self) -> u32 {
        self.header_size
    }

    /// Returns the display location x.
    ///
    /// This value is purely informative, and it does not change the behavior of codec.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Returns the display location y.
    ///
    /// This value is purely informative, and it does not change the behavior of codec.
    pub fn y(&self) -> u32 {
        self.y
    }

    /// Returns the nominal width of this image in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the nominal height of this image in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns bits per pixel. Always 24 for a header returned by this crate.
    pub fn bpp(&self) -> u32 {
        self.bpp
    }

    /// Returns the reserved field, which is supposed to be 1.
    ///
    /// This value is not validated.
    pub fn reserved(&self) -> u32 {
        self.reserved
    }

    /// Returns the compressed size of the color planes.
    pub fn pixel_size(&self) -> u32 {
        self.pixel_size
    }

    /// Returns the compressed size of the alpha plane. 0 means the image has no alpha plane.
    pub fn alpha_size(&self) -> u32 {
        self.alpha_size
    }

    /// Returns `width` rounded up to even.
    pub fn padded_width(&self) -> u32 {
        padded(self.width)
    }

    /// Returns `height` rounded up to even.
    pub fn padded_height(&self) -> u32 {
        padded(self.height)
    }

    /// Returns the pixel count of the padded raster.
    pub fn padded_pixel_count(&self) -> usize {
        self.padded_width() as usize * self.padded_height() as usize
    }

    pub(crate) fn pixel_stream_len(&self) -> usize {
        self.padded_pixel_count() * 3
    }

    pub(crate) fn alpha_stream_len(&self) -> usize {
        self.padded_pixel_count()
    }

    pub(crate) fn raster_len(&self) -> usize {
        self.padded_pixel_count() * QNT_RASTER_CHANNELS
    }
}

/// Rounds up to even. `value` must be below `u32::MAX`.
pub(crate) const fn padded(value: u32) -> u32 {
    (value + 1) & !1
}

/// Decoded QNT image.
///
/// The raster always covers the padded dimensions ([`QntHeader::padded_width`] ×
/// [`QntHeader::padded_height`]) in RGBA8, row-major.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct QntImage {
    header: QntHeader,
    pixels: Vec<u8>,
}

impl QntImage {
    pub(crate) fn new(header: QntHeader, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), header.raster_len());

        Self { header, pixels }
    }

    /// Returns the header this image was decoded from.
    pub fn header(&self) -> &QntHeader {
        &self.header
    }

    /// Returns the raster width in pixels (the padded width).
    pub fn width(&self) -> u32 {
        self.header.padded_width()
    }

    /// Returns the raster height in pixels (the padded height).
    pub fn height(&self) -> u32 {
        self.header.padded_height()
    }

    /// Returns the RGBA8 raster.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consumes this image and returns the RGBA8 raster.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Copies the nominal `width * height` region out of the padded raster.
    ///
    /// The returned buffer is RGBA8, row-major, with a stride of `header().width() * 4`.
    pub fn to_cropped(&self) -> Vec<u8> {
        let stride = self.width() as usize * QNT_RASTER_CHANNELS;
        let row_len = self.header.width as usize * QNT_RASTER_CHANNELS;

        self.pixels
            .chunks_exact(stride)
            .take(self.header.height as usize)
            .flat_map(|row| &row[..row_len])
            .copied()
            .collect()
    }
}

pub(crate) const QNT_MAGIC: &[u8] = b"QNT\0";
pub(crate) const QNT_HEADER_SIZE_V0: u32 = 48;
pub(crate) const QNT_BPP: u32 = 24;

/// Largest width/height accepted by the header parser.
pub(crate) const QNT_DIMENSION_MAX: u32 = i32::MAX as u32;

/// Byte offsets of the color channels in an RGBA8 pixel, in the order their planes are stored.
pub(crate) const QNT_PLANE_ORDER: [usize; 3] = [2, 1, 0];
pub(crate) const QNT_ALPHA_OFFSET: usize = 3;
pub(crate) const QNT_RASTER_CHANNELS: usize = 4;
