//! Borrowed RGBA image buffer.

use crate::api::ImageError;
use crate::color::Rgb;

/// A read-only view of a decoded RGBA8 image.
///
/// Pixels are stored row-major, four bytes per pixel (`R, G, B, A`). The
/// buffer is owned by the caller; both core operations only borrow it.
///
/// # Example
///
/// ```
/// use paint_grid::ImageRef;
///
/// let pixels = vec![255u8; 2 * 2 * 4];
/// let image = ImageRef::new(&pixels, 2, 2).unwrap();
/// assert_eq!(image.width(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ImageRef<'a> {
    pixels: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> ImageRef<'a> {
    /// Wrap an RGBA8 buffer.
    ///
    /// Zero width or height is accepted here and rejected by the operations
    /// that need pixels, so callers get the error from the operation they
    /// invoked.
    ///
    /// # Errors
    ///
    /// [`ImageError::BufferSizeMismatch`] if `pixels.len() != width * height * 4`.
    pub fn new(pixels: &'a [u8], width: u32, height: u32) -> Result<Self, ImageError> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(ImageError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The raw RGBA bytes.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.pixels
    }

    /// The RGBA bytes of pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the image.
    #[inline]
    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// The color of pixel `(x, y)` with alpha ignored.
    #[inline]
    pub fn rgb(&self, x: u32, y: u32) -> Rgb {
        let [r, g, b, _] = self.rgba(x, y);
        Rgb::new(r, g, b)
    }

    /// The RGBA bytes of row `y`.
    #[inline]
    pub fn row(&self, y: u32) -> &'a [u8] {
        let stride = self.width as usize * 4;
        let start = y as usize * stride;
        &self.pixels[start..start + stride]
    }

    /// Ensure the image has at least one pixel.
    pub(crate) fn ensure_not_empty(&self) -> Result<(), ImageError> {
        if self.is_empty() {
            return Err(ImageError::ZeroArea {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
