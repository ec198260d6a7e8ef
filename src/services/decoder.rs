//! Upload decoding into RGBA8 buffers for the core.

use image::{ImageFormat, ImageReader, Limits};
use paint_grid::ImageRef;
use std::io::Cursor;

/// Error type for image decoding
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Empty upload")]
    Empty,

    #[error("Unrecognized image format")]
    UnknownFormat,

    #[error("Unsupported image format: {0:?}")]
    UnsupportedFormat(ImageFormat),

    #[error("Image exceeds limits: {0}")]
    Limits(String),

    #[error("Failed to decode image: {0}")]
    Image(String),
}

impl From<image::ImageError> for DecodeError {
    fn from(e: image::ImageError) -> Self {
        match e {
            image::ImageError::Limits(e) => DecodeError::Limits(e.to_string()),
            other => DecodeError::Image(other.to_string()),
        }
    }
}

/// A decoded image as tightly packed RGBA8 rows
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Borrow the pixels for the core operations
    pub fn as_image_ref(&self) -> Result<ImageRef<'_>, paint_grid::ImageError> {
        ImageRef::new(&self.pixels, self.width, self.height)
    }
}

/// Decodes PNG, JPEG, GIF, WebP and BMP uploads with dimension limits
#[derive(Debug, Clone)]
pub struct ImageDecoder {
    max_dimension: u32,
}

const SUPPORTED_FORMATS: [ImageFormat; 5] = [
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::Gif,
    ImageFormat::WebP,
    ImageFormat::Bmp,
];

impl ImageDecoder {
    pub fn new(max_dimension: u32) -> Self {
        Self { max_dimension }
    }

    /// Decode an encoded image, sniffing the format from its content
    pub fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::Empty);
        }

        let mut reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| DecodeError::Image(e.to_string()))?;

        let format = reader.format().ok_or(DecodeError::UnknownFormat)?;
        if !SUPPORTED_FORMATS.contains(&format) {
            return Err(DecodeError::UnsupportedFormat(format));
        }

        let mut limits = Limits::default();
        limits.max_image_width = Some(self.max_dimension);
        limits.max_image_height = Some(self.max_dimension);
        reader.limits(limits);

        let rgba = reader.decode()?.into_rgba8();
        let (width, height) = rgba.dimensions();

        tracing::debug!(?format, width, height, "Decoded upload");

        Ok(DecodedImage {
            width,
            height,
            pixels: rgba.into_raw(),
        })
    }
}
