//! Unified error type for the paint-grid public API.
//!
//! [`Error`] has exactly two variants, matching the two ways a caller can
//! get a request wrong: a bad image or bad parameters. Both are permanent
//! for the given input, so there is nothing to retry.

use thiserror::Error;

use crate::palette::PaletteError;

/// Error returned by [`analyze_image_complexity`](crate::analyze_image_complexity)
/// and [`process_image`](crate::process_image).
///
/// # Example
///
/// ```
/// use paint_grid::{process_image, Error, ImageRef};
///
/// let pixels = vec![255u8; 4 * 4 * 4];
/// let image = ImageRef::new(&pixels, 4, 4).unwrap();
/// let err = process_image(&image, 0, 12).unwrap_err();
/// assert!(matches!(err, Error::InvalidParameters(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The image cannot be processed (zero area, corrupt buffer)
    #[error("invalid image: {0}")]
    InvalidImage(#[from] ImageError),
    /// Grid size or color count out of range
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[from] ParameterError),
}

/// Why an image buffer was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    /// Width or height is zero
    #[error("image has zero area ({width}x{height})")]
    ZeroArea { width: u32, height: u32 },
    /// Buffer length does not match `width * height * 4`
    #[error("RGBA buffer has {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },
    /// Scaling onto the analysis canvas failed
    #[error("failed to resample image: {0}")]
    Resample(String),
}

/// Why a quantization request was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// `grid_size` was zero
    #[error("grid size must be at least 1")]
    GridSizeZero,
    /// `max_colors` was zero or above the palette size
    #[error("max colors {requested} out of range (1..={available})")]
    MaxColorsOutOfRange { requested: usize, available: usize },
    /// A cell would be narrower or shorter than one pixel
    #[error("grid size {grid_size} exceeds image dimensions {width}x{height}")]
    GridLargerThanImage {
        grid_size: u32,
        width: u32,
        height: u32,
    },
    /// A caller-supplied palette was rejected
    #[error("invalid palette: {0}")]
    InvalidPalette(PaletteError),
}

impl From<PaletteError> for ParameterError {
    fn from(err: PaletteError) -> Self {
        match err {
            PaletteError::InvalidSize {
                requested,
                available,
            } => Self::MaxColorsOutOfRange {
                requested,
                available,
            },
            other => Self::InvalidPalette(other),
        }
    }
}

impl From<PaletteError> for Error {
    fn from(err: PaletteError) -> Self {
        Self::InvalidParameters(err.into())
    }
}
