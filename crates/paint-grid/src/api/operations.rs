//! The two core operations with reference settings.

use super::error::Error;
use crate::analysis::{ComplexityAnalyzer, ImageAnalysis};
use crate::image::ImageRef;
use crate::output::ProcessedGrid;
use crate::quantize::GridQuantizer;

/// Estimate an image's complexity and the grid size range that suits it.
///
/// Uses [`ComplexityAnalyzer::default`]: a 400x400 canvas, edge threshold 30
/// and the two-tap gradient.
///
/// # Errors
///
/// [`Error::InvalidImage`] if the image has zero width or height.
///
/// # Example
///
/// ```
/// use paint_grid::{analyze_image_complexity, ImageRef};
///
/// let white = vec![255u8; 64 * 48 * 4];
/// let image = ImageRef::new(&white, 64, 48).unwrap();
/// let analysis = analyze_image_complexity(&image).unwrap();
/// assert!(analysis.complexity() < 0.01);
/// assert_eq!((analysis.min_grid_size(), analysis.max_grid_size()), (15, 30));
/// ```
pub fn analyze_image_complexity(image: &ImageRef<'_>) -> Result<ImageAnalysis, Error> {
    ComplexityAnalyzer::default().analyze(image)
}

/// Quantize an image onto a `grid_size x grid_size` grid of standard
/// palette numbers, using the first `max_colors` paints.
///
/// # Errors
///
/// See [`GridQuantizer::quantize`].
///
/// # Example
///
/// ```
/// use paint_grid::{process_image, ImageRef};
///
/// // red, red / red, blue
/// let pixels = [
///     255, 0, 0, 255, 255, 0, 0, 255,
///     255, 0, 0, 255, 0, 0, 255, 255,
/// ];
/// let image = ImageRef::new(&pixels, 2, 2).unwrap();
/// let grid = process_image(&image, 1, 2).unwrap();
/// assert_eq!(grid.cells()[0].palette_index, 0);
/// ```
pub fn process_image(
    image: &ImageRef<'_>,
    grid_size: u32,
    max_colors: usize,
) -> Result<ProcessedGrid, Error> {
    GridQuantizer::default().quantize(image, grid_size, max_colors)
}
