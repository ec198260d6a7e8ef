//! The complexity analyzer.

use super::metrics::measure;
use super::options::AnalysisOptions;
use super::resample::resample_to_canvas;
use super::result::ImageAnalysis;
use crate::api::Error;
use crate::image::ImageRef;

/// Estimates how busy an image is and recommends a grid size range.
///
/// The image is resampled onto a fixed square canvas first, so the result
/// depends on what the picture shows rather than on its pixel dimensions.
///
/// # Example
///
/// ```
/// use paint_grid::{ComplexityAnalyzer, ImageRef};
///
/// let pixels = vec![255u8; 50 * 50 * 4];
/// let image = ImageRef::new(&pixels, 50, 50).unwrap();
/// let analysis = ComplexityAnalyzer::default().analyze(&image).unwrap();
/// assert_eq!(analysis.min_grid_size(), 15);
/// assert_eq!(analysis.max_grid_size(), 30);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ComplexityAnalyzer {
    options: AnalysisOptions,
}

impl ComplexityAnalyzer {
    /// Create an analyzer with the given options.
    pub fn new(options: AnalysisOptions) -> Self {
        Self { options }
    }

    /// The options in use.
    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Analyze an image.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidImage`] if the image has zero width or height.
    pub fn analyze(&self, image: &ImageRef<'_>) -> Result<ImageAnalysis, Error> {
        image.ensure_not_empty()?;

        let size = self.options.analysis_size.max(1);
        let canvas = resample_to_canvas(image, size)?;
        let metrics = measure(
            &canvas,
            self.options.edge_threshold,
            self.options.edge_operator,
        );

        Ok(ImageAnalysis::from_scores(
            metrics.edge_complexity(size),
            metrics.color_variance(),
        ))
    }
}
