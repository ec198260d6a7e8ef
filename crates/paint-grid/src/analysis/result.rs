//! The analyzer's output and the grid-size range derived from it.

/// Weight of edge density in the combined complexity score.
const EDGE_WEIGHT: f64 = 0.7;
/// Weight of color variance in the combined complexity score.
const COLOR_WEIGHT: f64 = 0.3;

/// Smallest grid the analyzer ever recommends.
pub const MIN_GRID_FLOOR: u32 = 10;
/// Smallest upper bound the analyzer ever recommends.
pub const MAX_GRID_FLOOR: u32 = 30;

/// Complexity of an image and the grid-size range recommended for it.
///
/// Produced by [`ComplexityAnalyzer::analyze`](super::ComplexityAnalyzer::analyze).
/// Busy images get finer grids: `min_grid_size` moves from 15 to 25 and
/// `max_grid_size` from 30 to 50 as complexity goes from 0 to 1.
///
/// # Example
///
/// ```
/// use paint_grid::ImageAnalysis;
///
/// let analysis = ImageAnalysis::from_scores(0.0, 0.0);
/// assert_eq!(analysis.min_grid_size(), 15);
/// assert_eq!(analysis.max_grid_size(), 30);
/// assert_eq!(analysis.suggested_grid_size(), 23);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageAnalysis {
    min_grid_size: u32,
    max_grid_size: u32,
    complexity: f64,
    edge_complexity: f64,
    color_variance: f64,
}

impl ImageAnalysis {
    /// Combine the two component scores (each in `[0, 1]`) into an analysis.
    pub fn from_scores(edge_complexity: f64, color_variance: f64) -> Self {
        let edge_complexity = edge_complexity.clamp(0.0, 1.0);
        let color_variance = color_variance.clamp(0.0, 1.0);
        let complexity = EDGE_WEIGHT * edge_complexity + COLOR_WEIGHT * color_variance;

        let min_grid_size = ((15.0 + complexity * 10.0).round() as u32).max(MIN_GRID_FLOOR);
        let max_grid_size = ((30.0 + complexity * 20.0).round() as u32).max(MAX_GRID_FLOOR);
        debug_assert!(
            min_grid_size <= max_grid_size,
            "min grid size {min_grid_size} exceeds max {max_grid_size}"
        );

        Self {
            min_grid_size,
            max_grid_size,
            complexity,
            edge_complexity,
            color_variance,
        }
    }

    /// Lower end of the recommended grid size range (>= 10).
    #[inline]
    pub fn min_grid_size(&self) -> u32 {
        self.min_grid_size
    }

    /// Upper end of the recommended grid size range (>= `min_grid_size`).
    #[inline]
    pub fn max_grid_size(&self) -> u32 {
        self.max_grid_size
    }

    /// Combined score in `[0, 1]`.
    #[inline]
    pub fn complexity(&self) -> f64 {
        self.complexity
    }

    /// Edge density component in `[0, 1]`.
    #[inline]
    pub fn edge_complexity(&self) -> f64 {
        self.edge_complexity
    }

    /// Color variance component in `[0, 1]`.
    #[inline]
    pub fn color_variance(&self) -> f64 {
        self.color_variance
    }

    /// Midpoint of the recommended range, rounded: a sensible starting grid.
    pub fn suggested_grid_size(&self) -> u32 {
        ((self.min_grid_size + self.max_grid_size) as f64 / 2.0).round() as u32
    }
}
