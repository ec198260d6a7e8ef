//! Edge density and color variance over the analysis canvas.

use std::collections::HashSet;

use super::options::EdgeOperator;
use super::resample::AnalysisCanvas;

/// Fraction of canvas pixels that counts as fully edge-dense.
const EDGE_DENSITY_SATURATION: f64 = 0.1;

/// Distinct color count that counts as fully varied.
const DISTINCT_COLOR_SATURATION: f64 = 1000.0;

/// Raw counts gathered from one scan of the canvas interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CanvasMetrics {
    /// Interior pixels whose gradient exceeded the threshold
    pub edge_count: u64,
    /// Distinct exact RGB values among the interior pixels
    pub distinct_colors: usize,
}

impl CanvasMetrics {
    /// `min(1, edge_count / (A * A * 0.1))`
    pub(crate) fn edge_complexity(&self, canvas_size: u32) -> f64 {
        let area = canvas_size as f64 * canvas_size as f64;
        (self.edge_count as f64 / (area * EDGE_DENSITY_SATURATION)).min(1.0)
    }

    /// `min(1, distinct_colors / 1000)`
    pub(crate) fn color_variance(&self) -> f64 {
        (self.distinct_colors as f64 / DISTINCT_COLOR_SATURATION).min(1.0)
    }
}

/// Scan every interior pixel (1-pixel border excluded) once, counting edges
/// on the red channel and collecting distinct colors.
pub(crate) fn measure(
    canvas: &AnalysisCanvas,
    threshold: f64,
    operator: EdgeOperator,
) -> CanvasMetrics {
    let size = canvas.size();
    let mut edge_count = 0u64;
    let mut colors = HashSet::new();

    if size < 3 {
        return CanvasMetrics {
            edge_count,
            distinct_colors: 0,
        };
    }

    let red = |x: u32, y: u32| canvas.get(x, y).r as i32;

    for y in 1..size - 1 {
        for x in 1..size - 1 {
            let (gx, gy) = match operator {
                EdgeOperator::TwoTap => (
                    red(x + 1, y) - red(x - 1, y),
                    red(x, y + 1) - red(x, y - 1),
                ),
                EdgeOperator::Sobel => {
                    let gx = (red(x + 1, y - 1) + 2 * red(x + 1, y) + red(x + 1, y + 1))
                        - (red(x - 1, y - 1) + 2 * red(x - 1, y) + red(x - 1, y + 1));
                    let gy = (red(x - 1, y + 1) + 2 * red(x, y + 1) + red(x + 1, y + 1))
                        - (red(x - 1, y - 1) + 2 * red(x, y - 1) + red(x + 1, y - 1));
                    (gx, gy)
                }
            };

            let gradient = ((gx * gx + gy * gy) as f64).sqrt();
            if gradient > threshold {
                edge_count += 1;
            }

            colors.insert(canvas.get(x, y).packed());
        }
    }

    CanvasMetrics {
        edge_count,
        distinct_colors: colors.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::resample::resample_to_canvas;
    use crate::image::ImageRef;

    fn canvas_from(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 4]) -> AnalysisCanvas {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&f(x, y));
            }
        }
        let image = ImageRef::new(&pixels, width, height).unwrap();
        resample_to_canvas(&image, width.max(height)).unwrap()
    }

    /// Red step at x = 5
    fn step(x: u32, left: u8, right: u8) -> [u8; 4] {
        [if x < 5 { left } else { right }, 0, 0, 255]
    }

    #[test]
    fn test_uniform_canvas_has_no_edges_and_one_color() {
        let canvas = AnalysisCanvas::blank(10);
        let metrics = measure(&canvas, 30.0, EdgeOperator::TwoTap);
        assert_eq!(metrics.edge_count, 0);
        assert_eq!(metrics.distinct_colors, 1);
        assert_eq!(metrics.edge_complexity(10), 0.0);
        assert_eq!(metrics.color_variance(), 0.001);
    }

    #[test]
    fn test_vertical_step_counts_two_columns() {
        // Left half black, right half white: the central difference fires on
        // the two interior columns either side of the step.
        let canvas = canvas_from(10, 10, |x, _| {
            if x < 5 {
                [0, 0, 0, 255]
            } else {
                [255; 4]
            }
        });
        let metrics = measure(&canvas, 30.0, EdgeOperator::TwoTap);
        assert_eq!(metrics.edge_count, 2 * 8);
        assert_eq!(metrics.distinct_colors, 2);
    }

    #[test]
    fn test_only_red_channel_is_examined() {
        // Pure green/blue step: red is 0 on both sides
        let canvas = canvas_from(10, 10, |x, _| {
            if x < 5 {
                [0, 255, 0, 255]
            } else {
                [0, 0, 255, 255]
            }
        });
        let metrics = measure(&canvas, 30.0, EdgeOperator::TwoTap);
        assert_eq!(metrics.edge_count, 0);
        assert_eq!(metrics.distinct_colors, 2);
    }

    #[test]
    fn test_threshold_is_strict() {
        // Step of exactly 30 in red never exceeds the threshold
        let canvas = canvas_from(10, 10, |x, _| step(x, 100, 130));
        assert_eq!(measure(&canvas, 30.0, EdgeOperator::TwoTap).edge_count, 0);
        assert_eq!(measure(&canvas, 29.0, EdgeOperator::TwoTap).edge_count, 16);
    }

    #[test]
    fn test_sobel_detects_weaker_steps() {
        let canvas = canvas_from(10, 10, |x, _| step(x, 100, 120));
        assert_eq!(measure(&canvas, 30.0, EdgeOperator::TwoTap).edge_count, 0);
        // Sobel response to a step of 20 is 80
        assert_eq!(measure(&canvas, 30.0, EdgeOperator::Sobel).edge_count, 16);
    }

    #[test]
    fn test_tiny_canvas_has_no_interior() {
        let metrics = measure(&AnalysisCanvas::blank(2), 30.0, EdgeOperator::TwoTap);
        assert_eq!(metrics.edge_count, 0);
        assert_eq!(metrics.distinct_colors, 0);
    }

    #[test]
    fn test_scores_saturate_at_one() {
        let metrics = CanvasMetrics {
            edge_count: 1_000_000,
            distinct_colors: 5000,
        };
        assert_eq!(metrics.edge_complexity(400), 1.0);
        assert_eq!(metrics.color_variance(), 1.0);

        let half = CanvasMetrics {
            edge_count: 8000,
            distinct_colors: 500,
        };
        assert!((half.edge_complexity(400) - 0.5).abs() < 1e-12);
        assert!((half.color_variance() - 0.5).abs() < 1e-12);
    }
}
