//! Complexity analysis.
//!
//! [`ComplexityAnalyzer`] resamples an image onto a fixed square canvas,
//! scores edge density on the red channel and the number of distinct colors,
//! and turns the weighted combination into a recommended grid size range
//! ([`ImageAnalysis`]).

mod analyzer;
mod metrics;
mod options;
mod resample;
mod result;

pub use analyzer::ComplexityAnalyzer;
pub use options::{AnalysisOptions, EdgeOperator, DEFAULT_ANALYSIS_SIZE, DEFAULT_EDGE_THRESHOLD};
pub use result::{ImageAnalysis, MAX_GRID_FLOOR, MIN_GRID_FLOOR};
