//! Public API for the paint-grid crate.
//!
//! The two entry points, [`analyze_image_complexity`] and [`process_image`],
//! plus the unified [`Error`] type they return.

mod error;
mod operations;

pub use error::{Error, ImageError, ParameterError};
pub use operations::{analyze_image_complexity, process_image};
