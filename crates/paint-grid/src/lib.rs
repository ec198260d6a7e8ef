#![allow(clippy::module_inception)]

//! paint-grid: image complexity analysis and palette grid quantization for
//! paint-by-numbers sheets.
//!
//! The crate is pure: no I/O, no global state and no logging. Callers decode
//! an image into an RGBA8 buffer, borrow it as an [`ImageRef`] and call one
//! of the two operations.
//!
//! # Quick Start
//!
//! ```
//! use paint_grid::{analyze_image_complexity, process_image, ImageRef};
//!
//! let pixels = vec![255u8; 120 * 80 * 4];
//! let image = ImageRef::new(&pixels, 120, 80).unwrap();
//!
//! let analysis = analyze_image_complexity(&image).unwrap();
//! let grid = process_image(&image, analysis.min_grid_size(), 12).unwrap();
//!
//! assert_eq!(grid.cells().len(), 15 * 15);
//! ```
//!
//! # Complexity Analysis
//!
//! [`ComplexityAnalyzer`] resamples the image onto a 400x400 white canvas,
//! preserving aspect ratio, then scans the interior once:
//!
//! - edge density: red-channel gradient magnitude above 30, normalized by
//!   10% of the canvas area
//! - color variance: distinct exact RGB values, normalized by 1000
//!
//! `complexity = 0.7 * edges + 0.3 * colors` and the recommended grid range
//! is `[max(10, round(15 + 10c)), max(30, round(30 + 20c))]`.
//!
//! # Quantization
//!
//! [`GridQuantizer`] cuts the image into `grid_size^2` equal cells of
//! `floor(width / grid_size) x floor(height / grid_size)` pixels, takes the
//! most frequent exact color of each cell and maps it to the nearest entry
//! (plain RGB Euclidean distance) of the palette truncated to `max_colors`.
//! Truncation keeps order, so a paint's number never depends on
//! `max_colors`.
//!
//! # Palette
//!
//! [`Palette::standard`] holds 24 named paints generated at build time from
//! `data/palette.tsv`. Custom palettes go through [`Palette::new`] or
//! [`Palette::from_hex`] and [`GridQuantizer::new`].

mod analysis;
mod api;
mod color;
mod image;
mod output;
mod palette;
mod quantize;


pub use analysis::{
    AnalysisOptions, ComplexityAnalyzer, EdgeOperator, ImageAnalysis, DEFAULT_ANALYSIS_SIZE,
    DEFAULT_EDGE_THRESHOLD, MAX_GRID_FLOOR, MIN_GRID_FLOOR,
};
pub use api::{analyze_image_complexity, process_image, Error, ImageError, ParameterError};
pub use color::Rgb;
pub use image::ImageRef;
pub use output::{GridCell, LegendEntry, ProcessedGrid};
pub use palette::{
    NamedColor, Palette, PaletteError, ParseColorError, STANDARD_COLORS,
    STANDARD_PALETTE_VERSION,
};
pub use quantize::GridQuantizer;
