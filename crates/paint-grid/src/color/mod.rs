//! Color type and the raw RGB utilities shared by the analyzer and quantizer.
//!
//! Both components bucket colors by their exact 8-bit RGB value and compare
//! colors with plain Euclidean distance in RGB space. There is no gamma
//! handling or perceptual color space here on purpose: a paint-by-numbers
//! sheet only needs "which of these paints is closest".
//!
//! # Example
//!
//! ```
//! use paint_grid::Rgb;
//!
//! let red: Rgb = "#ff0000".parse().unwrap();
//! assert_eq!(red.to_hex(), "#ff0000");
//! assert_eq!(red.distance(Rgb::new(255, 0, 0)), 0.0);
//! ```

mod rgb;

pub use rgb::Rgb;
