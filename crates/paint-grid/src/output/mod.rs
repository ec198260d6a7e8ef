//! Quantization output.
//!
//! [`ProcessedGrid`] is the canonical result: one [`GridCell`] per lattice
//! position in row-major order, plus the truncated palette the cells were
//! matched against. Renderers only ever read it.

mod grid;

pub use grid::{GridCell, LegendEntry, ProcessedGrid};
