//! Grid quantization.
//!
//! [`GridQuantizer`] splits an image into a `grid_size x grid_size` lattice,
//! reduces each cell to its most frequent exact color and snaps that color
//! to the nearest of the first `max_colors` palette entries.

mod dominant;
mod quantizer;

pub use quantizer::GridQuantizer;
