//! Palette types and utilities
//!
//! A [`Palette`] is an ordered list of named paints. The position of a paint
//! in the list is its printed number minus one, so palettes are only ever
//! truncated from the end and never reordered.

mod error;
mod palette;
mod standard;

pub use error::{PaletteError, ParseColorError};
pub use palette::{NamedColor, Palette};
pub use standard::{STANDARD_COLORS, STANDARD_PALETTE_VERSION};
