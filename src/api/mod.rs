pub mod analyze;
pub mod grid;
pub mod palette;
pub mod render;
pub mod upload;

pub use analyze::{handle_analyze, AnalysisResponse, __path_handle_analyze};
pub use grid::{handle_grid, CellResponse, GridResponse, LegendResponse, __path_handle_grid};
pub use palette::{handle_palette, PaletteColor, PaletteResponse, __path_handle_palette};
pub use render::{handle_preview, handle_sheet, __path_handle_preview, __path_handle_sheet};
pub use upload::GridQuery;
