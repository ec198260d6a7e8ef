pub mod preview;
pub mod sheet;
pub mod svg_to_png;

pub use preview::{PreviewLayout, PreviewRenderer};
pub use sheet::{SheetLayout, SheetRenderer};
pub use svg_to_png::SvgRenderer;
