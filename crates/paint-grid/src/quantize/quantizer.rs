//! The grid quantizer.

use super::dominant::{dominant_color, CellRect};
use crate::api::{Error, ParameterError};
use crate::image::ImageRef;
use crate::output::{GridCell, ProcessedGrid};
use crate::palette::Palette;

/// Reduces an image to a grid of palette-numbered cells.
///
/// Holds the full palette; each call truncates it to the requested number of
/// colors, so paint numbers are the same for every `max_colors`.
///
/// # Example
///
/// ```
/// use paint_grid::{GridQuantizer, ImageRef, Palette};
///
/// let palette = Palette::from_hex(&[("Black", "#000000"), ("White", "#ffffff")]).unwrap();
/// let quantizer = GridQuantizer::new(palette);
///
/// // 2x1: dark gray | light gray
/// let pixels = [40, 40, 40, 255, 220, 220, 220, 255];
/// let image = ImageRef::new(&pixels, 2, 1).unwrap();
/// let grid = quantizer.quantize(&image, 1, 2).unwrap();
/// assert_eq!(grid.cells()[0].color_hex, "#000000");
/// ```
#[derive(Debug, Clone)]
pub struct GridQuantizer {
    palette: Palette,
}

impl GridQuantizer {
    /// Create a quantizer over `palette`.
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// The full palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Quantize `image` onto a `grid_size x grid_size` grid using the first
    /// `max_colors` palette entries.
    ///
    /// Cells are `floor(width / grid_size)` by `floor(height / grid_size)`
    /// pixels anchored at the top-left corner; pixels past the last full cell
    /// on the right and bottom edges belong to no cell.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParameters`] if `grid_size` is zero, `max_colors` is
    ///   not in `1..=palette.len()`, or `grid_size` exceeds the image width
    ///   or height
    /// - [`Error::InvalidImage`] if the image has zero width or height
    pub fn quantize(
        &self,
        image: &ImageRef<'_>,
        grid_size: u32,
        max_colors: usize,
    ) -> Result<ProcessedGrid, Error> {
        if grid_size == 0 {
            return Err(ParameterError::GridSizeZero.into());
        }
        let palette = self.palette.truncate(max_colors)?;
        image.ensure_not_empty()?;
        if grid_size > image.width() || grid_size > image.height() {
            return Err(ParameterError::GridLargerThanImage {
                grid_size,
                width: image.width(),
                height: image.height(),
            }
            .into());
        }

        let cell_width = image.width() / grid_size;
        let cell_height = image.height() / grid_size;

        let mut cells = Vec::with_capacity(grid_size as usize * grid_size as usize);
        for grid_y in 0..grid_size {
            for grid_x in 0..grid_size {
                let rect = CellRect {
                    x: grid_x * cell_width,
                    y: grid_y * cell_height,
                    width: cell_width,
                    height: cell_height,
                };
                let (palette_index, _) = palette.find_nearest(dominant_color(image, rect));
                cells.push(GridCell {
                    grid_x,
                    grid_y,
                    palette_index,
                    color_hex: palette.color(palette_index).to_hex(),
                });
            }
        }

        Ok(ProcessedGrid::new(grid_size, cells, palette))
    }
}

impl Default for GridQuantizer {
    /// A quantizer over the standard palette.
    fn default() -> Self {
        Self::new(Palette::standard())
    }
}
