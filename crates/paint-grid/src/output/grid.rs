//! ProcessedGrid, its cells and the legend derived from them.

use crate::palette::Palette;

/// One cell of the paint-by-numbers grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    /// Column, `0..grid_size`
    pub grid_x: u32,
    /// Row, `0..grid_size`
    pub grid_y: u32,
    /// Index into the truncated palette
    pub palette_index: usize,
    /// Palette color of this cell as `#rrggbb`
    pub color_hex: String,
}

impl GridCell {
    /// The number printed in the cell (`palette_index + 1`).
    #[inline]
    pub fn number(&self) -> usize {
        self.palette_index + 1
    }
}

/// A palette entry that appears in the grid, with its usage count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    /// Printed number (`palette index + 1`)
    pub number: usize,
    pub name: String,
    pub hex: String,
    /// How many cells use this paint
    pub cell_count: usize,
}

/// The result of quantizing an image onto a grid.
///
/// Holds exactly `grid_size * grid_size` cells, row-major (`y` outer, `x`
/// inner), and owns the truncated palette so renderers can print the legend
/// without knowing which palette or `max_colors` produced the grid.
///
/// # Example
///
/// ```
/// use paint_grid::{process_image, ImageRef};
///
/// let red = [229u8, 57, 53, 255];
/// let pixels = red.repeat(4 * 4);
/// let image = ImageRef::new(&pixels, 4, 4).unwrap();
///
/// let grid = process_image(&image, 2, 12).unwrap();
/// assert_eq!(grid.cells().len(), 4);
/// assert_eq!(grid.cell(1, 1).unwrap().number(), 1);
/// assert_eq!(grid.legend()[0].name, "Red");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedGrid {
    grid_size: u32,
    cells: Vec<GridCell>,
    palette: Palette,
}

impl ProcessedGrid {
    /// Assemble a grid from row-major cells.
    ///
    /// Only the quantizer builds grids, so every `palette_index` is known to
    /// be in range of `palette`.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `cells.len() == grid_size * grid_size`.
    pub(crate) fn new(grid_size: u32, cells: Vec<GridCell>, palette: Palette) -> Self {
        debug_assert_eq!(
            cells.len(),
            grid_size as usize * grid_size as usize,
            "cell count ({}) must equal grid_size^2 ({grid_size}^2)",
            cells.len(),
        );
        Self {
            grid_size,
            cells,
            palette,
        }
    }

    /// Cells per side.
    #[inline]
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// All cells, row-major.
    #[inline]
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// The truncated palette the cells index into.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The cell at column `x`, row `y`.
    pub fn cell(&self, x: u32, y: u32) -> Option<&GridCell> {
        if x >= self.grid_size || y >= self.grid_size {
            return None;
        }
        self.cells
            .get(y as usize * self.grid_size as usize + x as usize)
    }

    /// Palette indices of all cells, row-major.
    pub fn indices(&self) -> Vec<usize> {
        self.cells.iter().map(|cell| cell.palette_index).collect()
    }

    /// The paints actually used, in palette order, with cell counts.
    pub fn legend(&self) -> Vec<LegendEntry> {
        let mut counts = vec![0usize; self.palette.len()];
        for cell in &self.cells {
            if let Some(count) = counts.get_mut(cell.palette_index) {
                *count += 1;
            }
        }

        self.palette
            .iter()
            .zip(counts)
            .enumerate()
            .filter(|(_, (_, count))| *count > 0)
            .map(|(index, (entry, cell_count))| LegendEntry {
                number: index + 1,
                name: entry.name.clone(),
                hex: entry.hex(),
                cell_count,
            })
            .collect()
    }

    /// Consume the grid, returning its cells.
    pub fn into_cells(self) -> Vec<GridCell> {
        self.cells
    }
}
