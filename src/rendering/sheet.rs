//! Printable A4 sheet: numbered outline grid plus a color legend, as SVG.
//!
//! Geometry is computed here in millimetres; the Tera template only places
//! the precomputed shapes. Text widths are estimated from character counts
//! because no font metrics are available at render time.

use paint_grid::ProcessedGrid;
use serde::Serialize;
use tera::{Context, Tera};

use crate::assets::AssetLoader;
use crate::error::RenderError;
use crate::models::SheetConfig;

const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN: f64 = 10.0;
/// Vertical room reserved for the title block above the grid
const HEADER_HEIGHT: f64 = 30.0;
const TITLE_FONT_PT: f64 = 16.0;
const SUBTITLE_FONT_PT: f64 = 10.0;
const LEGEND_FONT_PT: f64 = 10.0;
const LEGEND_LINE_HEIGHT: f64 = 5.0;
const MAX_NUMBER_FONT_PT: f64 = 14.0;
const CELL_LINE_WIDTH: f64 = 0.1;
/// Average glyph advance as a fraction of the font size
const AVG_CHAR_WIDTH_EM: f64 = 0.5;
const PT_TO_MM: f64 = 0.352778;

#[derive(Debug, Clone, Serialize)]
pub struct SheetText {
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SheetCell {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    /// Center of the cell, where the number is anchored
    pub cx: f64,
    pub cy: f64,
    pub number: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SheetLegend {
    pub heading: SheetText,
    pub items: Vec<SheetText>,
}

/// Everything the sheet template draws, in millimetres.
#[derive(Debug, Clone, Serialize)]
pub struct SheetLayout {
    pub page_width: f64,
    pub page_height: f64,
    pub title: SheetText,
    pub subtitle: SheetText,
    pub cell_size: f64,
    pub line_width: f64,
    pub number_font_size: f64,
    pub cells: Vec<SheetCell>,
    pub legend: SheetLegend,
}

impl SheetLayout {
    /// Lay out `grid` on an A4 page.
    ///
    /// The grid is square, as large as fits below the header, and centered
    /// horizontally. The legend lists every paint of the grid's palette and
    /// wraps at the right margin.
    pub fn new(grid: &ProcessedGrid, title: &str, subtitle: &str) -> Self {
        let g = grid.grid_size().max(1) as f64;
        let avail_w = PAGE_WIDTH - 2.0 * MARGIN;
        let avail_h = PAGE_HEIGHT - 2.0 * MARGIN;

        let cell_size = (avail_w / g).min((avail_h - HEADER_HEIGHT) / g);
        let start_x = MARGIN + (avail_w - cell_size * g) / 2.0;
        let start_y = MARGIN + 15.0;
        let number_font_size = round_mm(MAX_NUMBER_FONT_PT.min(cell_size * 0.8) * PT_TO_MM);

        let cells = grid
            .cells()
            .iter()
            .map(|cell| {
                let x = start_x + cell.grid_x as f64 * cell_size;
                let y = start_y + cell.grid_y as f64 * cell_size;
                SheetCell {
                    x: round_mm(x),
                    y: round_mm(y),
                    size: round_mm(cell_size),
                    cx: round_mm(x + cell_size / 2.0),
                    cy: round_mm(y + cell_size / 2.0),
                    number: cell.number(),
                }
            })
            .collect();

        let legend_y = start_y + cell_size * g + MARGIN;
        let legend = layout_legend(grid, legend_y);

        Self {
            page_width: PAGE_WIDTH,
            page_height: PAGE_HEIGHT,
            title: SheetText {
                x: PAGE_WIDTH / 2.0,
                y: MARGIN,
                font_size: round_mm(TITLE_FONT_PT * PT_TO_MM),
                text: title.to_string(),
            },
            subtitle: SheetText {
                x: PAGE_WIDTH / 2.0,
                y: MARGIN + 5.0,
                font_size: round_mm(SUBTITLE_FONT_PT * PT_TO_MM),
                text: subtitle.to_string(),
            },
            cell_size: round_mm(cell_size),
            line_width: CELL_LINE_WIDTH,
            number_font_size,
            cells,
            legend,
        }
    }
}

fn layout_legend(grid: &ProcessedGrid, legend_y: f64) -> SheetLegend {
    let font_size = round_mm(LEGEND_FONT_PT * PT_TO_MM);
    let char_width = AVG_CHAR_WIDTH_EM * LEGEND_FONT_PT * PT_TO_MM;
    let right_edge = PAGE_WIDTH - MARGIN;

    let mut items = Vec::with_capacity(grid.palette().len());
    let mut x = MARGIN;
    let mut y = legend_y + LEGEND_LINE_HEIGHT;

    for (i, entry) in grid.palette().iter().enumerate() {
        let text = format!("{}:{}", i + 1, entry.name);
        // Two trailing spaces separate entries on a line
        let width = (text.chars().count() + 2) as f64 * char_width;
        if x > MARGIN && x + width > right_edge {
            x = MARGIN;
            y += LEGEND_LINE_HEIGHT;
        }
        items.push(SheetText {
            x: round_mm(x),
            y: round_mm(y),
            font_size,
            text,
        });
        x += width;
    }

    SheetLegend {
        heading: SheetText {
            x: MARGIN,
            y: round_mm(legend_y),
            font_size,
            text: "Color Legend:".to_string(),
        },
        items,
    }
}

fn round_mm(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Renders [`SheetLayout`]s through a Tera SVG template.
#[derive(Debug, Clone)]
pub struct SheetRenderer {
    template_name: String,
    template: String,
    title: String,
    subtitle: String,
}

impl SheetRenderer {
    pub fn new(
        template_name: impl Into<String>,
        template: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Self {
        Self {
            template_name: template_name.into(),
            template: template.into(),
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }

    /// Load the configured template (external file first, then embedded)
    pub fn from_config(config: &SheetConfig, loader: &AssetLoader) -> Result<Self, RenderError> {
        let template = loader.read_template_string(&config.template)?;
        tracing::debug!(template = %config.template, "Loaded sheet template");
        Ok(Self::new(
            config.template.clone(),
            template,
            config.title.clone(),
            config.subtitle.clone(),
        ))
    }

    pub fn layout(&self, grid: &ProcessedGrid) -> SheetLayout {
        SheetLayout::new(grid, &self.title, &self.subtitle)
    }

    /// Render the sheet as an SVG document
    pub fn render(&self, grid: &ProcessedGrid) -> Result<String, RenderError> {
        let layout = self.layout(grid);

        let mut tera = Tera::default();
        tera.add_raw_template(&self.template_name, &self.template)?;
        let context = Context::from_serialize(&layout)?;
        let svg = tera.render(&self.template_name, &context)?;

        tracing::debug!(
            grid_size = grid.grid_size(),
            bytes = svg.len(),
            "Rendered sheet"
        );
        Ok(svg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paint_grid::{process_image, ImageRef};

    fn uniform_grid(grid_size: u32, max_colors: usize) -> ProcessedGrid {
        let side = grid_size * 2;
        let pixels = [229u8, 57, 53, 255].repeat((side * side) as usize);
        let image = ImageRef::new(&pixels, side, side).unwrap();
        process_image(&image, grid_size, max_colors).unwrap()
    }

    fn renderer() -> SheetRenderer {
        let loader = AssetLoader::new(None, None, None);
        SheetRenderer::from_config(&SheetConfig::default(), &loader).unwrap()
    }

    #[test]
    fn test_grid_fills_width_and_is_centered() {
        let layout = SheetLayout::new(&uniform_grid(19, 12), "t", "s");
        // 190 mm of usable width over 19 cells; height allows 247 / 19 = 13
        assert_eq!(layout.cell_size, 10.0);
        assert_eq!(layout.cells[0].x, 10.0);
        assert_eq!(layout.cells[0].y, 25.0);
        assert_eq!(layout.cells.len(), 19 * 19);
        assert_eq!(layout.cells.last().unwrap().x, 190.0);
    }

    #[test]
    fn test_number_font_is_capped() {
        let big = SheetLayout::new(&uniform_grid(2, 12), "t", "s");
        assert_eq!(big.number_font_size, round_mm(14.0 * PT_TO_MM));

        let small = SheetLayout::new(&uniform_grid(50, 12), "t", "s");
        assert_eq!(small.number_font_size, round_mm(3.8 * 0.8 * PT_TO_MM));
    }

    #[test]
    fn test_legend_wraps_inside_margins() {
        let layout = SheetLayout::new(&uniform_grid(10, 24), "t", "s");
        let items = &layout.legend.items;
        assert_eq!(items.len(), 24);
        assert_eq!(items[0].text, "1:Red");
        assert!(items.iter().all(|item| item.x >= MARGIN && item.x < PAGE_WIDTH - MARGIN));

        let lines: std::collections::BTreeSet<_> =
            items.iter().map(|item| item.y.to_bits()).collect();
        assert!(lines.len() > 1, "24 paints do not fit on one line");
        assert!(layout.legend.heading.y < items[0].y);
    }

    #[test]
    fn test_legend_lines_are_evenly_spaced() {
        let layout = SheetLayout::new(&uniform_grid(10, 24), "t", "s");
        let heading_y = layout.legend.heading.y;
        let items = &layout.legend.items;

        assert_eq!(items[0].y, round_mm(heading_y + LEGEND_LINE_HEIGHT));
        let second_line = items.iter().find(|item| item.y > items[0].y).unwrap();
        assert_eq!(second_line.y, round_mm(items[0].y + LEGEND_LINE_HEIGHT));
    }

    #[test]
    fn test_render_embedded_template() {
        let svg = renderer().render(&uniform_grid(3, 4)).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Paint by Numbers"));
        assert!(svg.contains("Color Legend:"));
        assert!(svg.contains("4:"));
        assert_eq!(svg.matches("class=\"cell\"").count(), 9);
        assert_eq!(svg.matches("class=\"number\"").count(), 9);
    }

    #[test]
    fn test_title_is_escaped() {
        let renderer = SheetRenderer::new(
            "sheet.svg",
            AssetLoader::new(None, None, None)
                .read_template_string("sheet.svg")
                .unwrap(),
            "Cats & <Dogs>",
            "",
        );
        let svg = renderer.render(&uniform_grid(2, 2)).unwrap();
        assert!(svg.contains("Cats &amp; &lt;Dogs&gt;"));
        assert!(!svg.contains("<Dogs>"));
    }
}
