//! On-screen preview raster: colored cells with outlines and numbers, as PNG.
//!
//! The grid is laid out in pixels, placed into an SVG template with Tera and
//! rasterized through [`SvgRenderer`].

use paint_grid::{ProcessedGrid, Rgb};
use serde::Serialize;
use tera::{Context, Tera};
use tiny_skia::Pixmap;

use super::svg_to_png::SvgRenderer;
use crate::assets::AssetLoader;
use crate::error::RenderError;
use crate::models::PreviewConfig;

/// Number height as a fraction of the cell side
const NUMBER_SCALE: f32 = 0.4;
/// Padding around a number's backdrop as a fraction of the number height
const LABEL_PADDING: f32 = 0.3;
/// Digit advance of the bold preview font, in em
const DIGIT_WIDTH_EM: f32 = 0.7;
const NUMBER_COLOR: &str = "#4c1d95";
const FONT_FAMILY: &str = "DejaVu Sans, sans-serif";

/// Backdrop behind a cell number
#[derive(Debug, Clone, Serialize)]
pub struct PreviewLabel {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreviewCell {
    pub x: u32,
    pub y: u32,
    pub size: u32,
    pub color: String,
    pub cx: f32,
    pub cy: f32,
    pub number: usize,
    pub label: PreviewLabel,
}

/// Everything the preview template draws, in pixels.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewLayout {
    pub size: u32,
    pub border_color: String,
    pub border_width: f32,
    pub font_family: &'static str,
    pub number_font_size: f32,
    pub number_color: &'static str,
    pub cells: Vec<PreviewCell>,
}

impl PreviewLayout {
    /// Cells are `floor(size / grid_size)` pixels, anchored at the top-left corner.
    pub fn new(grid: &ProcessedGrid, size: u32, border: Rgb, border_width: f32) -> Self {
        let cell_size = (size / grid.grid_size().max(1)).max(1);
        let font_size = cell_size as f32 * NUMBER_SCALE;
        let padding = font_size * LABEL_PADDING;

        let cells = grid
            .cells()
            .iter()
            .map(|cell| {
                let x = cell.grid_x * cell_size;
                let y = cell.grid_y * cell_size;
                let cx = x as f32 + cell_size as f32 / 2.0;
                let cy = y as f32 + cell_size as f32 / 2.0;
                let number = cell.number();
                let text_width = number.to_string().len() as f32 * DIGIT_WIDTH_EM * font_size;

                PreviewCell {
                    x,
                    y,
                    size: cell_size,
                    color: grid.palette().color(cell.palette_index).to_hex(),
                    cx: round_px(cx),
                    cy: round_px(cy),
                    number,
                    label: PreviewLabel {
                        x: round_px(cx - (text_width + padding) / 2.0),
                        y: round_px(cy - (font_size + padding) / 2.0),
                        width: round_px(text_width + padding),
                        height: round_px(font_size + padding),
                    },
                }
            })
            .collect();

        Self {
            size,
            border_color: border.to_hex(),
            border_width,
            font_family: FONT_FAMILY,
            number_font_size: round_px(font_size),
            number_color: NUMBER_COLOR,
            cells,
        }
    }
}

fn round_px(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

/// Renders a [`ProcessedGrid`] to a square PNG through an SVG template.
pub struct PreviewRenderer {
    template_name: String,
    template: String,
    svg: SvgRenderer,
    size: u32,
    border: Rgb,
    border_width: f32,
}

impl PreviewRenderer {
    pub fn new(
        template_name: impl Into<String>,
        template: impl Into<String>,
        svg: SvgRenderer,
        size: u32,
        border: Rgb,
        border_width: f32,
    ) -> Self {
        Self {
            template_name: template_name.into(),
            template: template.into(),
            svg,
            size: size.max(1),
            border,
            border_width,
        }
    }

    /// Load the template and fonts named by the config
    pub fn from_config(config: &PreviewConfig, loader: &AssetLoader) -> Result<Self, RenderError> {
        let template = loader.read_template_string(&config.template)?;
        tracing::debug!(template = %config.template, "Loaded preview template");
        Ok(Self::new(
            config.template.clone(),
            template,
            SvgRenderer::with_fonts(loader.get_fonts()),
            config.size,
            config.border_rgb()?,
            config.border_width,
        ))
    }

    /// Side of the preview in pixels
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn layout(&self, grid: &ProcessedGrid) -> PreviewLayout {
        PreviewLayout::new(grid, self.size, self.border, self.border_width)
    }

    /// Render the grid as an SVG document sized in pixels
    pub fn render_svg(&self, grid: &ProcessedGrid) -> Result<String, RenderError> {
        let layout = self.layout(grid);

        let mut tera = Tera::default();
        tera.add_raw_template(&self.template_name, &self.template)?;
        let context = Context::from_serialize(&layout)?;
        Ok(tera.render(&self.template_name, &context)?)
    }

    /// Draw the grid onto a white pixmap
    pub fn render_pixmap(&self, grid: &ProcessedGrid) -> Result<Pixmap, RenderError> {
        let svg = self.render_svg(grid)?;
        self.svg.rasterize(svg.as_bytes(), self.size, self.size)
    }

    /// Render the grid and encode it as an optimized PNG
    pub fn render_png(&self, grid: &ProcessedGrid) -> Result<Vec<u8>, RenderError> {
        let svg = self.render_svg(grid)?;
        let png = self.svg.render_to_png(svg.as_bytes(), self.size, self.size)?;

        tracing::debug!(
            size = self.size,
            grid_size = grid.grid_size(),
            bytes = png.len(),
            "Rendered preview"
        );
        Ok(png)
    }
}
