use axum::{extract::State, response::Json};
use paint_grid::STANDARD_PALETTE_VERSION;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::services::PaintPipeline;

/// One paint of the palette
#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteColor {
    /// Printed paint number (1-based)
    pub number: usize,
    pub name: String,
    /// Color as `#rrggbb`
    pub hex: String,
}

/// Response from the /api/palette endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteResponse {
    /// Version of the palette data; bumped whenever paints are appended
    pub version: u32,
    pub colors: Vec<PaletteColor>,
}

/// List the paint palette
///
/// Paints are listed in number order. A grid quantized with `max_colors = n`
/// uses the first `n` entries.
#[utoipa::path(
    get,
    path = "/api/palette",
    responses(
        (status = 200, description = "Palette in paint-number order", body = PaletteResponse),
    ),
    tag = "Palette"
)]
pub async fn handle_palette(State(pipeline): State<Arc<PaintPipeline>>) -> Json<PaletteResponse> {
    let colors = pipeline
        .palette()
        .iter()
        .enumerate()
        .map(|(i, entry)| PaletteColor {
            number: i + 1,
            name: entry.name.clone(),
            hex: entry.hex(),
        })
        .collect();

    Json(PaletteResponse {
        version: STANDARD_PALETTE_VERSION,
        colors,
    })
}
