use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query, State,
    },
    response::Json,
};
use paint_grid::LegendEntry;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::analyze::AnalysisResponse;
use super::upload::{grid_request, upload_body, GridQuery};
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::{GridResult, PaintPipeline};

/// One cell of the quantized grid
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CellResponse {
    /// Column, starting at 0 on the left
    pub x: u32,
    /// Row, starting at 0 at the top
    pub y: u32,
    /// Paint number printed in the cell (1-based)
    pub number: usize,
    /// Index into the palette (`number - 1`)
    pub palette_index: usize,
    /// Paint color as `#rrggbb`
    pub color: String,
}

/// A paint used by the grid
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LegendResponse {
    pub number: usize,
    pub name: String,
    pub hex: String,
    /// Number of cells painted with this color
    pub cell_count: usize,
}

impl From<LegendEntry> for LegendResponse {
    fn from(entry: LegendEntry) -> Self {
        Self {
            number: entry.number,
            name: entry.name,
            hex: entry.hex,
            cell_count: entry.cell_count,
        }
    }
}

/// Quantized paint-by-numbers grid
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GridResponse {
    /// Cells per side
    pub grid_size: u32,
    /// Palette size the grid was quantized against
    pub max_colors: usize,
    /// Present when the grid size was chosen from the analysis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisResponse>,
    /// Row-major cells, `grid_size * grid_size` entries
    pub cells: Vec<CellResponse>,
    /// Paints used by the grid, in number order
    pub legend: Vec<LegendResponse>,
}

impl From<GridResult> for GridResponse {
    fn from(result: GridResult) -> Self {
        let legend = result
            .grid
            .legend()
            .into_iter()
            .map(LegendResponse::from)
            .collect();
        let grid_size = result.grid.grid_size();
        let cells = result
            .grid
            .into_cells()
            .into_iter()
            .map(|cell| CellResponse {
                x: cell.grid_x,
                y: cell.grid_y,
                number: cell.number(),
                palette_index: cell.palette_index,
                color: cell.color_hex,
            })
            .collect();

        Self {
            grid_size,
            max_colors: result.max_colors,
            analysis: result.analysis.map(AnalysisResponse::from),
            cells,
            legend,
        }
    }
}

/// Quantize an image onto a paint-by-numbers grid
///
/// Each cell takes the most frequent exact color of its pixel block, matched
/// to the nearest of the first `max_colors` paints. Without `grid_size` the
/// suggested size from complexity analysis is used.
#[utoipa::path(
    post,
    path = "/api/grid",
    request_body(content = Vec<u8>, description = "Encoded image", content_type = "application/octet-stream"),
    params(GridQuery),
    responses(
        (status = 200, description = "Quantized grid", body = GridResponse),
        (status = 400, description = "Invalid grid size or color count"),
        (status = 413, description = "Upload too large"),
        (status = 422, description = "Image could not be decoded"),
        (status = 504, description = "Quantization timed out"),
    ),
    tag = "Grid"
)]
pub async fn handle_grid(
    State(config): State<Arc<AppConfig>>,
    State(pipeline): State<Arc<PaintPipeline>>,
    query: Result<Query<GridQuery>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<GridResponse>, ApiError> {
    let request = grid_request(query)?;
    let bytes = upload_body(body, config.max_upload_bytes)?;

    let result = pipeline.grid(bytes, request).await?;

    tracing::info!(
        grid_size = result.grid.grid_size(),
        max_colors = result.max_colors,
        suggested = result.analysis.is_some(),
        "Grid generated"
    );

    Ok(Json(result.into()))
}
