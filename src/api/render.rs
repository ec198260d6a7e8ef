use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query, State,
    },
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::upload::{grid_request, upload_body, GridQuery};
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::rendering::{PreviewRenderer, SheetRenderer};
use crate::services::PaintPipeline;

/// Render a colored preview of the grid
///
/// Returns a square PNG with each cell filled in its paint color and outlined.
#[utoipa::path(
    post,
    path = "/api/preview",
    request_body(content = Vec<u8>, description = "Encoded image", content_type = "application/octet-stream"),
    params(GridQuery),
    responses(
        (status = 200, description = "Preview image", content_type = "image/png"),
        (status = 400, description = "Invalid grid size or color count"),
        (status = 413, description = "Upload too large"),
        (status = 422, description = "Image could not be decoded"),
        (status = 504, description = "Quantization timed out"),
    ),
    tag = "Rendering"
)]
pub async fn handle_preview(
    State(config): State<Arc<AppConfig>>,
    State(pipeline): State<Arc<PaintPipeline>>,
    State(renderer): State<Arc<PreviewRenderer>>,
    query: Result<Query<GridQuery>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    let request = grid_request(query)?;
    let bytes = upload_body(body, config.max_upload_bytes)?;

    let result = pipeline.grid(bytes, request).await?;
    let grid_size = result.grid.grid_size();

    // Rasterizing and oxipng are CPU bound
    let png = tokio::task::spawn_blocking(move || renderer.render_png(&result.grid))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    tracing::info!(grid_size, bytes = png.len(), "Preview rendered");

    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}

/// Render the printable sheet
///
/// Returns an A4 SVG with the numbered outline grid and the color legend.
#[utoipa::path(
    post,
    path = "/api/sheet",
    request_body(content = Vec<u8>, description = "Encoded image", content_type = "application/octet-stream"),
    params(GridQuery),
    responses(
        (status = 200, description = "Printable sheet", content_type = "image/svg+xml"),
        (status = 400, description = "Invalid grid size or color count"),
        (status = 413, description = "Upload too large"),
        (status = 422, description = "Image could not be decoded"),
        (status = 504, description = "Quantization timed out"),
    ),
    tag = "Rendering"
)]
pub async fn handle_sheet(
    State(config): State<Arc<AppConfig>>,
    State(pipeline): State<Arc<PaintPipeline>>,
    State(renderer): State<Arc<SheetRenderer>>,
    query: Result<Query<GridQuery>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    let request = grid_request(query)?;
    let bytes = upload_body(body, config.max_upload_bytes)?;

    let result = pipeline.grid(bytes, request).await?;
    let svg = renderer.render(&result.grid)?;

    tracing::info!(
        grid_size = result.grid.grid_size(),
        bytes = svg.len(),
        "Sheet rendered"
    );

    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response())
}
