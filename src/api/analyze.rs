use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    response::Json,
};
use paint_grid::ImageAnalysis;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::upload::upload_body;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::PaintPipeline;

/// Complexity analysis of an uploaded image
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AnalysisResponse {
    /// Overall complexity in `[0, 1]`
    pub complexity: f64,
    /// Edge density component in `[0, 1]`
    pub edge_complexity: f64,
    /// Distinct color component in `[0, 1]`
    pub color_variance: f64,
    /// Smallest recommended grid size
    pub min_grid_size: u32,
    /// Largest recommended grid size
    pub max_grid_size: u32,
    /// Grid size used when a request does not specify one
    pub suggested_grid_size: u32,
}

impl From<ImageAnalysis> for AnalysisResponse {
    fn from(analysis: ImageAnalysis) -> Self {
        Self {
            complexity: analysis.complexity(),
            edge_complexity: analysis.edge_complexity(),
            color_variance: analysis.color_variance(),
            min_grid_size: analysis.min_grid_size(),
            max_grid_size: analysis.max_grid_size(),
            suggested_grid_size: analysis.suggested_grid_size(),
        }
    }
}

/// Analyze image complexity
///
/// Accepts an encoded image (PNG, JPEG, GIF, WebP or BMP) as the raw request
/// body and recommends a grid size range for it.
#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body(content = Vec<u8>, description = "Encoded image", content_type = "application/octet-stream"),
    responses(
        (status = 200, description = "Analysis result", body = AnalysisResponse),
        (status = 413, description = "Upload too large"),
        (status = 422, description = "Image could not be decoded"),
        (status = 504, description = "Analysis timed out"),
    ),
    tag = "Analysis"
)]
pub async fn handle_analyze(
    State(config): State<Arc<AppConfig>>,
    State(pipeline): State<Arc<PaintPipeline>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let bytes = upload_body(body, config.max_upload_bytes)?;
    let upload_bytes = bytes.len();

    let analysis = pipeline.analyze(bytes).await?;

    tracing::info!(
        upload_bytes,
        complexity = analysis.complexity(),
        min_grid_size = analysis.min_grid_size(),
        max_grid_size = analysis.max_grid_size(),
        "Image analyzed"
    );

    Ok(Json(analysis.into()))
}
