//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        DefaultBodyLimit, Query, State,
    },
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api::{self, AnalysisResponse, GridQuery, GridResponse, PaletteResponse};
use crate::assets::AssetLoader;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::rendering::{PreviewRenderer, SheetRenderer};
use crate::services::PaintPipeline;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub pipeline: Arc<PaintPipeline>,
    pub preview: Arc<PreviewRenderer>,
    pub sheet: Arc<SheetRenderer>,
}

/// Create application state from an asset loader.
pub fn create_app_state(asset_loader: Arc<AssetLoader>) -> anyhow::Result<AppState> {
    let config = AppConfig::load_from_assets(&asset_loader);
    create_app_state_with_config(&asset_loader, config)
}

/// Create application state with an explicit configuration.
pub fn create_app_state_with_config(
    asset_loader: &AssetLoader,
    config: AppConfig,
) -> anyhow::Result<AppState> {
    let pipeline = Arc::new(PaintPipeline::new(&config));
    let preview = Arc::new(
        PreviewRenderer::from_config(&config.preview, asset_loader)
            .map_err(|e| anyhow::anyhow!("Failed to set up preview renderer: {e}"))?,
    );
    let sheet = Arc::new(
        SheetRenderer::from_config(&config.sheet, asset_loader)
            .map_err(|e| anyhow::anyhow!("Failed to load sheet template: {e}"))?,
    );

    Ok(AppState {
        config: Arc::new(config),
        pipeline,
        preview,
        sheet,
    })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/api/palette", get(handle_palette))
        .route("/api/analyze", post(handle_analyze))
        .route("/api/grid", post(handle_grid))
        .route("/api/preview", post(handle_preview))
        .route("/api/sheet", post(handle_sheet))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_palette(State(state): State<AppState>) -> Json<PaletteResponse> {
    api::handle_palette(State(state.pipeline)).await
}

async fn handle_analyze(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    api::handle_analyze(State(state.config), State(state.pipeline), body).await
}

async fn handle_grid(
    State(state): State<AppState>,
    query: Result<Query<GridQuery>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<GridResponse>, ApiError> {
    api::handle_grid(State(state.config), State(state.pipeline), query, body).await
}

async fn handle_preview(
    State(state): State<AppState>,
    query: Result<Query<GridQuery>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    api::handle_preview(
        State(state.config),
        State(state.pipeline),
        State(state.preview),
        query,
        body,
    )
    .await
}

async fn handle_sheet(
    State(state): State<AppState>,
    query: Result<Query<GridQuery>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    api::handle_sheet(
        State(state.config),
        State(state.pipeline),
        State(state.sheet),
        query,
        body,
    )
    .await
}
