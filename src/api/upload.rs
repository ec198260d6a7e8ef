use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query,
    },
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::ApiError;
use crate::services::GridRequest;

/// Query parameters shared by the grid, preview and sheet endpoints
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GridQuery {
    /// Cells per side (default: suggested size from complexity analysis)
    #[serde(default)]
    pub grid_size: Option<u32>,
    /// Number of palette colors to use (default from config)
    #[serde(default)]
    pub max_colors: Option<usize>,
}

impl From<GridQuery> for GridRequest {
    fn from(query: GridQuery) -> Self {
        GridRequest {
            grid_size: query.grid_size,
            max_colors: query.max_colors,
        }
    }
}

/// Accept the raw upload body, mapping the body limit to 413.
pub fn upload_body(body: Result<Bytes, BytesRejection>, max: usize) -> Result<Bytes, ApiError> {
    match body {
        Ok(bytes) => Ok(bytes),
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            Err(ApiError::PayloadTooLarge { max })
        }
        Err(rejection) => Err(ApiError::InvalidParameters(rejection.body_text())),
    }
}

/// Parse grid query parameters, reporting bad values as JSON errors.
pub fn grid_request(
    query: Result<Query<GridQuery>, QueryRejection>,
) -> Result<GridRequest, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::InvalidParameters(e.body_text()))?;
    Ok(query.into())
}
