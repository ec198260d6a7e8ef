use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::PipelineError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Upload too large (max {max} bytes)")]
    PayloadTooLarge { max: usize },

    #[error("Processing timed out after {0} ms")]
    Timeout(u64),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PipelineError> for ApiError {
    fn from(e: PipelineError) -> Self {
        match e {
            PipelineError::Decode(e) => ApiError::InvalidImage(e.to_string()),
            PipelineError::Core(paint_grid::Error::InvalidImage(e)) => {
                ApiError::InvalidImage(e.to_string())
            }
            PipelineError::Core(paint_grid::Error::InvalidParameters(e)) => {
                ApiError::InvalidParameters(e.to_string())
            }
            e @ PipelineError::GridTooLarge { .. } => ApiError::InvalidParameters(e.to_string()),
            PipelineError::Timeout(limit) => ApiError::Timeout(limit.as_millis() as u64),
            PipelineError::Task(msg) => ApiError::Internal(msg),
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("Invalid color: {0}")]
    InvalidColor(#[from] paint_grid::ParseColorError),

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidImage(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidParameters(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Render(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::DecodeError;
    use std::time::Duration;

    #[test]
    fn test_api_error_messages() {
        assert_eq!(
            ApiError::PayloadTooLarge { max: 1024 }.to_string(),
            "Upload too large (max 1024 bytes)"
        );
        assert_eq!(
            ApiError::Timeout(10_000).to_string(),
            "Processing timed out after 10000 ms"
        );
        assert_eq!(
            ApiError::InvalidParameters("grid size must be at least 1".to_string()).to_string(),
            "Invalid parameters: grid size must be at least 1"
        );
    }

    #[test]
    fn test_render_error_messages() {
        assert_eq!(
            RenderError::PixmapAllocation.to_string(),
            "Failed to allocate pixmap"
        );
        assert_eq!(
            RenderError::PngEncode("Encoding failed".to_string()).to_string(),
            "PNG encode error: Encoding failed"
        );
        assert_eq!(
            RenderError::SvgParse("Invalid XML".to_string()).to_string(),
            "SVG parse error: Invalid XML"
        );
    }

    #[test]
    fn test_pipeline_error_mapping() {
        let api: ApiError = PipelineError::Decode(DecodeError::Empty).into();
        assert!(matches!(api, ApiError::InvalidImage(_)));

        let api: ApiError =
            PipelineError::Core(paint_grid::ParameterError::GridSizeZero.into()).into();
        assert!(matches!(api, ApiError::InvalidParameters(_)));

        let api: ApiError = PipelineError::Core(
            paint_grid::ImageError::ZeroArea {
                width: 0,
                height: 0,
            }
            .into(),
        )
        .into();
        assert!(matches!(api, ApiError::InvalidImage(_)));

        let api: ApiError = PipelineError::GridTooLarge {
            requested: 500,
            max: 100,
        }
        .into();
        assert!(matches!(api, ApiError::InvalidParameters(_)));

        let api: ApiError = PipelineError::Timeout(Duration::from_millis(250)).into();
        assert!(matches!(api, ApiError::Timeout(250)));
    }

    #[test]
    fn test_api_error_into_response_status_codes() {
        let cases = [
            (
                ApiError::InvalidImage("bad".to_string()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ApiError::InvalidParameters("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::PayloadTooLarge { max: 1 },
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
            (ApiError::Timeout(1), StatusCode::GATEWAY_TIMEOUT),
            (
                ApiError::Render(RenderError::PixmapAllocation),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApiError::Internal("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
