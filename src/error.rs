use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bead_quantize::QuantizeError;
use serde_json::json;
use thiserror::Error;

use crate::services::{PatternError, StylizeError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required header: {0}")]
    MissingHeader(&'static str),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Empty request body")]
    EmptyBody,

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("Stylizer error: {0}")]
    Stylize(#[from] StylizeError),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid cell size: {0}")]
    InvalidCellSize(u32),

    #[error("Too many colors for an indexed PNG: {colors} (max {max})")]
    TooManyColors { colors: usize, max: usize },

    #[error("Preview too large: {side}x{side} pixels (max {max})")]
    PreviewTooLarge { side: u32, max: u32 },

    #[error("PNG encode error: {0}")]
    PngEncode(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingHeader(_) | ApiError::InvalidParameter(_) | ApiError::EmptyBody => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Pattern(e) => match e {
                PatternError::InvalidGridSize { .. } => StatusCode::BAD_REQUEST,
                PatternError::ImageTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
                PatternError::Quantize(QuantizeError::ImageDecode(_)) => StatusCode::BAD_REQUEST,
                PatternError::Quantize(QuantizeError::InvalidDimension { .. }) => {
                    StatusCode::BAD_REQUEST
                }
                PatternError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Render(e) => match e {
                RenderError::InvalidCellSize(_) | RenderError::PreviewTooLarge { .. } => {
                    StatusCode::BAD_REQUEST
                }
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Stylize(StylizeError::MissingApiKey) => StatusCode::UNAUTHORIZED,
            ApiError::Stylize(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
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

    #[test]
    fn test_api_error_missing_header() {
        let error = ApiError::MissingHeader("Authorization");
        assert_eq!(error.to_string(), "Missing required header: Authorization");
    }

    #[test]
    fn test_api_error_invalid_parameter() {
        let error = ApiError::InvalidParameter("cell_size must be at least 1".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid parameter: cell_size must be at least 1"
        );
    }

    #[test]
    fn test_pattern_error_is_transparent() {
        let error = ApiError::Pattern(PatternError::InvalidGridSize {
            value: 4,
            min: 8,
            max: 256,
        });
        assert_eq!(error.to_string(), "Grid size 4 out of range (8..=256)");
    }

    #[test]
    fn test_render_error_too_many_colors() {
        let error = RenderError::TooManyColors {
            colors: 300,
            max: 256,
        };
        assert_eq!(
            error.to_string(),
            "Too many colors for an indexed PNG: 300 (max 256)"
        );
    }

    #[test]
    fn test_api_error_from_render_error() {
        let api_error: ApiError = RenderError::InvalidCellSize(0).into();
        assert!(matches!(api_error, ApiError::Render(_)));
    }

    #[test]
    fn test_api_error_into_response_status_codes() {
        let response = ApiError::MissingHeader("Authorization").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::EmptyBody.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::Pattern(PatternError::InvalidGridSize {
            value: 1,
            min: 8,
            max: 256,
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::Pattern(PatternError::Quantize(QuantizeError::image_decode(
            "bad header",
        )))
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::Pattern(PatternError::ImageTooLarge {
            width: 9000,
            height: 10,
            max: 8192,
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let response = ApiError::Render(RenderError::PngEncode("oops".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = ApiError::Stylize(StylizeError::MissingImage).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let response = ApiError::Stylize(StylizeError::MissingApiKey).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = ApiError::Internal("error".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
