use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::pattern::require_body;
use crate::error::ApiError;
use crate::services::Stylizer;

/// Cartoon-stylize a photo
///
/// Forwards the PNG to the configured image-edit service using the caller's
/// API key and returns the stylized PNG. The result can be posted to
/// `/api/pattern` or `/api/preview`.
#[utoipa::path(
    post,
    path = "/api/stylize",
    request_body(content = String, description = "PNG image", content_type = "image/png"),
    responses(
        (status = 200, description = "Stylized PNG", content_type = "image/png"),
        (status = 400, description = "Missing Authorization header or empty body"),
        (status = 502, description = "Stylizer service failed"),
    ),
    params(
        ("Authorization" = String, Header, description = "Bearer API key for the image-edit service"),
    ),
    tag = "Stylize"
)]
pub async fn handle_stylize(
    State(stylizer): State<Arc<dyn Stylizer>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let api_key = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(ApiError::MissingHeader("Authorization"))?;
    let png = require_body(body)?;

    let stylized = stylizer.stylize(png, api_key).await?;

    Ok(([(header::CONTENT_TYPE, "image/png")], stylized).into_response())
}
