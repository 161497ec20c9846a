use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::services::{BeadService, PatternReport};

/// Query parameters for pattern generation
#[derive(Debug, Deserialize)]
pub struct PatternQuery {
    #[serde(default)]
    pub grid_size: Option<u32>,
}

/// Turn a query rejection into the JSON error shape used everywhere else
pub(crate) fn query_or_400<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    query
        .map(|Query(q)| q)
        .map_err(|e| ApiError::InvalidParameter(e.body_text()))
}

/// Reject empty uploads before they reach the decoder
pub(crate) fn require_body(body: Bytes) -> Result<Vec<u8>, ApiError> {
    if body.is_empty() {
        return Err(ApiError::EmptyBody);
    }
    Ok(body.to_vec())
}

/// Generate a bead pattern from a PNG
///
/// The request body is the raw PNG. Returns the grid as bead codes plus the
/// bill of materials, most frequent color first.
#[utoipa::path(
    post,
    path = "/api/pattern",
    request_body(content = String, description = "PNG image", content_type = "image/png"),
    responses(
        (status = 200, description = "Bead pattern", body = PatternReport),
        (status = 400, description = "Invalid grid size or undecodable image"),
        (status = 413, description = "Image too large"),
    ),
    params(
        ("grid_size" = Option<u32>, Query, description = "Cells per side (default from config, usually 32)"),
    ),
    tag = "Pattern"
)]
pub async fn handle_pattern(
    State(beads): State<Arc<BeadService>>,
    query: Result<Query<PatternQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Json<PatternReport>, ApiError> {
    let query = query_or_400(query)?;
    let png = require_body(body)?;

    let pattern = beads.generate_async(png, query.grid_size).await?;
    Ok(Json(pattern.report()))
}
