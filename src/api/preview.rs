use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use super::pattern::{query_or_400, require_body};
use crate::error::ApiError;
use crate::models::PreviewConfig;
use crate::rendering::render_preview_png;
use crate::services::BeadService;

/// Query parameters for preview rendering
#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    #[serde(default)]
    pub grid_size: Option<u32>,
    #[serde(default)]
    pub cell_size: Option<u32>,
    #[serde(default)]
    pub grid_lines: Option<bool>,
}

/// Render a bead pattern preview
///
/// The request body is the raw PNG. Returns an indexed PNG with one square
/// per bead in the bead's catalogue color.
#[utoipa::path(
    post,
    path = "/api/preview",
    request_body(content = String, description = "PNG image", content_type = "image/png"),
    responses(
        (status = 200, description = "Preview PNG", content_type = "image/png"),
        (status = 400, description = "Invalid parameters or undecodable image"),
        (status = 413, description = "Image too large"),
    ),
    params(
        ("grid_size" = Option<u32>, Query, description = "Cells per side (default from config, usually 32)"),
        ("cell_size" = Option<u32>, Query, description = "Pixels per bead (default from config)"),
        ("grid_lines" = Option<bool>, Query, description = "Draw 1-px lines between beads (default: true)"),
    ),
    tag = "Pattern"
)]
pub async fn handle_preview(
    State(beads): State<Arc<BeadService>>,
    State(preview): State<PreviewConfig>,
    query: Result<Query<PreviewQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let query = query_or_400(query)?;
    let cell_size = query.cell_size.unwrap_or(preview.cell_size);
    if cell_size == 0 || cell_size > preview.max_cell_size {
        return Err(ApiError::InvalidParameter(format!(
            "cell_size {cell_size} out of range (1..={})",
            preview.max_cell_size
        )));
    }
    let grid_lines = query.grid_lines.unwrap_or(true);
    let png = require_body(body)?;

    let pattern = beads.generate_async(png, query.grid_size).await?;

    let rendered =
        tokio::task::spawn_blocking(move || render_preview_png(&pattern.grid, cell_size, grid_lines))
            .await
            .map_err(|e| ApiError::Internal(format!("Preview task failed: {e}")))??;

    Ok(([(header::CONTENT_TYPE, "image/png")], rendered).into_response())
}
