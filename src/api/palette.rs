use axum::{extract::State, response::Json};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::services::BeadService;

/// One bead color of the active catalogue
#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteColor {
    /// Bead code, e.g. "M01"
    pub id: String,
    /// Human-readable color name
    pub name: String,
    /// Color as `#RRGGBB`
    pub hex: String,
}

/// List the active bead catalogue
///
/// Colors are returned in palette order. The first entry fills transparent
/// areas and wins distance ties.
#[utoipa::path(
    get,
    path = "/api/palette",
    responses(
        (status = 200, description = "Bead colors in palette order", body = Vec<PaletteColor>),
    ),
    tag = "Palette"
)]
pub async fn handle_palette(State(beads): State<Arc<BeadService>>) -> Json<Vec<PaletteColor>> {
    let colors = beads
        .palette()
        .iter()
        .map(|entry| PaletteColor {
            id: entry.id.clone(),
            name: entry.name.clone(),
            hex: entry.rgb.to_hex(),
        })
        .collect();
    Json(colors)
}
