//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{DefaultBodyLimit, FromRef},
    http::{header::CACHE_CONTROL, HeaderValue},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::api;
use crate::assets::AssetLoader;
use crate::models::{AppConfig, PreviewConfig};
use crate::services::{BeadService, OpenAiStylizer, Stylizer};

/// Largest accepted upload.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub beads: Arc<BeadService>,
    pub stylizer: Arc<dyn Stylizer>,
    pub preview: PreviewConfig,
}

impl FromRef<AppState> for Arc<BeadService> {
    fn from_ref(state: &AppState) -> Self {
        state.beads.clone()
    }
}

impl FromRef<AppState> for Arc<dyn Stylizer> {
    fn from_ref(state: &AppState) -> Self {
        state.stylizer.clone()
    }
}

impl FromRef<AppState> for PreviewConfig {
    fn from_ref(state: &AppState) -> Self {
        state.preview
    }
}

/// Create application state from an asset loader.
pub fn create_app_state(asset_loader: &AssetLoader) -> anyhow::Result<AppState> {
    let config = AppConfig::load_from_assets(asset_loader);
    create_app_state_with_config(&config)
}

/// Create application state from an already loaded configuration.
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let palette = config
        .load_palette()
        .map_err(|e| anyhow::anyhow!("Failed to load bead catalogue: {e}"))?;
    let beads = Arc::new(BeadService::new(palette, config.grid));
    let stylizer: Arc<dyn Stylizer> = Arc::new(
        OpenAiStylizer::new(config.stylize.clone())
            .map_err(|e| anyhow::anyhow!("Failed to create stylizer client: {e}"))?,
    );

    tracing::info!(
        colors = beads.palette().len(),
        stylize_endpoint = %config.stylize.endpoint,
        "Application state ready"
    );

    Ok(AppState {
        beads,
        stylizer,
        preview: config.preview,
    })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
/// Every response carries `Cache-Control: no-store`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/palette", get(api::handle_palette))
        .route("/api/pattern", post(api::handle_pattern))
        .route("/api/preview", post(api::handle_preview))
        .route("/api/stylize", post(api::handle_stylize))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}
