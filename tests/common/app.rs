//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use beadgrid::assets::AssetLoader;
use beadgrid::models::AppConfig;
use beadgrid::server::{build_router, create_app_state, create_app_state_with_config, AppState};

/// Test application wrapping the production router
pub struct TestApp {
    router: axum::Router,
}

impl TestApp {
    /// Create a new test application using the embedded config
    pub fn new() -> Self {
        let state =
            create_app_state(&AssetLoader::new(None)).expect("Failed to create app state");
        Self::from_state(state)
    }

    /// Create a test application from an explicit config
    pub fn with_config(config: AppConfig) -> Self {
        let state = create_app_state_with_config(&config).expect("Failed to create app state");
        Self::from_state(state)
    }

    /// Create a test application from prepared state
    pub fn from_state(state: AppState) -> Self {
        Self {
            router: build_router(state),
        }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// POST a PNG body
    pub async fn post_png(&self, path: &str, png: Vec<u8>) -> TestResponse {
        self.post_png_with_headers(path, &[], png).await
    }

    /// POST a PNG body with extra headers
    pub async fn post_png_with_headers(
        &self,
        path: &str,
        headers: &[(&str, &str)],
        png: Vec<u8>,
    ) -> TestResponse {
        let mut builder = Request::post(path).header("Content-Type", "image/png");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        self.request(builder.body(Body::from(png)).unwrap()).await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Get raw body bytes
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Check if response is a PNG image
    pub fn is_png(&self) -> bool {
        self.body.len() >= 8 && &self.body[0..8] == b"\x89PNG\r\n\x1a\n"
    }
}
