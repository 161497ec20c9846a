//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status,
        expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert response is a valid PNG image
pub fn assert_png(response: &TestResponse) {
    assert_ok(response);
    assert!(
        response.is_png(),
        "Expected PNG image, got {} bytes starting with {:?}",
        response.body.len(),
        &response.body[..8.min(response.body.len())]
    );

    let content_type = response
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());
    assert_eq!(
        content_type,
        Some("image/png"),
        "Expected Content-Type: image/png"
    );
}

/// Assert a JSON error body `{status, error}` with the given status code
pub fn assert_json_error(response: &TestResponse, expected: StatusCode) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected.as_u16() as u64),
        "Expected JSON status {}, got {:?}. Full response: {}",
        expected.as_u16(),
        json["status"],
        serde_json::to_string_pretty(&json).unwrap()
    );
    assert!(json["error"].is_string(), "Expected error message");
}

/// Assert a pattern response is internally consistent and return it
pub fn assert_valid_pattern(response: &TestResponse, grid_size: u64) -> serde_json::Value {
    assert_ok(response);
    let json: serde_json::Value = response.json();

    assert_eq!(json["grid_size"].as_u64(), Some(grid_size));
    let grid = json["grid"].as_array().expect("grid should be an array");
    assert_eq!(grid.len() as u64, grid_size);
    for row in grid {
        assert_eq!(row.as_array().expect("row should be an array").len() as u64, grid_size);
    }

    let usage = json["usage"].as_array().expect("usage should be an array");
    let counted: u64 = usage.iter().map(|u| u["count"].as_u64().unwrap()).sum();
    assert_eq!(counted, grid_size * grid_size);
    assert_eq!(json["total"].as_u64(), Some(grid_size * grid_size));

    json
}
