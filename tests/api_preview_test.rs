//! Integration tests for POST /api/preview

mod common;

use axum::http::StatusCode;
use bead_quantize::{PixelSource, Rgb};
use beadgrid::decode::decode_png;
use beadgrid::rendering::GRID_LINE_COLOR;
use common::fixtures::{beads, png_from_fn, solid_png};
use common::{assert_json_error, assert_png, TestApp};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_preview_default_size() {
    let app = TestApp::new();
    let response = app
        .post_png("/api/preview", solid_png(32, 32, beads::GOLDEN))
        .await;
    assert_png(&response);

    // 32 cells of 12 px plus 33 grid lines
    let image = decode_png(response.bytes()).unwrap();
    assert_eq!((image.width(), image.height()), (417, 417));
    assert_eq!(image.pixel(0, 5).rgb(), GRID_LINE_COLOR);
    assert_eq!(image.pixel(5, 5).rgb(), Rgb::new(255, 215, 0));
}

#[tokio::test]
async fn test_preview_without_grid_lines() {
    let app = TestApp::new();
    let png = png_from_fn(16, 16, |x, _| if x < 8 { beads::BLACK } else { beads::WHITE });
    let response = app
        .post_png("/api/preview?grid_size=8&cell_size=2&grid_lines=false", png)
        .await;
    assert_png(&response);

    let image = decode_png(response.bytes()).unwrap();
    assert_eq!((image.width(), image.height()), (16, 16));
    assert_eq!(image.pixel(0, 0).rgb(), Rgb::BLACK);
    assert_eq!(image.pixel(7, 15).rgb(), Rgb::BLACK);
    assert_eq!(image.pixel(8, 0).rgb(), Rgb::WHITE);
}

#[tokio::test]
async fn test_preview_cell_size_out_of_range() {
    let app = TestApp::new();
    for cell in ["0", "65"] {
        let response = app
            .post_png(
                &format!("/api/preview?cell_size={cell}"),
                solid_png(8, 8, beads::WHITE),
            )
            .await;
        assert_json_error(&response, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_preview_invalid_grid_size() {
    let app = TestApp::new();
    let response = app
        .post_png("/api/preview?grid_size=300", solid_png(8, 8, beads::WHITE))
        .await;
    assert_json_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_preview_undecodable_image() {
    let app = TestApp::new();
    let response = app.post_png("/api/preview", vec![0u8; 32]).await;
    assert_json_error(&response, StatusCode::BAD_REQUEST);
}
