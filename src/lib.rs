//! Beadgrid - fused-bead patterns from pictures
//!
//! HTTP server and CLI around the `bead-quantize` core.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod decode;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;
