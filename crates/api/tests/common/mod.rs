#![allow(dead_code)]

use std::path::Path;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use image::{Rgba, RgbaImage};
use tower::ServiceExt;

use roomsheet_api::config::ServerConfig;
use roomsheet_api::router::build_app_router;
use roomsheet_api::state::AppState;

/// Build a test `ServerConfig` serving `public_dir`.
///
/// Uses `http://localhost:3000` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config(public_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        public_dir: public_dir.to_path_buf(),
        overlay_subdir: "overlays".to_string(),
        hotspot_config: None,
        sheet_catalog: None,
    }
}

/// Build the full application router over `public_dir`.
///
/// Goes through [`build_app_router`] so integration tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery)
/// that production uses.
pub fn build_test_app(public_dir: &Path) -> Router {
    let config = test_config(public_dir);
    let state = AppState::from_config(config.clone()).unwrap();
    build_app_router(state, &config)
}

/// Write a solid-colour PNG of the given size under `public_dir`.
pub fn write_png(public_dir: &Path, relative: &str, width: u32, height: u32, color: [u8; 4]) {
    let path = public_dir.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    RgbaImage::from_pixel(width, height, Rgba(color))
        .save(&path)
        .unwrap();
}

/// Public directory holding `room.png` (1000x800) and `tex.png` (32x32).
pub fn seeded_public_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_png(dir.path(), "room.png", 1000, 800, [120, 110, 100, 255]);
    write_png(dir.path(), "tex.png", 32, 32, [200, 40, 40, 255]);
    dir
}

/// A complete apply-sheet body for `hotspot`.
pub fn apply_body(hotspot: &str) -> serde_json::Value {
    serde_json::json!({
        "baseImage": "room.png",
        "hotspotName": hotspot,
        "selectedSheet": {"id": 1, "name": "Test Sheet", "path": "tex.png"}
    })
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
