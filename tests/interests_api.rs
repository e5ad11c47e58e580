//! Route-level tests for `GET /api/interests`.

mod common;

use std::fs;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use common::test_router;

async fn get(app: Router, uri: &str) -> (StatusCode, String, Option<String>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(body.to_vec()).unwrap(), content_type)
}

#[tokio::test]
async fn blank_lines_are_dropped_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("interests.log");
    fs::write(&path, "a\n\nb\n  \nc").unwrap();

    let (status, body, content_type) = get(test_router(path), "/api/interests").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"interests":["a","b","c"]}"#);
    assert_eq!(content_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn empty_file_has_no_interests() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("interests.log");
    fs::write(&path, "").unwrap();

    let (status, body, _) = get(test_router(path), "/api/interests").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"interests":[]}"#);
}

#[tokio::test]
async fn missing_file_is_a_fixed_500() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.log");

    let (status, body, content_type) = get(test_router(path), "/api/interests").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"error":"Failed to read interests log."}"#);
    assert_eq!(content_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn directory_in_place_of_file_is_a_fixed_500() {
    let dir = tempfile::tempdir().unwrap();

    let (status, body, _) = get(test_router(dir.path().to_path_buf()), "/api/interests").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"error":"Failed to read interests log."}"#);
}

#[tokio::test]
async fn reads_are_idempotent_and_reflect_current_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("interests.log");
    fs::write(&path, "rust\nwasm\n").unwrap();
    let app = test_router(path.clone());

    let (_, first, _) = get(app.clone(), "/api/interests").await;
    let (_, second, _) = get(app.clone(), "/api/interests").await;
    assert_eq!(first, second);
    assert_eq!(first, r#"{"interests":["rust","wasm"]}"#);

    fs::write(&path, "rust\nwasm\nzig\n").unwrap();
    let (_, third, _) = get(app, "/api/interests").await;
    assert_eq!(third, r#"{"interests":["rust","wasm","zig"]}"#);
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let dir = tempfile::tempdir().unwrap();

    let (status, body, _) = get(test_router(dir.path().join("x.log")), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn unknown_route_is_404() {
    let dir = tempfile::tempdir().unwrap();

    let (status, body, _) = get(test_router(dir.path().join("x.log")), "/api/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "The requested resource was not found");
}
