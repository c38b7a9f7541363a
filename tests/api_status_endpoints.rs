#![cfg(feature = "api")]
//! Integration tests for the status endpoints.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use serde_json::Value;
use textfall::api::create_router;
use textfall::OcrRuntime;
use tower::ServiceExt;

async fn get_json(router: axum::Router, uri: &str) -> Value {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request");

    let response = router.oneshot(request).await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), 1_000_000)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Response JSON parse failed")
}

#[tokio::test]
async fn test_health_endpoint() {
    let router = create_router(OcrRuntime::unavailable(), None);
    let value = get_json(router, "/api/health").await;

    assert_eq!(value["status"], "OK");
    assert_eq!(value["message"], "OCR API is running");
}

#[tokio::test]
async fn test_supported_formats_endpoint() {
    let router = create_router(OcrRuntime::unavailable(), None);
    let value = get_json(router, "/api/supported-formats").await;

    let formats = value["formats"].as_array().expect("formats array");
    let names: Vec<&str> = formats.iter().filter_map(Value::as_str).collect();
    assert!(names.contains(&"pdf"));
    assert!(names.contains(&"docx"));
    assert!(names.contains(&"png"));
    assert!(names.contains(&"txt"));
    assert_eq!(names.len(), 9);
    // Dots are stripped from the allow-list entries.
    assert!(names.iter().all(|n| !n.starts_with('.')));
}

#[tokio::test]
async fn test_ocr_status_endpoint_reports_absent_engine() {
    let router = create_router(OcrRuntime::unavailable(), None);
    let value = get_json(router, "/api/test-ocr").await;

    assert_eq!(value["tesseract_available"], false);
    assert!(value.get("tesseract_version").is_none());
}

#[tokio::test]
async fn test_ocr_status_endpoint_reports_version() {
    let router = create_router(
        OcrRuntime::new(true, Some("tesseract 5.3.0".to_string())),
        None,
    );
    let value = get_json(router, "/api/test-ocr").await;

    assert_eq!(value["tesseract_available"], true);
    assert_eq!(value["tesseract_version"], "tesseract 5.3.0");
}
