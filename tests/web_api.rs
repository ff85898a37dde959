//! Web API integration tests
//!
//! Drives the router directly with in-memory requests and a stub
//! detection backend.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use image::{Rgba, RgbaImage};
use inkwash::detect::{DetectError, Detection, SymbolDetector};
use inkwash::web::{api_routes, AppState};
use inkwash::UnconfiguredDetector;
use std::io::Cursor;
use std::sync::Arc;
use tower::ServiceExt;

const BOUNDARY: &str = "inkwash-test-boundary";

/// Backend stub returning a fixed detection set.
struct StubDetector {
    detections: Vec<Detection>,
}

impl StubDetector {
    fn with_labels(labels: &[(&str, f32)]) -> Self {
        let detections = labels
            .iter()
            .map(|(label, x_min)| Detection {
                x_min: *x_min,
                y_min: 0.0,
                x_max: x_min + 8.0,
                y_max: 8.0,
                label: label.to_string(),
                confidence: 0.95,
            })
            .collect();
        Self { detections }
    }
}

impl SymbolDetector for StubDetector {
    fn detect(&self, _image: &image::RgbImage) -> Result<Vec<Detection>, DetectError> {
        Ok(self.detections.clone())
    }
}

/// Backend stub that always fails inference.
struct FailingDetector;

impl SymbolDetector for FailingDetector {
    fn detect(&self, _image: &image::RgbImage) -> Result<Vec<Detection>, DetectError> {
        Err(DetectError::Inference("model exploded".to_string()))
    }
}

fn router(detector: Arc<dyn SymbolDetector>) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .with_state(Arc::new(AppState::new(detector)))
}

fn sample_png() -> Vec<u8> {
    let mut img = RgbaImage::from_pixel(10, 10, Rgba([255, 255, 255, 255]));
    for (x, y) in [(4, 4), (5, 4), (4, 5), (5, 5)] {
        img.put_pixel(x, y, Rgba([0, 0, 0, 255]));
    }
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
    buf.into_inner()
}

fn multipart_upload(field: &str, bytes: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; \
             filename=\"scan.png\"\r\nContent-Type: image/png\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::post("/api/detect-text")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_detector_readiness() {
    let app = router(Arc::new(StubDetector::with_labels(&[])));
    let response = app
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["detector_ready"], true);
}

#[tokio::test]
async fn health_reports_missing_backend() {
    let app = router(Arc::new(UnconfiguredDetector));
    let response = app
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["detector_ready"], false);
}

#[tokio::test]
async fn detect_text_returns_labels_left_to_right() {
    let detector = StubDetector::with_labels(&[("c", 80.0), ("a", 4.0), ("b", 40.0)]);
    let app = router(Arc::new(detector));

    let response = app
        .oneshot(multipart_upload("file", &sample_png()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["detected_text"], "abc");
}

#[tokio::test]
async fn empty_upload_is_bad_request() {
    let app = router(Arc::new(StubDetector::with_labels(&[])));
    let response = app.oneshot(multipart_upload("file", b"")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("empty input"));
}

#[tokio::test]
async fn undecodable_upload_is_bad_request() {
    let app = router(Arc::new(StubDetector::with_labels(&[])));
    let response = app
        .oneshot(multipart_upload("file", b"not an image"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_file_field_is_bad_request() {
    let app = router(Arc::new(StubDetector::with_labels(&[])));
    let response = app
        .oneshot(multipart_upload("attachment", &sample_png()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("no file"));
}

#[tokio::test]
async fn unconfigured_backend_is_service_unavailable() {
    let app = router(Arc::new(UnconfiguredDetector));
    let response = app
        .oneshot(multipart_upload("file", &sample_png()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn inference_failure_is_internal_error() {
    let app = router(Arc::new(FailingDetector));
    let response = app
        .oneshot(multipart_upload("file", &sample_png()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("inference failed"));
}
