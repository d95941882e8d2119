//! HTTP API tests driven through the router with a canned classifier.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use anyhow::{bail, Result};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use emotion_decoder::{
    api::{router, AppState},
    inference::EmotionClassifier,
    pipeline::Analyzer,
};

struct CannedClassifier {
    output: Vec<(&'static str, f32)>,
    calls: AtomicUsize,
}

impl EmotionClassifier for CannedClassifier {
    fn classify(&self, _text: &str) -> Result<Vec<(String, f32)>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.output.is_empty() {
            bail!("model unavailable");
        }
        Ok(self
            .output
            .iter()
            .map(|(label, score)| (label.to_string(), *score))
            .collect())
    }
}

fn app_with(output: Vec<(&'static str, f32)>) -> (Router, Arc<CannedClassifier>) {
    let classifier = Arc::new(CannedClassifier {
        output,
        calls: AtomicUsize::new(0),
    });
    let analyzer = Analyzer::new(classifier.clone(), 512);
    (router(AppState::new(analyzer, "test-model")), classifier)
}

fn sadness_app() -> (Router, Arc<CannedClassifier>) {
    app_with(vec![
        ("joy", 0.10),
        ("sadness", 0.70),
        ("anger", 0.05),
        ("fear", 0.05),
        ("surprise", 0.03),
        ("disgust", 0.02),
        ("neutral", 0.05),
    ])
}

fn analyze_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _) = sadness_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["model"], "test-model");
}

#[tokio::test]
async fn test_index_serves_page() {
    let (app, _) = sadness_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(String::from_utf8_lossy(&body).contains("Emotion Decoder"));
}

#[tokio::test]
async fn test_analyze_returns_ranked_report() {
    let (app, classifier) = sadness_app();

    let response = app
        .oneshot(analyze_request(r#"{"text": "I just feel so alone lately."}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(classifier.calls.load(Ordering::SeqCst), 1);

    let json = json_body(response).await;
    assert_eq!(json["dominant"], "sadness");
    let emotions = json["emotions"].as_array().unwrap();
    assert_eq!(emotions.len(), 7);
    assert_eq!(emotions[0]["label"], "sadness");
    assert_eq!(emotions[1]["label"], "joy");
    assert!(json["explanation"]
        .as_str()
        .unwrap()
        .starts_with("The tone feels heavy."));
    assert!(json["suggestion"]
        .as_str()
        .unwrap()
        .starts_with("Show empathy"));
}

#[tokio::test]
async fn test_blank_text_is_not_analyzed() {
    let (app, classifier) = sadness_app();

    let response = app
        .oneshot(analyze_request(r#"{"text": "   \n "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(classifier.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_unknown_label_uses_fallback_texts() {
    let (app, _) = app_with(vec![("awkward", 0.8), ("joy", 0.2)]);

    let response = app
        .oneshot(analyze_request(r#"{"text": "ok then"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["dominant"], "awkward");
    assert_eq!(
        json["explanation"],
        "This message has a mixed or unclear emotional tone."
    );
    assert_eq!(
        json["suggestion"],
        "Respond mindfully and ask how they’re feeling."
    );
}

#[tokio::test]
async fn test_inference_failure_is_server_error() {
    let (app, _) = app_with(Vec::new());

    let response = app
        .oneshot(analyze_request(r#"{"text": "hello?"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = json_body(response).await;
    assert_eq!(json["error"], "analysis failed");
}
