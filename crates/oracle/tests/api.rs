//! Router-level tests for the REST API, exercised in-process via oneshot.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use gauge::ComplexityReport;
use oracle::refiner::StaticRefiner;
use oracle::server::routing::create_router;
use oracle::server::AppState;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

async fn get(app: axum::Router, path: &str) -> (StatusCode, Value) {
  let request = Request::builder().method(Method::GET).uri(path).body(Body::empty()).unwrap();
  send(app, request).await
}

async fn post_json(app: axum::Router, path: &str, body: Value) -> (StatusCode, Value) {
  let request = Request::builder()
    .method(Method::POST)
    .uri(path)
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from(body.to_string()))
    .unwrap();
  send(app, request).await
}

async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
  let response = app.oneshot(request).await.unwrap();
  let status = response.status();
  let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
  let value = serde_json::from_slice(&bytes).unwrap();
  (status, value)
}

#[tokio::test]
async fn status_reports_mode_and_version() {
  let app = create_router(AppState::offline());
  let (status, body) = get(app, "/status").await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["status"], "running");
  assert_eq!(body["refiner_configured"], false);
  assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn root_serves_status_too() {
  let app = create_router(AppState::offline());
  let (status, body) = get(app, "/").await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["status"], "running");
}

#[tokio::test]
async fn analyze_offline_nested_python() {
  let app = create_router(AppState::offline());
  let (status, body) = post_json(
    app,
    "/analyze",
    json!({
      "code": "for i in range(n):\n  for j in range(n):\n    print(i*j)",
      "language": "python",
    }),
  )
  .await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["time"], "O(n^2)");
  assert_eq!(body["space"], "O(1)");
  let suggestions = body["suggestions"].as_array().unwrap();
  assert!(suggestions.iter().any(|s| s.as_str().unwrap().contains("HashMaps")));
}

#[tokio::test]
async fn analyze_reports_language_mismatch() {
  let app = create_router(AppState::offline());
  let (status, body) = post_json(
    app,
    "/analyze",
    json!({
      "code": "def add(a, b):\n    return a + b",
      "language": "java",
    }),
  )
  .await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["detected"], "python");
  let error = body["error"].as_str().unwrap();
  assert!(error.contains("Language Mismatch"));
  assert!(error.contains("Java"));
  assert!(error.contains("Python"));
}

#[tokio::test]
async fn analyze_accepts_matching_declared_language() {
  let app = create_router(AppState::offline());
  let (status, body) = post_json(
    app,
    "/analyze",
    json!({
      "code": "def add(a, b):\n    return a + b",
      "language": "python",
    }),
  )
  .await;

  assert_eq!(status, StatusCode::OK);
  assert!(body.get("error").is_none());
  assert_eq!(body["time"], "O(1)");
}

#[tokio::test]
async fn analyze_skips_mismatch_check_for_unknown_snippets() {
  // Pseudocode detects as unknown; a declared language is not contradicted.
  let app = create_router(AppState::offline());
  let (status, body) = post_json(
    app,
    "/analyze",
    json!({
      "code": "x <- y plus z over the full table",
      "language": "python",
    }),
  )
  .await;

  assert_eq!(status, StatusCode::OK);
  assert!(body.get("error").is_none());
  assert_eq!(body["time"], "O(1)");
}

#[tokio::test]
async fn analyze_empty_code_short_circuits() {
  let app = create_router(AppState::offline());
  let (status, body) = post_json(app, "/analyze", json!({ "code": "" })).await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["time"], "N/A");
  assert_eq!(body["space"], "N/A");
}

#[tokio::test]
async fn analyze_serves_refined_report_when_model_succeeds() {
  let refined = ComplexityReport {
    time: "O(n log n)".to_string(),
    space: "O(n)".to_string(),
    warnings: vec!["Sorting dominates the runtime.".to_string()],
    suggestions: vec![],
  };
  let state = AppState::with_refiner(Arc::new(StaticRefiner::new(refined, "ok")));
  let app = create_router(state);

  let (status, body) = post_json(
    app,
    "/analyze",
    json!({ "code": "for i in range(n):\n  order(i)" }),
  )
  .await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["time"], "O(n log n)");
  assert_eq!(body["space"], "O(n)");
  assert_eq!(body["warnings"][0], "Sorting dominates the runtime.");
}

#[tokio::test]
async fn analyze_falls_back_to_offline_report_when_model_fails() {
  let state = AppState::with_refiner(Arc::new(StaticRefiner::failing()));
  let app = create_router(state);

  let (status, body) = post_json(
    app,
    "/analyze",
    json!({ "code": "for i in range(n):\n  for j in range(n):\n    print(i*j)" }),
  )
  .await;

  assert_eq!(status, StatusCode::OK);
  // The offline estimate survives, with the fallback note appended last.
  assert_eq!(body["time"], "O(n^2)");
  let suggestions = body["suggestions"].as_array().unwrap();
  assert_eq!(
    suggestions.last().unwrap(),
    "AI is taking a break (Rate Limit). Showing offline results."
  );
}

#[tokio::test]
async fn ask_ai_answers_offline_without_refiner() {
  let app = create_router(AppState::offline());
  let (status, body) =
    post_json(app, "/ask-ai", json!({ "question": "why", "code": "x = 1" })).await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["answer"], "I am in offline mode. Please check your API key.");
}

#[tokio::test]
async fn ask_ai_forwards_model_reply() {
  let state = AppState::with_refiner(Arc::new(StaticRefiner::new(
    ComplexityReport::default(),
    "Loops repeat work for every element.",
  )));
  let app = create_router(state);

  let (status, body) =
    post_json(app, "/ask-ai", json!({ "question": "what is O(n)?", "code": "" })).await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["answer"], "Loops repeat work for every element.");
}

#[tokio::test]
async fn ask_ai_apologizes_when_model_fails() {
  let state = AppState::with_refiner(Arc::new(StaticRefiner::failing()));
  let app = create_router(state);

  let (status, body) = post_json(app, "/ask-ai", json!({ "question": "q", "code": "c" })).await;

  assert_eq!(status, StatusCode::OK);
  assert!(body["answer"].as_str().unwrap().contains("try again in 30 seconds"));
}
