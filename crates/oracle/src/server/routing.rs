//! Axum router configuration for all endpoints

use axum::{
  routing::{get, post},
  Router,
};

use crate::server::handlers::{analyze, ask, status};
use crate::server::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    // Status and version endpoints
    .route("/", get(status::status))
    .route("/status", get(status::status))
    .route("/version", get(status::version))
    // Analysis endpoints
    .route("/analyze", post(analyze::analyze))
    .route("/ask-ai", post(ask::ask_ai))
    // Share the refiner as axum state
    .with_state(state)
}
