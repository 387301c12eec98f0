//! Status and version endpoint handlers

use axum::{extract::State, response::Json};

use crate::server::types::{StatusResponse, VersionResponse};
use crate::server::AppState;

/// GET / and GET /status - Health check endpoint
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
  let response = StatusResponse {
    status: "running".to_string(),
    refiner_configured: state.refiner.is_some(),
    version: env!("CARGO_PKG_VERSION").to_string(),
  };

  Json(response)
}

/// GET /version - Returns current service version
pub async fn version() -> Json<VersionResponse> {
  Json(VersionResponse { version: env!("CARGO_PKG_VERSION").to_string() })
}
