//! REST server startup and configuration

use anyhow::Result;
use axum::serve;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::server::routing::create_router;
use crate::server::AppState;

/// Start the REST server
pub async fn start_server(addr: SocketAddr, state: AppState) -> Result<()> {
  let mode = if state.refiner.is_some() { "AI refinement enabled" } else { "offline mode" };
  info!("Starting oracle REST server on {addr} ({mode})");

  // Browser editors call the service directly, so CORS stays permissive
  let app = create_router(state)
    .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(CorsLayer::permissive()));

  let listener = TcpListener::bind(addr).await?;
  info!("Server listening on {addr}");

  serve(listener, app).await?;
  Ok(())
}
