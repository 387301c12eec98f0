//! REST server for the complexity analysis service

pub mod handlers;
pub mod routing;
pub mod server;
pub mod types;

pub use server::start_server;

use crate::refiner::Refine;
use std::sync::Arc;

/// Shared state injected into every handler.
///
/// The refiner is the single optional dependency of the service, fixed at
/// startup: `None` is the explicit offline mode.
#[derive(Clone)]
pub struct AppState {
  pub refiner: Option<Arc<dyn Refine>>,
}

impl AppState {
  /// State without a refiner; every request is served offline.
  pub fn offline() -> Self {
    Self { refiner: None }
  }

  /// State with a configured refiner.
  pub fn with_refiner(refiner: Arc<dyn Refine>) -> Self {
    Self { refiner: Some(refiner) }
  }
}
