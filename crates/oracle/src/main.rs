//! Oracle REST Server
//!
//! HTTP API over the gauge heuristic complexity engine, with optional
//! generative-AI refinement of the offline estimates.

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use oracle::config::RefinerConfig;
use oracle::refiner::GeminiRefiner;
use oracle::server::{start_server, AppState};

#[derive(Parser)]
#[command(name = "oracle_server")]
#[command(about = "Complexity analysis REST API server")]
#[command(version)]
struct Args {
  /// Server bind address
  #[arg(long, default_value = "127.0.0.1:8000")]
  bind: SocketAddr,

  /// Enable verbose logging
  #[arg(short, long)]
  verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  let filter = if args.verbose {
    EnvFilter::new("debug,hyper=info,reqwest=info")
  } else {
    EnvFilter::new("oracle=info,tower_http=info,warn")
  };
  tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

  let config = RefinerConfig::from_env();
  let state = match GeminiRefiner::from_config(&config)? {
    Some(refiner) => {
      tracing::info!("Generative model client initialized ({})", config.model);
      AppState::with_refiner(Arc::new(refiner))
    }
    None => {
      tracing::warn!("GEMINI_API_KEY not found. Running in offline mode.");
      AppState::offline()
    }
  };

  start_server(args.bind, state).await
}
