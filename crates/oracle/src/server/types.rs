//! REST API types with schemars annotations for OpenAPI generation

use gauge::{ComplexityReport, Language};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Request for the /analyze endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AnalyzeRequest {
  /// Source snippet to analyze
  #[serde(default)]
  pub code: String,

  /// Caller-declared language; empty means "not declared"
  #[serde(default)]
  pub language: String,
}

/// Response for the /analyze endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum AnalyzeResponse {
  /// Declared and detected languages disagree; no estimate was produced
  Mismatch(MismatchResponse),

  /// Offline or AI-refined complexity estimate
  Report(ComplexityReport),
}

/// Language-mismatch payload
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct MismatchResponse {
  /// Human readable mismatch description
  pub error: String,

  /// Language the sniffer detected
  pub detected: Language,
}

/// Request for the /ask-ai endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AskRequest {
  /// Free-form question
  #[serde(default)]
  pub question: String,

  /// Snippet the question refers to
  #[serde(default)]
  pub code: String,
}

/// Response for the /ask-ai endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AskResponse {
  /// Model answer, or a fixed offline/busy message
  pub answer: String,
}

/// Response for the / and /status endpoints
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StatusResponse {
  /// Service health indicator
  pub status: String,

  /// Whether AI refinement is available
  pub refiner_configured: bool,

  /// Current service version
  pub version: String,
}

/// Response for the /version endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct VersionResponse {
  /// Current service version
  pub version: String,
}
