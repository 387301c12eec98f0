//! Generative-model client for refining offline estimates
//!
//! The refiner is an injectable collaborator behind the [`Refine`] trait:
//! the production implementation talks to the Gemini `generateContent` REST
//! API, and a canned implementation serves tests. Handlers treat every
//! refiner failure the same way (fall back to the offline report); the typed
//! error exists for logs.

use async_trait::async_trait;
use gauge::ComplexityReport;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::config::RefinerConfig;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Errors surfaced by a refiner.
#[derive(Debug, Error)]
pub enum RefinerError {
  #[error("request failed: {0}")]
  Transport(#[from] reqwest::Error),
  #[error("model API returned status {0}")]
  Status(reqwest::StatusCode),
  #[error("malformed model payload: {0}")]
  Payload(String),
}

/// A collaborator that can refine offline reports and answer questions.
#[async_trait]
pub trait Refine: Send + Sync {
  /// Refine an offline estimate into the model's structured verdict.
  async fn refine(
    &self,
    code: &str,
    offline: &ComplexityReport,
  ) -> Result<ComplexityReport, RefinerError>;

  /// Answer a free-form question about a snippet.
  async fn answer(&self, question: &str, code: &str) -> Result<String, RefinerError>;
}

// Wire types for the generateContent endpoint
// ===========================================

#[derive(Serialize)]
struct GenerateRequest {
  contents: Vec<Content>,
  #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
  generation_config: Option<GenerationConfig>,
}

#[derive(Serialize, Deserialize)]
struct Content {
  parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
  text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
  #[serde(rename = "responseMimeType")]
  response_mime_type: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
  #[serde(default)]
  candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
  content: Content,
}

// Production client
// =================

/// Refiner backed by the Gemini `generateContent` REST API.
pub struct GeminiRefiner {
  http: Client,
  api_key: String,
  model: String,
  base_url: String,
}

impl GeminiRefiner {
  /// Build a production client from config.
  ///
  /// Returns `Ok(None)` when no API key is configured, so the caller can
  /// make the offline mode explicit instead of carrying a half-built client.
  pub fn from_config(config: &RefinerConfig) -> Result<Option<Self>, RefinerError> {
    let Some(api_key) = config.api_key.clone() else {
      return Ok(None);
    };

    let http = Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;

    Ok(Some(Self {
      http,
      api_key,
      model: config.model.clone(),
      base_url: DEFAULT_BASE_URL.to_string(),
    }))
  }

  /// Point the client at a different API host (for tests).
  pub fn with_base_url(mut self, base_url: &str) -> Self {
    self.base_url = base_url.trim_end_matches('/').to_string();
    self
  }

  /// One generateContent round trip, returning the first candidate's text.
  async fn generate(&self, prompt: &str, json_output: bool) -> Result<String, RefinerError> {
    let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model);
    let request = GenerateRequest {
      contents: vec![Content { parts: vec![Part { text: prompt.to_string() }] }],
      generation_config: json_output
        .then(|| GenerationConfig { response_mime_type: "application/json".to_string() }),
    };

    let response =
      self.http.post(&url).header("x-goog-api-key", &self.api_key).json(&request).send().await?;

    if !response.status().is_success() {
      return Err(RefinerError::Status(response.status()));
    }

    let payload: GenerateResponse = response.json().await?;
    payload
      .candidates
      .into_iter()
      .next()
      .and_then(|candidate| candidate.content.parts.into_iter().next())
      .map(|part| part.text)
      .ok_or_else(|| RefinerError::Payload("no candidates in response".to_string()))
  }
}

#[async_trait]
impl Refine for GeminiRefiner {
  async fn refine(
    &self,
    code: &str,
    offline: &ComplexityReport,
  ) -> Result<ComplexityReport, RefinerError> {
    let text = self.generate(&refinement_prompt(code, offline), true).await?;
    serde_json::from_str(&text).map_err(|e| RefinerError::Payload(e.to_string()))
  }

  async fn answer(&self, question: &str, code: &str) -> Result<String, RefinerError> {
    self.generate(&format!("Explain simply: {question} \n Code: {code}"), false).await
  }
}

/// Prompt asking the model to verify an offline estimate, constrained to the
/// report's JSON shape.
fn refinement_prompt(code: &str, offline: &ComplexityReport) -> String {
  format!(
    "You are an expert Senior Software Engineer.\n\
     Analyze the code for Time and Space Complexity.\n\n\
     Code:\n\
     ```\n\
     {code}\n\
     ```\n\n\
     Current Heuristic Estimate:\n\
     - Time: {time}\n\
     - Space: {space}\n\n\
     Return JSON:\n\
     {{\n\
         \"time\": \"Verified Time Complexity\",\n\
         \"space\": \"Verified Space Complexity\",\n\
         \"warnings\": [\"Critical issues (max 2 lines)\"],\n\
         \"suggestions\": [\"Improvement advice (max 2 lines)\"]\n\
     }}",
    time = offline.time,
    space = offline.space,
  )
}

// Test double
// ===========

/// Canned refiner for tests: either always succeeds with fixed responses or
/// always fails.
pub struct StaticRefiner {
  report: Option<ComplexityReport>,
  reply: Option<String>,
}

impl StaticRefiner {
  /// A refiner that returns the given report and reply.
  pub fn new(report: ComplexityReport, reply: &str) -> Self {
    Self { report: Some(report), reply: Some(reply.to_string()) }
  }

  /// A refiner whose every call fails.
  pub fn failing() -> Self {
    Self { report: None, reply: None }
  }
}

#[async_trait]
impl Refine for StaticRefiner {
  async fn refine(
    &self,
    _code: &str,
    _offline: &ComplexityReport,
  ) -> Result<ComplexityReport, RefinerError> {
    self
      .report
      .clone()
      .ok_or_else(|| RefinerError::Payload("static refiner configured to fail".to_string()))
  }

  async fn answer(&self, _question: &str, _code: &str) -> Result<String, RefinerError> {
    self
      .reply
      .clone()
      .ok_or_else(|| RefinerError::Payload("static refiner configured to fail".to_string()))
  }
}
