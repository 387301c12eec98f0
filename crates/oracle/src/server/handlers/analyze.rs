//! Analysis endpoint handler

use axum::{extract::State, response::Json};
use gauge::{detect, estimate, ComplexityReport, Language};
use tracing::{info, warn};
use uuid::Uuid;

use crate::server::types::{AnalyzeRequest, AnalyzeResponse, MismatchResponse};
use crate::server::AppState;

/// Suggestion appended when a configured refiner fails and the offline
/// report is served instead.
const REFINER_FALLBACK_NOTE: &str = "AI is taking a break (Rate Limit). Showing offline results.";

/// POST /analyze - Language check, offline estimate, optional AI refinement
pub async fn analyze(
  State(state): State<AppState>,
  Json(request): Json<AnalyzeRequest>,
) -> Json<AnalyzeResponse> {
  let transaction_id = Uuid::new_v4();

  if request.code.is_empty() {
    return Json(AnalyzeResponse::Report(ComplexityReport {
      time: "N/A".to_string(),
      space: "N/A".to_string(),
      ..ComplexityReport::default()
    }));
  }

  // Validate the caller-declared language against the sniffer before
  // spending any time on estimation
  let detected = detect(&request.code);
  let declared = request.language.to_lowercase();
  if !declared.is_empty() && detected != Language::Unknown && declared != detected.as_str() {
    info!("[{transaction_id}] language mismatch: declared {declared}, detected {detected}");
    return Json(AnalyzeResponse::Mismatch(MismatchResponse {
      error: format!(
        "Language Mismatch: You selected {} but the code looks like {}.",
        capitalize(&declared),
        detected.title()
      ),
      detected,
    }));
  }

  let offline = estimate(&request.code);

  let Some(refiner) = state.refiner.as_ref() else {
    return Json(AnalyzeResponse::Report(offline));
  };

  match refiner.refine(&request.code, &offline).await {
    Ok(refined) => {
      info!("[{transaction_id}] served AI-refined estimate");
      Json(AnalyzeResponse::Report(refined))
    }
    Err(e) => {
      warn!("[{transaction_id}] refiner failed, serving offline estimate: {e}");
      let mut report = offline;
      report.suggestions.push(REFINER_FALLBACK_NOTE.to_string());
      Json(AnalyzeResponse::Report(report))
    }
  }
}

/// Uppercase the first character for user-facing language names.
fn capitalize(name: &str) -> String {
  let mut chars = name.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    None => String::new(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_capitalize() {
    assert_eq!(capitalize("java"), "Java");
    assert_eq!(capitalize("c"), "C");
    assert_eq!(capitalize(""), "");
  }
}
