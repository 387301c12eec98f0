//! Free-form question endpoint handler

use axum::{extract::State, response::Json};
use tracing::warn;
use uuid::Uuid;

use crate::server::types::{AskRequest, AskResponse};
use crate::server::AppState;

const OFFLINE_ANSWER: &str = "I am in offline mode. Please check your API key.";
const BUSY_ANSWER: &str =
  "I'm thinking too hard and need a break! (Rate Limit Reached). Please try again in 30 seconds.";

/// POST /ask-ai - Forward a question about a snippet to the model
pub async fn ask_ai(
  State(state): State<AppState>,
  Json(request): Json<AskRequest>,
) -> Json<AskResponse> {
  let transaction_id = Uuid::new_v4();

  let Some(refiner) = state.refiner.as_ref() else {
    return Json(AskResponse { answer: OFFLINE_ANSWER.to_string() });
  };

  match refiner.answer(&request.question, &request.code).await {
    Ok(answer) => Json(AskResponse { answer }),
    Err(e) => {
      warn!("[{transaction_id}] model call failed: {e}");
      Json(AskResponse { answer: BUSY_ANSWER.to_string() })
    }
  }
}
