//! Handlers for individual prompts, addressed by serial number.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use moodboard_core::feedback::Feedback;
use moodboard_core::review::WriteOutcome;
use moodboard_core::types::DbId;
use moodboard_db::models::prompt::Prompt;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for saving an edited prompt.
#[derive(Debug, Deserialize)]
pub struct SavePromptRequest {
    pub text: String,
    pub feedback: String,
}

/// A prompt plus a message for the operator.
#[derive(Debug, Serialize)]
pub struct PromptMessage {
    #[serde(flatten)]
    pub prompt: Prompt,
    pub message: &'static str,
}

/// Result of saving a prompt.
#[derive(Debug, Serialize)]
pub struct SavePromptResponse {
    pub serial_no: DbId,
    pub outcome: WriteOutcome,
    pub message: String,
}

// ---------------------------------------------------------------------------
// GET /prompts/{serial_no}
// ---------------------------------------------------------------------------

/// Fetch a single prompt.
pub async fn get_prompt(
    State(state): State<AppState>,
    Path(serial_no): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let prompt = state.workflow.find_prompt(serial_no).await?;
    Ok(Json(DataResponse { data: prompt }))
}

// ---------------------------------------------------------------------------
// PUT /prompts/{serial_no}
// ---------------------------------------------------------------------------

/// Save an edited prompt's text and feedback in one write.
///
/// An unknown serial number is reported as `not_found` in a 200 response;
/// nothing is created.
pub async fn save_prompt(
    State(state): State<AppState>,
    Path(serial_no): Path<DbId>,
    AppJson(body): AppJson<SavePromptRequest>,
) -> AppResult<impl IntoResponse> {
    let feedback: Feedback = body.feedback.parse()?;

    let outcome = state
        .workflow
        .save_prompt(serial_no, body.text, feedback)
        .await?;

    let message = match outcome {
        WriteOutcome::Updated => {
            tracing::info!(serial_no, feedback = %feedback, "Prompt updated");
            "Prompt updated successfully".to_string()
        }
        WriteOutcome::NotFound => {
            tracing::warn!(serial_no, "Prompt save matched no row");
            format!("No prompt with serial number {serial_no}; nothing was updated")
        }
    };

    Ok(Json(DataResponse {
        data: SavePromptResponse {
            serial_no,
            outcome,
            message,
        },
    }))
}
