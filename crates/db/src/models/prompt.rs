//! Prompt models and DTOs.

use moodboard_core::feedback::Feedback;
use moodboard_core::types::{DbId, ImageId};
use serde::Serialize;
use sqlx::FromRow;

use super::decode_error;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// Raw `prompts` row, columns aliased to domain names.
#[derive(Debug, Clone, FromRow)]
pub struct PromptRow {
    pub serial_no: DbId,
    pub image_id: ImageId,
    pub text: String,
    pub feedback: Option<String>,
}

/// A candidate prompt for an image, with feedback resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prompt {
    pub serial_no: DbId,
    pub image_id: ImageId,
    pub text: String,
    pub feedback: Feedback,
}

impl TryFrom<PromptRow> for Prompt {
    type Error = sqlx::Error;

    fn try_from(row: PromptRow) -> Result<Self, Self::Error> {
        let feedback = Feedback::from_stored(row.feedback.as_deref())
            .map_err(|e| decode_error("feedback", e))?;
        Ok(Self {
            serial_no: row.serial_no,
            image_id: row.image_id,
            text: row.text,
            feedback,
        })
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Input for adding a prompt. Feedback always starts as `GOOD`.
#[derive(Debug, Clone)]
pub struct CreatePrompt {
    pub image_id: ImageId,
    pub text: String,
}

/// Edited prompt content; text and feedback are written together.
#[derive(Debug, Clone)]
pub struct UpdatePrompt {
    pub text: String,
    pub feedback: Feedback,
}
