//! Review workflow rules: input validation, write outcomes, display labels.

use serde::Serialize;

use crate::error::CoreError;
use crate::types::ImageId;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Image identifiers start at 1.
pub const MIN_IMAGE_ID: ImageId = 1;

/// Validate an operator-supplied image identifier.
pub fn validate_image_id(image_id: ImageId) -> Result<(), CoreError> {
    if image_id < MIN_IMAGE_ID {
        return Err(CoreError::Validation(format!(
            "Image id must be at least {MIN_IMAGE_ID} (got {image_id})"
        )));
    }
    Ok(())
}

/// Validate the text of a prompt being added: must contain something other
/// than whitespace. The text is stored as given, untrimmed.
pub fn validate_new_prompt(text: &str) -> Result<(), CoreError> {
    if text.trim().is_empty() {
        return Err(CoreError::Validation("New prompt cannot be empty".to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write outcomes
// ---------------------------------------------------------------------------

/// Result of a strict (update-only) write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteOutcome {
    /// At least one row matched and was rewritten.
    Updated,
    /// No row matched the key; nothing was written.
    NotFound,
}

impl WriteOutcome {
    /// Classify a write by the number of rows it touched.
    pub fn from_rows_affected(rows_affected: u64) -> Self {
        if rows_affected == 0 {
            Self::NotFound
        } else {
            Self::Updated
        }
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

/// Selector label for the prompt at a 1-based position.
pub fn prompt_label(position: usize) -> String {
    format!("Prompt {position}")
}
