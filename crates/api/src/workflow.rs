//! The review workflow: one operator looking at one image at a time.
//!
//! Every operation is a single round trip to exactly one store. Reads
//! resolve absent rows to their documented defaults; writes wrap store
//! errors in [`AppError::UpdateFailed`]. Nothing here is retried, cached,
//! or carried between requests.

use std::sync::Arc;

use moodboard_core::error::CoreError;
use moodboard_core::feedback::Feedback;
use moodboard_core::naming::{image_name, storage_key};
use moodboard_core::review::{self, prompt_label, WriteOutcome};
use moodboard_core::types::{DbId, ImageId};
use moodboard_db::models::image_review::ImageReview;
use moodboard_db::models::prompt::{CreatePrompt, Prompt, UpdatePrompt};
use moodboard_db::repositories::{ImageReviewRepo, PromptRepo};
use moodboard_db::DbPool;
use moodboard_storage::ImageStore;
use serde::Serialize;

use crate::error::{AppError, AppResult};

// ---------------------------------------------------------------------------
// View types
// ---------------------------------------------------------------------------

/// A prompt as shown in the selector: its row plus 1-based position.
#[derive(Debug, Clone, Serialize)]
pub struct PromptEntry {
    #[serde(flatten)]
    pub prompt: Prompt,
    pub position: usize,
    pub label: String,
}

impl PromptEntry {
    /// Number an ordered prompt list for display.
    pub fn number(prompts: Vec<Prompt>) -> Vec<Self> {
        prompts
            .into_iter()
            .enumerate()
            .map(|(i, prompt)| Self {
                prompt,
                position: i + 1,
                label: prompt_label(i + 1),
            })
            .collect()
    }
}

/// Everything the operator needs to review one image.
#[derive(Debug, Clone, Serialize)]
pub struct ImageReviewView {
    pub image_id: ImageId,
    pub image_name: String,
    pub storage_key: String,
    pub image_url: String,
    pub feedback: Feedback,
    pub has_prompts: bool,
    pub prompts: Vec<PromptEntry>,
}

/// Relative URL of the endpoint serving an image's bytes.
pub fn image_url(image_id: ImageId) -> String {
    format!("/api/v1/images/{image_id}/file")
}

// ---------------------------------------------------------------------------
// Workflow
// ---------------------------------------------------------------------------

/// Review operations over explicitly injected store handles.
#[derive(Clone)]
pub struct ReviewWorkflow {
    pool: DbPool,
    images: Arc<dyn ImageStore>,
    image_prefix: String,
}

impl ReviewWorkflow {
    pub fn new(pool: DbPool, images: Arc<dyn ImageStore>, image_prefix: String) -> Self {
        Self {
            pool,
            images,
            image_prefix,
        }
    }

    /// Object-store key for an image under the configured prefix.
    pub fn storage_key(&self, image_id: ImageId) -> String {
        storage_key(&self.image_prefix, image_id)
    }

    /// Tag of the image store backend in use.
    pub fn image_backend(&self) -> &'static str {
        self.images.backend_tag()
    }

    /// All prompts for an image, ascending by serial number. Empty when the
    /// image has none.
    pub async fn load_prompts(&self, image_id: ImageId) -> AppResult<Vec<Prompt>> {
        review::validate_image_id(image_id)?;
        let prompts = PromptRepo::list_for_image(&self.pool, image_id).await?;
        Ok(prompts)
    }

    /// Stored feedback for an image name, `GOOD` when no row exists.
    pub async fn load_image_review(&self, image_name: &str) -> AppResult<Feedback> {
        let review = ImageReviewRepo::find_by_name(&self.pool, image_name).await?;
        Ok(review.map(|r| r.feedback).unwrap_or_default())
    }

    /// Raw bytes of the image object. Decoding is left to the caller.
    pub async fn fetch_image_bytes(&self, image_id: ImageId) -> AppResult<Vec<u8>> {
        review::validate_image_id(image_id)?;
        let key = self.storage_key(image_id);
        let bytes = self.images.get(&key).await?;
        tracing::debug!(
            image_id,
            key = %key,
            backend = self.images.backend_tag(),
            size = bytes.len(),
            "Fetched image bytes"
        );
        Ok(bytes)
    }

    /// Rewrite a prompt's text and feedback together. Strictly an update:
    /// an unknown serial number yields [`WriteOutcome::NotFound`].
    pub async fn save_prompt(
        &self,
        serial_no: DbId,
        text: String,
        feedback: Feedback,
    ) -> AppResult<WriteOutcome> {
        let input = UpdatePrompt { text, feedback };
        let rows = PromptRepo::update(&self.pool, serial_no, &input)
            .await
            .map_err(AppError::update_failed("update prompt"))?;
        Ok(WriteOutcome::from_rows_affected(rows))
    }

    /// Write an image's feedback, creating its review row on first save.
    pub async fn save_image_review(
        &self,
        image_name: &str,
        feedback: Feedback,
    ) -> AppResult<ImageReview> {
        ImageReviewRepo::upsert(&self.pool, image_name, feedback)
            .await
            .map_err(AppError::update_failed("update image review"))
    }

    /// Add a prompt to an image with `GOOD` feedback. Blank text is
    /// rejected before the database is touched.
    pub async fn add_prompt(&self, image_id: ImageId, text: String) -> AppResult<Prompt> {
        review::validate_image_id(image_id)?;
        review::validate_new_prompt(&text)?;
        let input = CreatePrompt { image_id, text };
        PromptRepo::create(&self.pool, &input)
            .await
            .map_err(AppError::update_failed("add new prompt"))
    }

    /// A single prompt by serial number.
    pub async fn find_prompt(&self, serial_no: DbId) -> AppResult<Prompt> {
        PromptRepo::find_by_id(&self.pool, serial_no)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::NotFound {
                    entity: "Prompt",
                    id: serial_no,
                })
            })
    }

    /// Assemble the editable view of one image: its derived names, current
    /// review, and numbered prompts.
    pub async fn load_review_view(&self, image_id: ImageId) -> AppResult<ImageReviewView> {
        review::validate_image_id(image_id)?;
        let name = image_name(image_id);
        let feedback = self.load_image_review(&name).await?;
        let prompts = PromptEntry::number(self.load_prompts(image_id).await?);

        Ok(ImageReviewView {
            image_id,
            storage_key: self.storage_key(image_id),
            image_url: image_url(image_id),
            image_name: name,
            feedback,
            has_prompts: !prompts.is_empty(),
            prompts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(serial_no: DbId, text: &str) -> Prompt {
        Prompt {
            serial_no,
            image_id: 1,
            text: text.to_string(),
            feedback: Feedback::Good,
        }
    }

    #[test]
    fn entries_are_numbered_from_one() {
        let entries = PromptEntry::number(vec![prompt(40, "a"), prompt(52, "b")]);
        assert_eq!(entries[0].position, 1);
        assert_eq!(entries[0].label, "Prompt 1");
        assert_eq!(entries[1].position, 2);
        assert_eq!(entries[1].prompt.serial_no, 52);
    }

    #[test]
    fn entry_serializes_flat() {
        let entries = PromptEntry::number(vec![prompt(40, "a")]);
        let json = serde_json::to_value(&entries[0]).unwrap();
        assert_eq!(json["serial_no"], 40);
        assert_eq!(json["feedback"], "GOOD");
        assert_eq!(json["label"], "Prompt 1");
    }

    #[test]
    fn image_url_points_at_file_endpoint() {
        assert_eq!(image_url(7), "/api/v1/images/7/file");
    }
}
