//! Image review models.

use moodboard_core::feedback::Feedback;
use serde::Serialize;
use sqlx::FromRow;

use super::decode_error;

/// Raw `images` row, columns aliased to domain names.
#[derive(Debug, Clone, FromRow)]
pub struct ImageReviewRow {
    pub image_name: String,
    pub feedback: Option<String>,
}

/// Review status of one image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageReview {
    pub image_name: String,
    pub feedback: Feedback,
}

impl TryFrom<ImageReviewRow> for ImageReview {
    type Error = sqlx::Error;

    fn try_from(row: ImageReviewRow) -> Result<Self, Self::Error> {
        let feedback = Feedback::from_stored(row.feedback.as_deref())
            .map_err(|e| decode_error("feedback", e))?;
        Ok(Self {
            image_name: row.image_name,
            feedback,
        })
    }
}
