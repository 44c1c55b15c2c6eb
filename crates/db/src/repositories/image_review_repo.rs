//! Repository for the `images` table (per-image review status).

use moodboard_core::feedback::Feedback;
use sqlx::PgPool;

use crate::models::image_review::{ImageReview, ImageReviewRow};

/// Column list for images queries, aliased to domain names.
const COLUMNS: &str = "image AS image_name, image_feedback AS feedback";

/// Point reads and upserts for image reviews.
pub struct ImageReviewRepo;

impl ImageReviewRepo {
    /// Find the stored review for an image name, if a row exists.
    pub async fn find_by_name(
        pool: &PgPool,
        image_name: &str,
    ) -> Result<Option<ImageReview>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM images WHERE image = $1");
        sqlx::query_as::<_, ImageReviewRow>(&query)
            .bind(image_name)
            .fetch_optional(pool)
            .await?
            .map(ImageReview::try_from)
            .transpose()
    }

    /// Write the feedback for an image, creating the row on first save.
    /// Returns the stored row.
    pub async fn upsert(
        pool: &PgPool,
        image_name: &str,
        feedback: Feedback,
    ) -> Result<ImageReview, sqlx::Error> {
        let query = format!(
            "INSERT INTO images (image, image_feedback)
             VALUES ($1, $2)
             ON CONFLICT (image) DO UPDATE SET image_feedback = EXCLUDED.image_feedback
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ImageReviewRow>(&query)
            .bind(image_name)
            .bind(feedback.as_str())
            .fetch_one(pool)
            .await?;
        ImageReview::try_from(row)
    }
}
