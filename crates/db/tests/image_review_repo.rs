//! Integration tests for `ImageReviewRepo`.
//!
//! - Absent rows come back as `None`
//! - Upsert creates on first save and overwrites afterwards
//! - NULL feedback reads as GOOD

use moodboard_core::feedback::Feedback;
use moodboard_db::repositories::ImageReviewRepo;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_review_is_none(pool: PgPool) {
    let review = ImageReviewRepo::find_by_name(&pool, "image7.jpg")
        .await
        .unwrap();
    assert!(review.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upsert_creates_then_overwrites(pool: PgPool) {
    let first = ImageReviewRepo::upsert(&pool, "image3.jpg", Feedback::Bad)
        .await
        .unwrap();
    assert_eq!(first.image_name, "image3.jpg");
    assert_eq!(first.feedback, Feedback::Bad);

    let read = ImageReviewRepo::find_by_name(&pool, "image3.jpg")
        .await
        .unwrap()
        .expect("row should exist after first save");
    assert_eq!(read.feedback, Feedback::Bad);

    ImageReviewRepo::upsert(&pool, "image3.jpg", Feedback::Good)
        .await
        .unwrap();
    let read = ImageReviewRepo::find_by_name(&pool, "image3.jpg")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(read.feedback, Feedback::Good);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM images WHERE image = $1")
        .bind("image3.jpg")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1, "upsert must not duplicate the row");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn null_feedback_reads_as_good(pool: PgPool) {
    sqlx::query("INSERT INTO images (image) VALUES ('image11.jpg')")
        .execute(&pool)
        .await
        .unwrap();

    let review = ImageReviewRepo::find_by_name(&pool, "image11.jpg")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(review.feedback, Feedback::Good);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upsert_on_existing_null_row(pool: PgPool) {
    sqlx::query("INSERT INTO images (image) VALUES ('image12.jpg')")
        .execute(&pool)
        .await
        .unwrap();

    let review = ImageReviewRepo::upsert(&pool, "image12.jpg", Feedback::Bad)
        .await
        .unwrap();
    assert_eq!(review.feedback, Feedback::Bad);
}
