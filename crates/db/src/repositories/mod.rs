//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument. All queries bind their
//! inputs as parameters.

pub mod image_review_repo;
pub mod prompt_repo;

pub use image_review_repo::ImageReviewRepo;
pub use prompt_repo::PromptRepo;
