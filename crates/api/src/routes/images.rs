//! Route definitions for per-image review.
//!
//! ```text
//! GET    /{image_id}                 get_review_view
//! GET    /{image_id}/file            get_image_file
//! GET    /{image_id}/review          get_image_review
//! PUT    /{image_id}/review          save_image_review
//! GET    /{image_id}/prompts         list_prompts
//! POST   /{image_id}/prompts         add_prompt
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::images;
use crate::state::AppState;

/// Image routes -- mounted at `/images`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{image_id}", get(images::get_review_view))
        .route("/{image_id}/file", get(images::get_image_file))
        .route(
            "/{image_id}/review",
            get(images::get_image_review).put(images::save_image_review),
        )
        .route(
            "/{image_id}/prompts",
            get(images::list_prompts).post(images::add_prompt),
        )
}
