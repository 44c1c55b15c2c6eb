//! Handlers for per-image review: the composite view, image bytes, the
//! image's own review, and the image's prompt list.

use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use moodboard_core::feedback::Feedback;
use moodboard_core::naming::image_name;
use moodboard_core::review::validate_image_id;
use moodboard_core::types::ImageId;
use moodboard_db::models::image_review::ImageReview;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::handlers::prompts::PromptMessage;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::workflow::PromptEntry;

/// Content type served for image objects.
const IMAGE_CONTENT_TYPE: &str = "image/jpeg";

// ---------------------------------------------------------------------------
// API request/response types
// ---------------------------------------------------------------------------

/// Request body for saving an image's review.
#[derive(Debug, Deserialize)]
pub struct SaveImageReviewRequest {
    pub feedback: String,
}

/// Request body for adding a prompt to an image.
#[derive(Debug, Deserialize)]
pub struct AddPromptRequest {
    pub text: String,
}

/// Response for a saved image review.
#[derive(Debug, Serialize)]
pub struct SavedImageReview {
    #[serde(flatten)]
    pub review: ImageReview,
    pub message: &'static str,
}

// ---------------------------------------------------------------------------
// GET /images/{image_id}
// ---------------------------------------------------------------------------

/// The editable review view for one image.
pub async fn get_review_view(
    State(state): State<AppState>,
    Path(image_id): Path<ImageId>,
) -> AppResult<impl IntoResponse> {
    let view = state.workflow.load_review_view(image_id).await?;

    tracing::debug!(
        image_id,
        prompt_count = view.prompts.len(),
        feedback = %view.feedback,
        "Loaded review view"
    );

    Ok(Json(DataResponse { data: view }))
}

// ---------------------------------------------------------------------------
// GET /images/{image_id}/file
// ---------------------------------------------------------------------------

/// Serve the image bytes from the object store.
pub async fn get_image_file(
    State(state): State<AppState>,
    Path(image_id): Path<ImageId>,
) -> AppResult<impl IntoResponse> {
    let bytes = state.workflow.fetch_image_bytes(image_id).await?;
    Ok(([(CONTENT_TYPE, IMAGE_CONTENT_TYPE)], bytes))
}

// ---------------------------------------------------------------------------
// GET /images/{image_id}/review
// ---------------------------------------------------------------------------

/// Current review of an image; `GOOD` if it was never reviewed.
pub async fn get_image_review(
    State(state): State<AppState>,
    Path(image_id): Path<ImageId>,
) -> AppResult<impl IntoResponse> {
    validate_image_id(image_id)?;
    let name = image_name(image_id);
    let feedback = state.workflow.load_image_review(&name).await?;

    Ok(Json(DataResponse {
        data: ImageReview {
            image_name: name,
            feedback,
        },
    }))
}

// ---------------------------------------------------------------------------
// PUT /images/{image_id}/review
// ---------------------------------------------------------------------------

/// Save an image's review, creating the row on first save.
pub async fn save_image_review(
    State(state): State<AppState>,
    Path(image_id): Path<ImageId>,
    AppJson(body): AppJson<SaveImageReviewRequest>,
) -> AppResult<impl IntoResponse> {
    validate_image_id(image_id)?;
    let feedback: Feedback = body.feedback.parse()?;
    let name = image_name(image_id);

    let review = state.workflow.save_image_review(&name, feedback).await?;

    tracing::info!(
        image_id,
        image_name = %review.image_name,
        feedback = %review.feedback,
        "Image review saved"
    );

    Ok(Json(DataResponse {
        data: SavedImageReview {
            review,
            message: "Image review updated successfully",
        },
    }))
}

// ---------------------------------------------------------------------------
// GET /images/{image_id}/prompts
// ---------------------------------------------------------------------------

/// Numbered prompts for an image, ascending by serial number.
pub async fn list_prompts(
    State(state): State<AppState>,
    Path(image_id): Path<ImageId>,
) -> AppResult<impl IntoResponse> {
    let prompts = state.workflow.load_prompts(image_id).await?;

    tracing::debug!(count = prompts.len(), image_id, "Listed prompts");

    Ok(Json(DataResponse {
        data: PromptEntry::number(prompts),
    }))
}

// ---------------------------------------------------------------------------
// POST /images/{image_id}/prompts
// ---------------------------------------------------------------------------

/// Add a prompt to an image with `GOOD` feedback.
pub async fn add_prompt(
    State(state): State<AppState>,
    Path(image_id): Path<ImageId>,
    AppJson(body): AppJson<AddPromptRequest>,
) -> AppResult<impl IntoResponse> {
    let prompt = state.workflow.add_prompt(image_id, body.text).await?;

    tracing::info!(
        serial_no = prompt.serial_no,
        image_id = prompt.image_id,
        "New prompt added"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: PromptMessage {
                prompt,
                message: "New prompt added successfully",
            },
        }),
    ))
}
