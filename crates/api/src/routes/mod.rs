pub mod health;
pub mod images;
pub mod prompts;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /images/{image_id}                  review view (GET)
/// /images/{image_id}/file             image bytes (GET)
/// /images/{image_id}/review           get, save (GET, PUT)
/// /images/{image_id}/prompts          list, add (GET, POST)
///
/// /prompts/{serial_no}                get, save (GET, PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/images", images::router())
        .nest("/prompts", prompts::router())
}
