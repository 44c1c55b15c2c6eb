//! Route definitions for prompts.
//!
//! ```text
//! GET    /{serial_no}                get_prompt
//! PUT    /{serial_no}                save_prompt
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::prompts;
use crate::state::AppState;

/// Prompt routes -- mounted at `/prompts`.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{serial_no}",
        get(prompts::get_prompt).put(prompts::save_prompt),
    )
}
