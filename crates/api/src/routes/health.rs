use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Where review data and image bytes are read from, and whether the
/// database answered.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answered, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub database_reachable: bool,
    /// Backend tag of the configured image store (`s3`, `local`, `memory`).
    pub image_store: &'static str,
    /// Key prefix images are read under.
    pub image_prefix: String,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database_reachable = match moodboard_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check: database unreachable");
            false
        }
    };

    Json(HealthResponse {
        status: if database_reachable { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database_reachable,
        image_store: state.workflow.image_backend(),
        image_prefix: state.config.image_prefix.clone(),
    })
}

/// Root-level routes, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
