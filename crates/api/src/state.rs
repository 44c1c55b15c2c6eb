use std::sync::Arc;

use moodboard_storage::ImageStore;

use crate::config::ServerConfig;
use crate::workflow::ReviewWorkflow;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: moodboard_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Review operations over the database and the image store.
    pub workflow: ReviewWorkflow,
}

impl AppState {
    /// Assemble state from explicitly constructed clients.
    pub fn new(
        pool: moodboard_db::DbPool,
        config: ServerConfig,
        image_store: Arc<dyn ImageStore>,
    ) -> Self {
        let workflow = ReviewWorkflow::new(pool.clone(), image_store, config.image_prefix.clone());
        Self {
            pool,
            config: Arc::new(config),
            workflow,
        }
    }
}
