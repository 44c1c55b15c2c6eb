#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use moodboard_api::app::build_app;
use moodboard_api::config::ServerConfig;
use moodboard_api::state::AppState;
use moodboard_storage::{ImageStoreConfig, InMemoryImageStore};

/// Image prefix used by every test app.
pub const TEST_PREFIX: &str = "moodboard/";

/// Build a test `ServerConfig` with safe defaults.
///
/// The database URL and image store settings are placeholders: tests hand
/// the pool and an in-memory store to `AppState` directly.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: String::new(),
        db_max_connections: 5,
        image_prefix: TEST_PREFIX.to_string(),
        image_store: ImageStoreConfig::Local {
            root: PathBuf::from("/nonexistent"),
        },
    }
}

/// Build the full application router over `pool` and a fresh in-memory
/// image store, returning the store so tests can seed objects.
pub fn build_test_app(pool: PgPool) -> (Router, Arc<InMemoryImageStore>) {
    let store = Arc::new(InMemoryImageStore::new());
    let state = AppState::new(pool, test_config(), store.clone());
    (build_app(state), store)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Insert a prompt row directly with an explicit serial number, leaving
/// feedback NULL. The serial sequence is not advanced.
pub async fn seed_prompt(pool: &PgPool, serial_no: i64, image_id: i64, text: &str) {
    sqlx::query("INSERT INTO prompts (serial_nos, sno, image_prompts) VALUES ($1, $2, $3)")
        .bind(serial_no)
        .bind(image_id)
        .bind(text)
        .execute(pool)
        .await
        .unwrap();
}

/// Number of prompt rows in the table.
pub async fn prompt_count(pool: &PgPool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM prompts")
        .fetch_one(pool)
        .await
        .unwrap();
    count
}
