use std::path::PathBuf;

use moodboard_core::naming::DEFAULT_IMAGE_PREFIX;
use moodboard_db::DEFAULT_MAX_CONNECTIONS;
use moodboard_storage::{ImageStoreConfig, StorageBackendType};

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL and the image store location have
/// defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Pool size (default: `10`).
    pub db_max_connections: u32,
    /// Folder prefix for image keys in the object store.
    pub image_prefix: String,
    /// Which object store to read images from, and where.
    pub image_store: ImageStoreConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                           |
    /// |------------------------|-----------------------------------|
    /// | `HOST`                 | `0.0.0.0`                         |
    /// | `PORT`                 | `3000`                            |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`           |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                              |
    /// | `DATABASE_URL`         | required                          |
    /// | `DB_MAX_CONNECTIONS`   | `10`                              |
    /// | `IMAGE_PREFIX`         | `Prompts/Final images moodboard/` |
    /// | `IMAGE_STORE_BACKEND`  | `s3`                              |
    /// | `IMAGE_BUCKET`         | required when backend is `s3`     |
    /// | `IMAGE_STORE_ENDPOINT` | unset                             |
    /// | `IMAGE_STORE_ROOT`     | required when backend is `local`  |
    ///
    /// Panics on missing or malformed values; misconfiguration should stop
    /// the process before it binds.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .map(|v| v.parse().expect("DB_MAX_CONNECTIONS must be a valid u32"))
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        let image_prefix =
            std::env::var("IMAGE_PREFIX").unwrap_or_else(|_| DEFAULT_IMAGE_PREFIX.into());

        let backend = std::env::var("IMAGE_STORE_BACKEND").unwrap_or_else(|_| "s3".into());
        let image_store = match StorageBackendType::from_name(&backend) {
            Ok(StorageBackendType::S3) => ImageStoreConfig::S3 {
                bucket: std::env::var("IMAGE_BUCKET")
                    .expect("IMAGE_BUCKET must be set for the s3 image store"),
                endpoint: std::env::var("IMAGE_STORE_ENDPOINT")
                    .ok()
                    .filter(|s| !s.trim().is_empty()),
            },
            Ok(StorageBackendType::Local) => ImageStoreConfig::Local {
                root: PathBuf::from(
                    std::env::var("IMAGE_STORE_ROOT")
                        .expect("IMAGE_STORE_ROOT must be set for the local image store"),
                ),
            },
            Err(e) => panic!("{e}"),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            db_max_connections,
            image_prefix,
            image_store,
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blanks_dropped() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn empty_origin_list() {
        assert!(parse_origins("").is_empty());
    }
}
