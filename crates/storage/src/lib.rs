//! Image store gateway.
//!
//! The review service reads exactly one kind of object: the image bytes at
//! a derived key. [`ImageStore`] is the seam; [`connect`] builds the
//! configured backend once at startup and the handle is shared for the
//! process lifetime.

pub mod local;
pub mod memory;
pub mod s3;

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

pub use local::LocalFsImageStore;
pub use memory::InMemoryImageStore;
pub use s3::S3ImageStore;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Object not found: {key}")]
    NotFound { key: String },

    #[error("Image store unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid image store configuration: {0}")]
    InvalidConfig(String),
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Read-only access to image objects by key.
#[async_trait]
pub trait ImageStore: Send + Sync + 'static {
    /// Short backend name for logs.
    fn backend_tag(&self) -> &'static str;

    /// Fetch the full object at `key`.
    ///
    /// Absent objects are [`StorageError::NotFound`], never empty bytes.
    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError>;
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Storage backend kinds selectable through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackendType {
    S3,
    Local,
}

impl StorageBackendType {
    /// Parse from the `IMAGE_STORE_BACKEND` value.
    pub fn from_name(name: &str) -> Result<Self, StorageError> {
        match name {
            "s3" => Ok(Self::S3),
            "local" => Ok(Self::Local),
            other => Err(StorageError::InvalidConfig(format!(
                "Unknown image store backend '{other}'. Must be one of: s3, local"
            ))),
        }
    }

    /// Configuration name value.
    pub fn name(self) -> &'static str {
        match self {
            Self::S3 => "s3",
            Self::Local => "local",
        }
    }
}

/// Backend selection plus the settings each backend needs.
#[derive(Debug, Clone)]
pub enum ImageStoreConfig {
    /// S3 or an S3-compatible endpoint (GCS interoperability, MinIO).
    S3 {
        bucket: String,
        endpoint: Option<String>,
    },
    /// A directory on local disk, keys resolved beneath it.
    Local { root: PathBuf },
}

impl ImageStoreConfig {
    pub fn backend_type(&self) -> StorageBackendType {
        match self {
            Self::S3 { .. } => StorageBackendType::S3,
            Self::Local { .. } => StorageBackendType::Local,
        }
    }
}

/// Build the configured image store.
pub async fn connect(config: &ImageStoreConfig) -> Arc<dyn ImageStore> {
    match config {
        ImageStoreConfig::S3 { bucket, endpoint } => {
            Arc::new(S3ImageStore::from_env(bucket.clone(), endpoint.clone()).await)
        }
        ImageStoreConfig::Local { root } => Arc::new(LocalFsImageStore::new(root.clone())),
    }
}
