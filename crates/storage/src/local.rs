//! Local-directory backend, for development and offline review.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use crate::{ImageStore, StorageError};

pub struct LocalFsImageStore {
    root: PathBuf,
}

impl LocalFsImageStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Resolve `key` beneath the root, refusing anything that could escape it.
    fn resolve(&self, key: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(key);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if key.is_empty() || escapes {
            return Err(StorageError::NotFound {
                key: key.to_string(),
            });
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl ImageStore for LocalFsImageStore {
    fn backend_tag(&self) -> &'static str {
        "local"
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.resolve(key)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StorageError::NotFound {
                key: key.to_string(),
            }),
            Err(e) => Err(StorageError::Unavailable(format!(
                "read {} failed: {e}",
                path.display()
            ))),
        }
    }
}
