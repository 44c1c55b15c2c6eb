//! S3-compatible backend.
//!
//! Credentials and region come from the standard AWS provider chain. An
//! explicit endpoint switches to path-style addressing so the same client
//! works against GCS interoperability and MinIO.

use async_trait::async_trait;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::Client;
use tracing::instrument;

use crate::{ImageStore, StorageError};

pub struct S3ImageStore {
    client: Client,
    bucket: String,
}

impl S3ImageStore {
    /// Wrap an already-configured client.
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Build a client from the environment's AWS configuration.
    pub async fn from_env(bucket: String, endpoint: Option<String>) -> Self {
        let shared = aws_config::load_from_env().await;
        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if let Some(endpoint) = endpoint {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }
        let client = Client::from_conf(builder.build());
        tracing::info!(bucket = %bucket, "S3 image store client created");
        Self::new(client, bucket)
    }
}

#[async_trait]
impl ImageStore for S3ImageStore {
    fn backend_tag(&self) -> &'static str {
        "s3"
    }

    #[instrument(skip(self), fields(bucket = %self.bucket))]
    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let output = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| match err.into_service_error() {
                GetObjectError::NoSuchKey(_) => StorageError::NotFound {
                    key: key.to_string(),
                },
                other => StorageError::Unavailable(format!("get_object failed: {other}")),
            })?;

        let bytes = output
            .body
            .collect()
            .await
            .map_err(|e| StorageError::Unavailable(format!("object body read failed: {e}")))?;
        Ok(bytes.into_bytes().to_vec())
    }
}
