use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use filedrop_core::storage::{BlobError, BlobStore};
use filedrop_core::upload::public_url;

/// Map-backed upload bucket. URLs use the same template as S3.
#[derive(Debug, Clone)]
pub struct InMemoryBlobStore {
    bucket: String,
    objects: Arc<RwLock<HashMap<String, StoredObject>>>,
}

#[derive(Debug, Clone)]
struct StoredObject {
    content: Bytes,
    content_type: Option<String>,
}

impl InMemoryBlobStore {
    /// Creates an empty store for `bucket`.
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            objects: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Content type an object was stored with.
    pub async fn content_type(&self, key: &str) -> Option<String> {
        let objects = self.objects.read().await;
        objects.get(key).and_then(|o| o.content_type.clone())
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn put_object(
        &self,
        key: &str,
        content: Bytes,
        content_type: Option<&str>,
    ) -> Result<(), BlobError> {
        let mut objects = self.objects.write().await;
        objects.insert(
            key.to_string(),
            StoredObject {
                content,
                content_type: content_type.map(str::to_owned),
            },
        );
        Ok(())
    }

    async fn get_object(&self, key: &str) -> Result<Bytes, BlobError> {
        let objects = self.objects.read().await;
        objects
            .get(key)
            .map(|o| o.content.clone())
            .ok_or_else(|| BlobError::NotFound(key.to_string()))
    }

    fn public_url(&self, key: &str) -> String {
        public_url(&self.bucket, key)
    }
}
