use async_trait::async_trait;
use aws_sdk_s3::operation::put_object::builders::PutObjectFluentBuilder;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_sdk_s3::Client;
use bytes::Bytes;

use filedrop_core::storage::{BlobError, BlobStore};
use filedrop_core::upload::public_url;

use super::error::{map_get_object_error, map_put_object_error};

/// Upload bucket backed by S3. Objects are written public-read.
#[derive(Debug, Clone)]
pub struct S3BlobStore {
    client: Client,
    bucket: String,
}

impl S3BlobStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Public-read write of `content` under `key`.
    fn put_request(
        &self,
        key: &str,
        content: Bytes,
        content_type: Option<&str>,
    ) -> PutObjectFluentBuilder {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .acl(ObjectCannedAcl::PublicRead)
            .set_content_type(content_type.map(str::to_owned))
            .body(ByteStream::from(content))
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn put_object(
        &self,
        key: &str,
        content: Bytes,
        content_type: Option<&str>,
    ) -> Result<(), BlobError> {
        self.put_request(key, content, content_type)
            .send()
            .await
            .map_err(|e| map_put_object_error(e, key))?;

        Ok(())
    }

    async fn get_object(&self, key: &str) -> Result<Bytes, BlobError> {
        let output = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| map_get_object_error(e, key))?;

        let data = output
            .body
            .collect()
            .await
            .map_err(|e| BlobError::GetFailed {
                key: key.to_string(),
                reason: e.to_string(),
            })?;
        Ok(data.into_bytes())
    }

    fn public_url(&self, key: &str) -> String {
        public_url(&self.bucket, key)
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::config::{BehaviorVersion, Region};

    use super::*;

    fn store() -> S3BlobStore {
        let config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .build();
        S3BlobStore::new(Client::from_conf(config), "media")
    }

    #[test]
    fn test_put_request_is_public_read_with_content_type() {
        let put = store().put_request("x.jpg", Bytes::from_static(b"jpeg"), Some("image/jpeg"));
        let input = put.as_input();

        assert_eq!(input.get_bucket().as_deref(), Some("media"));
        assert_eq!(input.get_key().as_deref(), Some("x.jpg"));
        assert_eq!(input.get_acl(), &Some(ObjectCannedAcl::PublicRead));
        assert_eq!(input.get_content_type().as_deref(), Some("image/jpeg"));
    }

    #[test]
    fn test_put_request_without_content_type() {
        let put = store().put_request("notes.txt", Bytes::from_static(b"text"), None);

        assert_eq!(put.as_input().get_acl(), &Some(ObjectCannedAcl::PublicRead));
        assert_eq!(put.as_input().get_content_type(), &None);
    }

    #[test]
    fn test_public_url_uses_bucket() {
        assert_eq!(
            store().public_url("x.jpg"),
            "https://media.s3.amazonaws.com/x.jpg"
        );
    }
}
