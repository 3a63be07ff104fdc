// src/services/s3.rs

//! AWS S3 archive implementation.
//!
//! The bucket is both the durable backup of every filing and the dedup
//! baseline: a key's presence means the document was archived and announced
//! on a previous run.

use std::collections::HashSet;

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use tracing::info;

use crate::error::{AppError, Result};
use crate::models::ArchivedCopy;
use crate::services::ArchiveStore;

/// S3-backed filing archive.
pub struct S3Archive {
    client: Client,
    bucket: String,
}

impl S3Archive {
    /// Create a new archive over an existing bucket.
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Deterministic public retrieval URL for a key.
    pub fn public_url(&self, key: &str) -> String {
        format!("https://{}.s3.amazonaws.com/{}", self.bucket, key)
    }
}

#[async_trait]
impl ArchiveStore for S3Archive {
    /// Enumerate all keys in the bucket, following ListObjectsV2 pagination.
    ///
    /// Pages are drained one at a time into the set, so the inventory may be
    /// arbitrarily large without holding every response in memory. A failure
    /// on any page aborts the whole listing; a partial inventory would make
    /// already-archived filings look new again.
    async fn list_keys(&self) -> Result<HashSet<String>> {
        let mut keys = HashSet::new();
        let mut continuation: Option<String> = None;

        loop {
            let mut request = self.client.list_objects_v2().bucket(&self.bucket);
            if let Some(token) = &continuation {
                request = request.continuation_token(token);
            }

            let page = request
                .send()
                .await
                .map_err(|e| AppError::storage(e.into_service_error().to_string()))?;

            for object in page.contents() {
                if let Some(key) = object.key() {
                    keys.insert(key.to_string());
                }
            }

            // No continuation token means this was the last page.
            match page.next_continuation_token() {
                Some(token) => continuation = Some(token.to_string()),
                None => break,
            }
        }

        info!("Archive inventory: {} keys in s3://{}", keys.len(), self.bucket);
        Ok(keys)
    }

    /// Store document bytes under a key with public-read access.
    async fn store(&self, key: &str, body: Vec<u8>) -> Result<ArchivedCopy> {
        let size = body.len();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .acl(ObjectCannedAcl::PublicRead)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| AppError::storage_write(key, e.into_service_error().to_string()))?;

        info!("Archived {} bytes to s3://{}/{}", size, self.bucket, key);

        Ok(ArchivedCopy {
            key: key.to_string(),
            url: self.public_url(key),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_url_follows_bucket_pattern() {
        let config = aws_sdk_s3::Config::builder()
            .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
            .build();
        let archive = S3Archive::new(Client::from_conf(config), "fara-watcher");

        assert_eq!(
            archive.public_url("Doc123.pdf"),
            "https://fara-watcher.s3.amazonaws.com/Doc123.pdf"
        );
    }
}
