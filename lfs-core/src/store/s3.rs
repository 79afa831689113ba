// Copyright 2026 S4Core Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! S3-backed object store.
//!
//! Produces pre-signed GetObject/PutObject URLs and wraps the bucket's
//! ListObjectsV2/DeleteObjects operations. The bucket is the sole source
//! of truth for object existence; nothing is cached here.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::types::{Delete, ObjectIdentifier};
use tracing::debug;

use super::{KeyPage, ObjectStore, SignedUrl};
use crate::error::StoreError;

/// Object store backed by an S3 bucket.
#[derive(Debug, Clone)]
pub struct S3Store {
    client: aws_sdk_s3::Client,
    bucket: String,
    url_validity: Duration,
}

impl S3Store {
    /// Creates a store over an already-configured SDK client.
    ///
    /// `url_validity` is the lifetime of every URL this store signs; it
    /// does not vary with object size.
    pub fn new(
        client: aws_sdk_s3::Client,
        bucket: impl Into<String>,
        url_validity: Duration,
    ) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            url_validity,
        }
    }

    fn presigning(&self) -> Result<PresigningConfig, StoreError> {
        PresigningConfig::builder()
            .expires_in(self.url_validity)
            .build()
            .map_err(|e| StoreError::Backend {
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn sign_download(&self, key: &str) -> Result<SignedUrl, StoreError> {
        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(self.presigning()?)
            .await
            .map_err(|e| StoreError::Sign {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        Ok(SignedUrl {
            href: presigned.uri().to_string(),
            expires_in: self.url_validity.as_secs(),
        })
    }

    async fn sign_upload(&self, key: &str) -> Result<SignedUrl, StoreError> {
        let presigned = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type("application/octet-stream")
            .presigned(self.presigning()?)
            .await
            .map_err(|e| StoreError::Sign {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        Ok(SignedUrl {
            href: presigned.uri().to_string(),
            expires_in: self.url_validity.as_secs(),
        })
    }

    async fn list_page(&self, continuation: Option<&str>) -> Result<KeyPage, StoreError> {
        let mut request = self.client.list_objects_v2().bucket(&self.bucket);
        if let Some(token) = continuation {
            request = request.continuation_token(token);
        }

        let output = request.send().await.map_err(|e| StoreError::Backend {
            message: e.to_string(),
        })?;

        let keys: Vec<String> = output
            .contents()
            .iter()
            .filter_map(|object| object.key().map(str::to_owned))
            .collect();
        debug!(count = keys.len(), "listed page of object keys");

        Ok(KeyPage {
            keys,
            next: output.next_continuation_token().map(str::to_owned),
        })
    }

    async fn delete_keys(&self, keys: &[String]) -> Result<(), StoreError> {
        let objects = keys
            .iter()
            .map(|key| ObjectIdentifier::builder().key(key).build())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::Backend {
                message: e.to_string(),
            })?;
        let delete = Delete::builder()
            .set_objects(Some(objects))
            .build()
            .map_err(|e| StoreError::Backend {
                message: e.to_string(),
            })?;

        let output = self
            .client
            .delete_objects()
            .bucket(&self.bucket)
            .delete(delete)
            .send()
            .await
            .map_err(|e| StoreError::Backend {
                message: e.to_string(),
            })?;

        // DeleteObjects can succeed as a request while rejecting
        // individual keys; surface that as a failure too.
        if let Some(error) = output.errors().first() {
            return Err(StoreError::Backend {
                message: format!(
                    "bulk delete rejected key {:?}: {}",
                    error.key().unwrap_or("<unknown>"),
                    error.message().unwrap_or("no cause given"),
                ),
            });
        }

        debug!(count = keys.len(), "deleted page of objects");
        Ok(())
    }

    async fn probe(&self) -> Result<(), StoreError> {
        self.client
            .list_objects_v2()
            .bucket(&self.bucket)
            .max_keys(1)
            .send()
            .await
            .map_err(|e| StoreError::Backend {
                message: e.to_string(),
            })?;
        Ok(())
    }
}
