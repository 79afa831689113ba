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

//! Object store trait and implementation.

pub mod s3;

use async_trait::async_trait;

use crate::error::StoreError;

/// One page of a key listing.
#[derive(Debug, Clone, Default)]
pub struct KeyPage {
    /// Keys in backend-provided order.
    pub keys: Vec<String>,
    /// Opaque cursor for the next page; absent on the last page. A page
    /// may be empty while a cursor is still present.
    pub next: Option<String>,
}

/// A signed URL together with its validity window.
#[derive(Debug, Clone)]
pub struct SignedUrl {
    /// The pre-signed URL.
    pub href: String,
    /// Seconds until the URL expires.
    pub expires_in: u64,
}

/// Storage backend capability consumed by the gateway.
///
/// Implementations must be shareable across concurrent requests. Signing
/// is idempotent and side-effect-free on the backend: no object is
/// created, read, or deleted merely by producing a URL.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Signs a time-limited download URL for `key`.
    ///
    /// Does not check that the object exists; a missing object is only
    /// discovered when the client dereferences the URL.
    async fn sign_download(&self, key: &str) -> Result<SignedUrl, StoreError>;

    /// Signs a time-limited upload URL for `key`, expecting an opaque
    /// `application/octet-stream` body.
    async fn sign_upload(&self, key: &str) -> Result<SignedUrl, StoreError>;

    /// Fetches one page of keys, resuming from `continuation` when given.
    async fn list_page(&self, continuation: Option<&str>) -> Result<KeyPage, StoreError>;

    /// Deletes every key in `keys` in one bulk request.
    async fn delete_keys(&self, keys: &[String]) -> Result<(), StoreError>;

    /// Verifies the backend is reachable with the configured credentials.
    async fn probe(&self) -> Result<(), StoreError>;
}
