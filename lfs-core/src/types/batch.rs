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

//! Git LFS batch API types.
//!
//! Request and response models for the batch endpoint, following
//! <https://github.com/git-lfs/git-lfs/blob/main/docs/api/batch.md>.
//! Requests are read-only once deserialized; responses are assembled one
//! entry per requested object, in request order.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The only transfer adapter this gateway offers.
pub const TRANSFER_BASIC: &str = "basic";

/// The requested batch operation.
///
/// Decoded at the request boundary; any other value fails
/// deserialization, so handlers never see an unsupported operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Download,
    Upload,
}

/// A single object named in a batch request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ObjectSpec {
    /// Content-addressed object identifier.
    pub oid: String,
    /// Size in bytes as claimed by the client. Never verified against
    /// the stored content.
    pub size: u64,
}

/// Ref context sent by the client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GitRef {
    /// Fully-qualified ref name, e.g. `refs/heads/main`.
    pub name: String,
}

/// Batch request body. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub operation: Operation,
    /// Transfer adapters the client supports. Parsed but not negotiated;
    /// the response always answers `basic`.
    #[serde(default)]
    pub transfers: Vec<String>,
    #[serde(default, rename = "ref")]
    pub git_ref: Option<GitRef>,
    pub objects: Vec<ObjectSpec>,
    pub hash_algo: Option<String>,
}

/// Batch response body.
#[derive(Debug, Serialize)]
pub struct BatchResponse {
    /// Always [`TRANSFER_BASIC`].
    pub transfer: &'static str,
    /// One entry per requested object, in request order.
    pub objects: Vec<ObjectActions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_algo: Option<String>,
}

/// Per-object entry in a batch response.
#[derive(Debug, Serialize)]
pub struct ObjectActions {
    pub oid: String,
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authenticated: Option<bool>,
    pub actions: Actions,
}

/// The action set for one object: exactly one of download or upload,
/// matching the request operation.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Actions {
    Download { download: Action },
    Upload { upload: Action },
}

impl Actions {
    /// Wraps a download action.
    pub fn download(action: Action) -> Self {
        Actions::Download { download: action }
    }

    /// Wraps an upload action.
    pub fn upload(action: Action) -> Self {
        Actions::Upload { upload: action }
    }
}

/// A single transfer action: a pre-signed URL plus its validity.
#[derive(Debug, Serialize)]
pub struct Action {
    /// The signed URL. Only usable for the one operation and object key
    /// it was signed for, and only until expiry.
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Action {
    /// An action carrying a signed URL and its validity window.
    pub fn signed(href: String, expires_in: u64) -> Self {
        Self {
            href,
            header: None,
            expires_in: Some(expires_in),
            expires_at: None,
        }
    }
}
