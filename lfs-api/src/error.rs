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

//! LFS error types and responses.
//!
//! Maps gateway errors to HTTP statuses with `application/vnd.git-lfs+json`
//! error bodies. Backend causes are logged server-side and never echoed
//! to clients.

use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use lfs_core::{KeyError, StoreError};

/// Media type for every LFS request and response body.
pub const LFS_MEDIA_TYPE: &str = "application/vnd.git-lfs+json";

/// Errors surfaced to LFS clients.
#[derive(Error, Debug)]
pub enum LfsError {
    /// The request body is not a valid batch request: unsupported
    /// operation, malformed JSON, or an object that cannot be mapped to
    /// a storage key.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The storage backend could not complete a signing, listing, or
    /// deletion.
    #[error("storage backend unavailable")]
    Backend(#[from] StoreError),
}

impl LfsError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            LfsError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            LfsError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<KeyError> for LfsError {
    fn from(e: KeyError) -> Self {
        LfsError::InvalidRequest(e.to_string())
    }
}

/// Error body in the shape LFS clients expect.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
    request_id: String,
}

impl IntoResponse for LfsError {
    fn into_response(self) -> Response {
        let request_id = Uuid::new_v4().to_string();
        let message = match &self {
            LfsError::InvalidRequest(message) => message.clone(),
            LfsError::Backend(cause) => {
                tracing::error!(%request_id, "batch request failed: {cause}");
                "Internal Server Error".to_string()
            }
        };
        let body = serde_json::to_vec(&ErrorBody {
            message,
            request_id,
        })
        .unwrap_or_default();

        Response::builder()
            .status(self.status_code())
            .header(header::CONTENT_TYPE, LFS_MEDIA_TYPE)
            .body(Body::from(body))
            .unwrap()
    }
}
