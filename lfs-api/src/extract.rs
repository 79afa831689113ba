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

//! Request extractors.

use async_trait::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::LfsError;

/// JSON extractor for LFS request bodies.
///
/// git-lfs clients send `application/vnd.git-lfs+json`, which the stock
/// [`axum::Json`] extractor rejects, so the body is parsed from raw
/// bytes regardless of content type. Any decoding failure becomes a
/// structured 400 before handler logic runs; an unsupported `operation`
/// therefore never reaches the signer.
pub struct LfsJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for LfsJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = LfsError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| LfsError::InvalidRequest(e.to_string()))?;
        let value = serde_json::from_slice(&bytes)
            .map_err(|e| LfsError::InvalidRequest(format!("invalid batch request: {e}")))?;
        Ok(LfsJson(value))
    }
}
