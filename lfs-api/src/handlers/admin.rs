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

//! Administrative handlers: bucket-wide listing, bulk deletion, health.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::json;
use tracing::{error, info};

use lfs_core::{ObjectStore, StoreError};

use crate::server::AppState;

/// Response body for `GET /list-objects`.
#[derive(Debug, Serialize)]
pub struct ListObjectsResponse {
    /// Every key in the bucket, in backend-provided order.
    #[serde(rename = "objectKeys")]
    pub object_keys: Vec<String>,
}

/// Handles `GET /list-objects`.
pub async fn list_objects(State(state): State<AppState>) -> impl IntoResponse {
    match drain_all_keys(state.store.as_ref()).await {
        Ok(object_keys) => Json(ListObjectsResponse { object_keys }).into_response(),
        Err(e) => {
            error!("failed to list objects: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// Handles `DELETE /delete-all-objects`.
pub async fn delete_all_objects(State(state): State<AppState>) -> impl IntoResponse {
    match delete_all(state.store.as_ref()).await {
        Ok(()) => (StatusCode::OK, "All objects deleted successfully.").into_response(),
        Err(e) => {
            error!("failed to delete objects: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// Handles `GET /health`.
///
/// Liveness only: answers without touching the backend.
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Drains the backend's paginated listing into a single key vector.
pub async fn drain_all_keys(store: &dyn ObjectStore) -> Result<Vec<String>, StoreError> {
    let mut keys = Vec::new();
    let mut continuation: Option<String> = None;
    loop {
        let page = store.list_page(continuation.as_deref()).await?;
        keys.extend(page.keys);
        match page.next {
            Some(token) => continuation = Some(token),
            None => break,
        }
    }
    Ok(keys)
}

/// Deletes every object in the bucket, one page at a time.
///
/// Each non-empty page is bulk-deleted before the next page is fetched
/// with that page's token. A page that is empty but still carries a
/// token is skipped without a delete call, and draining continues. A
/// delete failure aborts the remaining pages; earlier pages stay
/// deleted.
pub async fn delete_all(store: &dyn ObjectStore) -> Result<(), StoreError> {
    let mut continuation: Option<String> = None;
    loop {
        let page = store.list_page(continuation.as_deref()).await?;
        if !page.keys.is_empty() {
            info!(count = page.keys.len(), "deleting page of objects");
            store.delete_keys(&page.keys).await?;
        }
        match page.next {
            Some(token) => continuation = Some(token),
            None => break,
        }
    }
    Ok(())
}
