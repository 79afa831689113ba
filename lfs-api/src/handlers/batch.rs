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

//! Batch endpoint handler.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::info;

use lfs_core::{
    object_key, Action, Actions, BatchRequest, BatchResponse, ObjectActions, Operation,
    TRANSFER_BASIC,
};

use crate::error::{LfsError, LFS_MEDIA_TYPE};
use crate::extract::LfsJson;
use crate::server::AppState;

/// Handles `POST /{organization}/{repository}/objects/batch`.
///
/// Derives a storage key for every requested object, signs a URL for the
/// requested operation, and answers with the `basic` transfer adapter.
/// Response entries preserve request order. A signing failure fails the
/// whole batch; partial responses are never returned.
pub async fn batch(
    State(state): State<AppState>,
    Path((organization, repository)): Path<(String, String)>,
    LfsJson(request): LfsJson<BatchRequest>,
) -> Result<Response, LfsError> {
    info!(
        %organization,
        %repository,
        operation = ?request.operation,
        objects = request.objects.len(),
        "batch request"
    );

    let mut objects = Vec::with_capacity(request.objects.len());
    for object in &request.objects {
        let key = object_key(&organization, &repository, &object.oid)?;
        let actions = match request.operation {
            Operation::Download => {
                let signed = state.store.sign_download(&key).await?;
                Actions::download(Action::signed(signed.href, signed.expires_in))
            }
            Operation::Upload => {
                let signed = state.store.sign_upload(&key).await?;
                Actions::upload(Action::signed(signed.href, signed.expires_in))
            }
        };
        objects.push(ObjectActions {
            oid: object.oid.clone(),
            size: object.size,
            authenticated: None,
            actions,
        });
    }

    let response = BatchResponse {
        transfer: TRANSFER_BASIC,
        objects,
        hash_algo: request.hash_algo,
    };

    Ok(([(header::CONTENT_TYPE, LFS_MEDIA_TYPE)], Json(response)).into_response())
}
