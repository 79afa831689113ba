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

//! Axum HTTP server setup and routing.

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use lfs_core::ObjectStore;

use crate::handlers;

/// Shared application state for all handlers.
///
/// The store is injected so tests can substitute a double; request
/// handling holds no other state.
#[derive(Clone)]
pub struct AppState {
    /// Storage backend.
    pub store: Arc<dyn ObjectStore>,
}

impl AppState {
    /// Creates state over the given store.
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }
}

/// Creates the router with all gateway endpoints.
///
/// # Routing
///
/// - `POST /{organization}/{repository}/objects/batch` — LFS batch API
/// - `GET /list-objects` — every key in the bucket
/// - `DELETE /delete-all-objects` — bulk wipe, page by page
/// - `GET /health` — liveness, no backend call
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/list-objects", get(handlers::list_objects))
        .route("/delete-all-objects", delete(handlers::delete_all_objects))
        .route(
            "/:organization/:repository/objects/batch",
            post(handlers::batch),
        )
        // Add tracing layer for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
