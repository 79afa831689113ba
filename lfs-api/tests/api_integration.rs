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

//! API Integration Tests
//!
//! Tests the gateway's HTTP surface using in-process requests against a
//! scripted store double. No actual network I/O - uses
//! tower::ServiceExt::oneshot directly.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use lfs_api::{create_router, AppState};
use lfs_core::{KeyPage, ObjectStore, SignedUrl, StoreError};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Store double: signs deterministic URLs, serves scripted listing
/// pages, and records every call.
#[derive(Default)]
struct MockStore {
    /// Signing calls accepted before failing; `None` never fails.
    fail_signing_after: Option<usize>,
    /// When true, every backend call fails.
    unreachable: bool,
    /// Scripted listing pages; page N links to N+1 via token "page-N+1".
    pages: Vec<Vec<String>>,
    sign_calls: AtomicUsize,
    deleted_pages: Mutex<Vec<Vec<String>>>,
}

impl MockStore {
    fn healthy() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn unreachable() -> Arc<Self> {
        Arc::new(Self {
            unreachable: true,
            ..Default::default()
        })
    }

    fn failing_signing_after(calls: usize) -> Arc<Self> {
        Arc::new(Self {
            fail_signing_after: Some(calls),
            ..Default::default()
        })
    }

    fn with_pages(pages: Vec<Vec<String>>) -> Arc<Self> {
        Arc::new(Self {
            pages,
            ..Default::default()
        })
    }

    fn refused() -> StoreError {
        StoreError::Backend {
            message: "connection refused".to_string(),
        }
    }

    fn sign(&self, verb: &str, key: &str) -> Result<SignedUrl, StoreError> {
        let call = self.sign_calls.fetch_add(1, Ordering::SeqCst);
        if self.unreachable || self.fail_signing_after.is_some_and(|n| call >= n) {
            return Err(Self::refused());
        }
        Ok(SignedUrl {
            href: format!("https://signed.example/{verb}/{key}"),
            expires_in: 3600,
        })
    }
}

#[async_trait]
impl ObjectStore for MockStore {
    async fn sign_download(&self, key: &str) -> Result<SignedUrl, StoreError> {
        self.sign("download", key)
    }

    async fn sign_upload(&self, key: &str) -> Result<SignedUrl, StoreError> {
        self.sign("upload", key)
    }

    async fn list_page(&self, continuation: Option<&str>) -> Result<KeyPage, StoreError> {
        if self.unreachable {
            return Err(Self::refused());
        }
        let index: usize = continuation
            .and_then(|t| t.strip_prefix("page-"))
            .and_then(|n| n.parse().ok())
            .unwrap_or(0);
        let keys = self.pages.get(index).cloned().unwrap_or_default();
        let next = (index + 1 < self.pages.len()).then(|| format!("page-{}", index + 1));
        Ok(KeyPage { keys, next })
    }

    async fn delete_keys(&self, keys: &[String]) -> Result<(), StoreError> {
        if self.unreachable {
            return Err(Self::refused());
        }
        self.deleted_pages.lock().unwrap().push(keys.to_vec());
        Ok(())
    }

    async fn probe(&self) -> Result<(), StoreError> {
        if self.unreachable {
            return Err(Self::refused());
        }
        Ok(())
    }
}

fn app(store: Arc<MockStore>) -> Router {
    create_router(AppState::new(store))
}

fn batch_request(scope: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/{scope}/objects/batch"))
        .header(header::CONTENT_TYPE, "application/vnd.git-lfs+json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn response_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ============================================================================
// Batch API Tests
// ============================================================================

#[tokio::test]
async fn download_batch_preserves_order_and_signs_each_object() {
    let store = MockStore::healthy();
    let app = app(store.clone());

    let response = app
        .oneshot(batch_request(
            "acme/widgets",
            json!({
                "operation": "download",
                "transfers": ["basic"],
                "ref": { "name": "refs/heads/main" },
                "objects": [
                    { "oid": "aaa111", "size": 10 },
                    { "oid": "bbb222", "size": 20 },
                    { "oid": "ccc333", "size": 30 }
                ]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/vnd.git-lfs+json"
    );

    let body = response_json(response).await;
    assert_eq!(body["transfer"], "basic");
    let objects = body["objects"].as_array().unwrap();
    assert_eq!(objects.len(), 3);
    for (entry, (oid, size)) in objects
        .iter()
        .zip([("aaa111", 10), ("bbb222", 20), ("ccc333", 30)])
    {
        assert_eq!(entry["oid"], oid);
        assert_eq!(entry["size"], size);
        assert_eq!(
            entry["actions"]["download"]["href"],
            format!("https://signed.example/download/acme/widgets/objects/{oid}")
        );
        assert_eq!(entry["actions"]["download"]["expires_in"], 3600);
        assert!(entry["actions"].get("upload").is_none());
    }
    assert_eq!(store.sign_calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn upload_batch_populates_only_the_upload_action() {
    let store = MockStore::healthy();
    let app = app(store.clone());

    let response = app
        .oneshot(batch_request(
            "acme/widgets",
            json!({
                "operation": "upload",
                "objects": [{ "oid": "aaa111", "size": 10 }]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let entry = &body["objects"][0];
    assert_eq!(
        entry["actions"]["upload"]["href"],
        "https://signed.example/upload/acme/widgets/objects/aaa111"
    );
    assert!(entry["actions"].get("download").is_none());
    assert_eq!(store.sign_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn empty_object_list_yields_an_empty_response() {
    let app = app(MockStore::healthy());

    let response = app
        .oneshot(batch_request(
            "acme/widgets",
            json!({ "operation": "download", "objects": [] }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["transfer"], "basic");
    assert_eq!(body["objects"], json!([]));
}

#[tokio::test]
async fn batch_echoes_the_requested_hash_algo() {
    let app = app(MockStore::healthy());

    let response = app
        .oneshot(batch_request(
            "acme/widgets",
            json!({
                "operation": "download",
                "objects": [],
                "hash_algo": "sha256"
            }),
        ))
        .await
        .unwrap();

    let body = response_json(response).await;
    assert_eq!(body["hash_algo"], "sha256");
}

#[tokio::test]
async fn unknown_operation_is_rejected_without_signing() {
    let store = MockStore::healthy();
    let app = app(store.clone());

    let response = app
        .oneshot(batch_request(
            "acme/widgets",
            json!({
                "operation": "move",
                "objects": [{ "oid": "aaa111", "size": 10 }]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("move"));
    assert!(body["request_id"].is_string());
    assert_eq!(store.sign_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unsafe_repository_scope_is_rejected_without_signing() {
    let store = MockStore::healthy();
    let app = app(store.clone());

    let response = app
        .oneshot(batch_request(
            "acme!corp/widgets",
            json!({
                "operation": "download",
                "objects": [{ "oid": "aaa111", "size": 10 }]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.sign_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn signing_failure_fails_the_whole_batch() {
    // The third signing call fails; no partial objects may leak out.
    let store = MockStore::failing_signing_after(2);
    let app = app(store.clone());

    let response = app
        .oneshot(batch_request(
            "acme/widgets",
            json!({
                "operation": "download",
                "objects": [
                    { "oid": "aaa111", "size": 10 },
                    { "oid": "bbb222", "size": 20 },
                    { "oid": "ccc333", "size": 30 }
                ]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert!(body.get("objects").is_none());
    // The backend cause stays in the logs, not the body.
    assert_eq!(body["message"], "Internal Server Error");
}

// ============================================================================
// Administrative Operations Tests
// ============================================================================

#[tokio::test]
async fn list_objects_drains_every_page() {
    let store = MockStore::with_pages(vec![
        vec!["acme/widgets/objects/a".to_string(), "acme/widgets/objects/b".to_string()],
        vec!["acme/gears/objects/c".to_string()],
    ]);
    let app = app(store);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/list-objects")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(
        body["objectKeys"],
        json!([
            "acme/widgets/objects/a",
            "acme/widgets/objects/b",
            "acme/gears/objects/c"
        ])
    );
}

#[tokio::test]
async fn list_objects_reports_backend_failure() {
    let app = app(MockStore::unreachable());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/list-objects")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn delete_all_objects_deletes_page_by_page() {
    let store = MockStore::with_pages(vec![
        vec!["k1".to_string(), "k2".to_string()],
        vec![],
        vec!["k3".to_string()],
    ]);
    let app = app(store.clone());

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/delete-all-objects")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response_text(response).await,
        "All objects deleted successfully."
    );
    assert_eq!(
        *store.deleted_pages.lock().unwrap(),
        vec![
            vec!["k1".to_string(), "k2".to_string()],
            vec!["k3".to_string()]
        ]
    );
}

#[tokio::test]
async fn delete_all_objects_reports_backend_failure() {
    let app = app(MockStore::unreachable());

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/delete-all-objects")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn health_is_ok_even_when_the_backend_is_down() {
    let app = app(MockStore::unreachable());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, json!({ "status": "ok" }));
}
