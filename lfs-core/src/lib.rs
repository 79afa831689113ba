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

//! Core types for the LFS gateway.
//!
//! This crate holds everything the HTTP layer builds on:
//! - Git LFS batch protocol models (request/response serde types)
//! - Object key derivation with per-repository namespace isolation
//! - The [`ObjectStore`] abstraction over the storage backend, and its
//!   S3 implementation

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::s3::S3Store;
pub use store::{KeyPage, ObjectStore, SignedUrl};
pub use types::batch::{
    Action, Actions, BatchRequest, BatchResponse, GitRef, ObjectActions, ObjectSpec, Operation,
    TRANSFER_BASIC,
};
pub use types::key::{object_key, KeyError};
