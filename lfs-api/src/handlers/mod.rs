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

//! HTTP request handlers for the LFS gateway.
//!
//! This module provides handlers for:
//! - The batch API (POST /{org}/{repo}/objects/batch)
//! - Administrative operations (list-objects, delete-all-objects, health)

pub mod admin;
pub mod batch;

pub use admin::{delete_all_objects, health, list_objects};
pub use batch::batch;
