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

//! Error types for the object store.

use thiserror::Error;

/// Errors from the storage backend.
///
/// Both variants represent the backend being unavailable to the gateway:
/// connectivity, credentials, or the SDK refusing to build a request.
/// The messages carry backend detail for server-side logs and must never
/// be echoed to clients.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A signing request for one object key could not be produced.
    #[error("failed to sign URL for {key}: {message}")]
    Sign {
        /// Object key the signing was attempted for.
        key: String,
        /// Backend-reported cause.
        message: String,
    },

    /// A listing, deletion, or connectivity probe failed.
    #[error("storage backend request failed: {message}")]
    Backend {
        /// Backend-reported cause.
        message: String,
    },
}
