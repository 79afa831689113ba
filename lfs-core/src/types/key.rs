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

//! Object key derivation.
//!
//! Maps `(organization, repository, oid)` to a storage key. The mapping
//! is pure and deterministic; the `{org}/{repo}/objects/` prefix keeps
//! keys from distinct repository scopes disjoint.

use thiserror::Error;

/// Errors from object key derivation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Organization or repository segment is empty or contains
    /// characters outside the path-safe set.
    #[error("invalid {segment} name: {value:?}")]
    InvalidSegment {
        /// Which scope segment was rejected.
        segment: &'static str,
        /// The rejected value.
        value: String,
    },

    /// Object id is empty or contains a path separator.
    #[error("invalid object id: {value:?}")]
    InvalidOid {
        /// The rejected value.
        value: String,
    },
}

/// Derives the storage key for an object within a repository scope.
///
/// The same triple always yields the same key, and distinct oids within
/// a scope yield distinct keys. Scope segments must be non-empty
/// path-safe tokens (ASCII alphanumerics, `-`, `_`, `.`), so no two
/// repository scopes can ever resolve to the same key prefix.
pub fn object_key(organization: &str, repository: &str, oid: &str) -> Result<String, KeyError> {
    check_segment("organization", organization)?;
    check_segment("repository", repository)?;
    if oid.is_empty() || oid.contains('/') {
        return Err(KeyError::InvalidOid {
            value: oid.to_string(),
        });
    }
    Ok(format!("{organization}/{repository}/objects/{oid}"))
}

fn check_segment(segment: &'static str, value: &str) -> Result<(), KeyError> {
    let path_safe = !value.is_empty()
        && value != "."
        && value != ".."
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if path_safe {
        Ok(())
    } else {
        Err(KeyError::InvalidSegment {
            segment,
            value: value.to_string(),
        })
    }
}
