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

//! Configuration management for the LFS gateway.

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Default pre-signed URL validity window (one hour).
pub const DEFAULT_URL_EXPIRY_SECS: u64 = 3600;

/// Gateway configuration, read once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Storage backend settings.
    pub storage: StorageConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:3000").
    /// Can be set via the LFS_BIND environment variable.
    pub bind: String,
}

/// Storage backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Target bucket. Required; the gateway refuses to start without it.
    /// Set via the S3_BUCKET environment variable.
    pub bucket: String,
    /// Backend region. AWS_REGION environment variable, default "eu-west-1".
    pub region: String,
    /// Shared-config profile to load credentials from. When absent,
    /// ambient environment credentials are used. AWS_PROFILE.
    pub profile: Option<String>,
    /// Pre-signed URL validity window in seconds.
    /// LFS_URL_EXPIRY_SECS environment variable, default 3600.
    pub url_expiry_secs: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Fails when `S3_BUCKET` is missing or empty; everything else has
    /// a default.
    pub fn load() -> anyhow::Result<Self> {
        let bucket = std::env::var("S3_BUCKET")
            .ok()
            .filter(|b| !b.is_empty())
            .context("S3_BUCKET environment variable is not provided")?;

        Ok(Self {
            server: ServerConfig {
                bind: std::env::var("LFS_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string()),
            },
            storage: StorageConfig {
                bucket,
                region: std::env::var("AWS_REGION").unwrap_or_else(|_| "eu-west-1".to_string()),
                profile: std::env::var("AWS_PROFILE").ok().filter(|p| !p.is_empty()),
                url_expiry_secs: std::env::var("LFS_URL_EXPIRY_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_URL_EXPIRY_SECS),
            },
        })
    }
}
