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

//! Application initialization and runtime.
//!
//! This module handles:
//! - S3 client construction (region and credential-source selection)
//! - The fail-fast startup connectivity probe
//! - HTTP server setup and graceful shutdown

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use aws_config::BehaviorVersion;
use lfs_api::{create_router, AppState};
use lfs_core::{ObjectStore, S3Store};
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;

/// Main application.
pub struct App {
    config: Config,
    store: Arc<S3Store>,
}

impl App {
    /// Creates the application and verifies the storage backend.
    ///
    /// Builds the S3 client from the configured region and credential
    /// source, then probes the bucket once. An unreachable bucket or
    /// bad credentials refuse startup; this is a precondition, not a
    /// retried operation.
    pub async fn new(config: Config) -> Result<Self> {
        info!("initializing LFS gateway...");

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(aws_config::Region::new(config.storage.region.clone()));
        if let Some(profile) = &config.storage.profile {
            info!(%profile, "loading credentials from shared-config profile");
            loader = loader.profile_name(profile);
        }
        let sdk_config = loader.load().await;
        let client = aws_sdk_s3::Client::new(&sdk_config);

        let store = Arc::new(S3Store::new(
            client,
            config.storage.bucket.clone(),
            Duration::from_secs(config.storage.url_expiry_secs),
        ));

        store.probe().await.with_context(|| {
            format!(
                "cannot reach bucket {:?} with the configured credentials",
                config.storage.bucket
            )
        })?;
        info!(bucket = %config.storage.bucket, "storage backend reachable");

        Ok(Self { config, store })
    }

    /// Runs the HTTP server until shutdown.
    pub async fn run(self) -> Result<()> {
        let router = create_router(AppState::new(self.store));

        let addr: SocketAddr = self
            .config
            .server
            .bind
            .parse()
            .with_context(|| format!("invalid bind address {:?}", self.config.server.bind))?;
        let listener = TcpListener::bind(addr).await?;
        info!("listening on http://{addr}");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("server shutdown complete");
        Ok(())
    }
}

/// Handles graceful shutdown signals.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown...");
        }
    }
}
