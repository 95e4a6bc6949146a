//! # BigApp Server
//!
//! Demo host for a BigApp application: the process settings come from `server.toml`, the
//! application itself lives in `src/app` and is assembled by [`app::create`].
//!
//! ## Example
//! ```no_run
//! use bigapp_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(5001)
//!         .build()?
//!         .run()
//!         .await
//! }
//! ```

pub mod app;

use anyhow::{Context, Result};
use axum_server::Handle;
use bigapp::domain::config::HostSettings;
use bigapp::logger::LogSettings;
use bigapp::{AppOptions, AppState};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::signal;
use tracing::{error, info};

/// Contents of `server.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(flatten)]
    pub host: HostSettings,
    #[serde(default)]
    pub logging: LogSettings,
}

#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    settings: Settings,
    instance_path: Option<PathBuf>,
}

impl ServerBuilder {
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.settings.host.server.port = port;
        self
    }

    /// Overrides the `[app]` instance path.
    pub fn instance_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.instance_path = Some(path.into());
        self
    }

    /// Loads the application config and imports everything the application declares.
    ///
    /// # Errors
    /// Returns an error if the config document is missing or malformed, or a template
    /// does not parse.
    pub fn build(self) -> Result<Server> {
        let mut options = AppOptions::from_section(app::PACKAGE, &self.settings.host.app, app::default_root());
        if let Some(path) = self.instance_path {
            options = options.instance_path(path);
        }

        let state = app::create(options).context("Failed to assemble the application")?;
        let report = state.report();
        info!(imported = report.imported.len(), skipped = report.skipped.len(), "Application ready");

        Ok(Server { state, host: self.settings.host })
    }
}

#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: AppState,
    host: HostSettings,
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// Serves the application until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    /// Returns an error if the listener cannot bind the configured address.
    pub async fn run(self) -> Result<()> {
        let address = SocketAddr::new(self.host.server.address, self.host.server.port);
        let router = bigapp::server::router(self.state);

        let handle = Handle::<SocketAddr>::new();
        let shutdown_handle = handle.clone();

        tokio::spawn(async move {
            if let Err(e) = shutdown_signal().await {
                error!("Error while waiting for shutdown signal: {e}");
                return;
            }
            info!("Shutdown signal received, starting graceful shutdown...");
            shutdown_handle.graceful_shutdown(Some(std::time::Duration::from_secs(30)));
        });

        info!("Starting HTTP server on http://{address}");
        axum_server::bind(address)
            .handle(handle)
            .serve(router.into_make_service())
            .await
            .context("HTTP server failed")?;

        info!("Server shutdown complete");
        Ok(())
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }
}

/// Waits for SIGINT (Ctrl+C) or SIGTERM.
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => {
            res.context("Ctrl+C signal received")?;
        },
        res = terminate => {
            res.context("SIGTERM signal received")?;
        },
    }

    Ok(())
}
