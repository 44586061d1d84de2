//! Server lifecycle management.

use anyhow::{Context, Result};
use roster_core::{build_schema, PersonStore, RosterContext, ServerConfig};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::routes::{router, AppState};
use crate::schema_file::load_schema_document;
use crate::signals;

/// The Roster HTTP server
pub struct Server {
    config: ServerConfig,
    shutdown_tx: broadcast::Sender<()>,
}

impl Server {
    /// Create a new server instance
    pub fn new(config: ServerConfig) -> Result<Self> {
        if !config.graphql_path.starts_with('/') {
            anyhow::bail!(
                "GraphQL path must start with '/': {}",
                config.graphql_path
            );
        }

        let (shutdown_tx, _) = broadcast::channel(1);

        Ok(Self {
            config,
            shutdown_tx,
        })
    }

    /// Handle that stops a running server when sent to
    pub fn shutdown_handle(&self) -> broadcast::Sender<()> {
        self.shutdown_tx.clone()
    }

    /// Build the router: checks the schema document and creates the store
    pub fn build(&self) -> Result<axum::Router> {
        let schema_path = &self.config.schema_path;
        load_schema_document(schema_path)
            .with_context(|| format!("Invalid schema document {}", schema_path.display()))?;

        let store = if self.config.seed {
            PersonStore::seeded()
        } else {
            PersonStore::new()
        };
        tracing::info!(people = store.len(), "Person store ready");

        let schema = build_schema(RosterContext::with_system_clock(Arc::new(store)));
        let state = AppState::new(
            schema,
            self.config.explorer_page.clone(),
            &self.config.graphql_path,
        );

        Ok(router(state))
    }

    /// Run the server until a shutdown signal arrives
    pub async fn run(&self) -> Result<()> {
        let app = self.build()?;

        let listener = TcpListener::bind(&self.config.bind_addr)
            .await
            .with_context(|| format!("Failed to bind {}", self.config.bind_addr))?;
        self.serve(listener, app).await
    }

    /// Serve `app` on an already bound listener
    pub async fn serve(&self, listener: TcpListener, app: axum::Router) -> Result<()> {
        let addr = listener.local_addr().context("Failed to read local address")?;

        tracing::info!(
            addr = %addr,
            schema = %self.config.schema_path.display(),
            graphql = %self.config.graphql_path,
            "Server starting"
        );
        println!("Listening at http://{}", addr);

        let shutdown_rx = self.shutdown_tx.subscribe();
        axum::serve(listener, app)
            .with_graceful_shutdown(signals::wait_for_shutdown(shutdown_rx))
            .await
            .context("HTTP server error")?;

        tracing::info!("Server stopped");

        Ok(())
    }
}
