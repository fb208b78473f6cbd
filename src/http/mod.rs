//! HTTP interface for vanityd
//!
//! This module provides the hyper connection loop, the stateless discovery
//! responder, and the manager that ties server lifetime to a shutdown
//! channel.

pub mod responder;
pub mod server;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};

use self::server::DiscoveryServer;
use crate::registry::Registry;

/// HTTP manager that owns the discovery server lifecycle
///
/// The registry is handed in at wiring time and shared read-only with every
/// connection task; there is no ambient global state.
pub struct HttpManager {
    server_addr: SocketAddr,
    registry: Arc<Registry>,
    shutdown_tx: mpsc::UnboundedSender<()>,
    shutdown_rx: Option<mpsc::UnboundedReceiver<()>>,
}

impl HttpManager {
    /// Create a new HTTP manager
    pub fn new(server_addr: SocketAddr, registry: Arc<Registry>) -> Self {
        let (shutdown_tx, shutdown_rx) = mpsc::unbounded_channel();
        Self {
            server_addr,
            registry,
            shutdown_tx,
            shutdown_rx: Some(shutdown_rx),
        }
    }

    /// Handle that requests shutdown when sent to
    pub fn shutdown_handle(&self) -> mpsc::UnboundedSender<()> {
        self.shutdown_tx.clone()
    }

    /// Start the server and block until shutdown is requested
    pub async fn start(&mut self) -> Result<()> {
        info!("starting discovery server on {}", self.server_addr);

        let mut shutdown_rx = self
            .shutdown_rx
            .take()
            .ok_or_else(|| anyhow::anyhow!("discovery server already started"))?;

        let server = DiscoveryServer::new(self.server_addr, Arc::clone(&self.registry));
        let handle = tokio::spawn(async move {
            if let Err(e) = server.start().await {
                error!("discovery server error: {}", e);
            }
        });

        shutdown_rx.recv().await;

        handle.abort();
        info!("discovery server stopped");
        Ok(())
    }

    /// Request shutdown
    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_start_returns_after_stop() {
        let registry = Arc::new(Registry::default());
        let mut manager = HttpManager::new("127.0.0.1:0".parse().unwrap(), registry);

        // Shutdown queued before start: start binds, observes it, returns.
        manager.stop();
        manager.start().await.unwrap();
    }

    #[tokio::test]
    async fn test_start_twice_fails() {
        let registry = Arc::new(Registry::default());
        let mut manager = HttpManager::new("127.0.0.1:0".parse().unwrap(), registry);

        manager.stop();
        manager.start().await.unwrap();
        assert!(manager.start().await.is_err());
    }
}
