//! Discovery HTTP server
//!
//! Accepts connections and serves each over HTTP/1.1, delegating every
//! request to the stateless responder with a shared read-only registry.

use anyhow::Result;
use http::Request;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use super::responder;
use crate::registry::Registry;

/// Discovery HTTP server
pub struct DiscoveryServer {
    addr: SocketAddr,
    registry: Arc<Registry>,
}

impl DiscoveryServer {
    /// Create a new discovery server
    pub fn new(addr: SocketAddr, registry: Arc<Registry>) -> Self {
        Self { addr, registry }
    }

    /// Bind the configured address and serve until the task is dropped
    pub async fn start(&self) -> Result<()> {
        let listener = TcpListener::bind(self.addr).await?;
        self.serve(listener).await
    }

    /// Serve connections from an already-bound listener
    ///
    /// Split from [`start`](Self::start) so tests can bind to port 0 and
    /// read the local address before serving.
    pub async fn serve(&self, listener: TcpListener) -> Result<()> {
        info!("discovery server listening on {}", listener.local_addr()?);

        loop {
            match listener.accept().await {
                Ok((stream, peer)) => {
                    debug!("new connection from {}", peer);
                    let registry = Arc::clone(&self.registry);
                    tokio::spawn(async move {
                        let io = TokioIo::new(stream);
                        let service = service_fn(move |req: Request<Incoming>| {
                            let registry = Arc::clone(&registry);
                            async move { Ok::<_, Infallible>(responder::respond(&registry, &req)) }
                        });

                        if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                            debug!("connection from {} closed with error: {}", peer, e);
                        }
                    });
                }
                Err(e) => {
                    error!("failed to accept connection: {}", e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
        let server = DiscoveryServer::new(addr, Arc::new(Registry::default()));
        assert_eq!(server.addr, addr);
    }
}
