//! vanityd binary: load the registry, bind the listener, serve discovery
//! requests until a termination signal arrives.

use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use vanityd::config::DEFAULT_LISTEN_ADDR;
use vanityd::{utils, HttpManager, Registry, ServerConfig};

/// Vanity import resolution server
#[derive(Parser, Debug)]
#[command(name = "vanityd", version, about)]
struct Args {
    /// Server configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Module registry file (overrides the configuration file)
    #[arg(long, value_name = "FILE")]
    registry: Option<PathBuf>,

    /// Listen address (overrides the configuration file)
    #[arg(long, value_name = "ADDR")]
    listen: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ServerConfig::from_json_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => ServerConfig::default(),
    };
    config.validate()?;

    utils::init_logging_from_config(config.logging.as_ref());

    // A missing or malformed registry artifact is fatal: exit before
    // serving rather than answer probes from a partial mapping.
    let registry_path = args
        .registry
        .unwrap_or_else(|| PathBuf::from(&config.registry_path));
    let registry = Registry::load(&registry_path)?;
    info!(
        "loaded {} module mappings from {}",
        registry.len(),
        registry_path.display()
    );

    let listen_addr = args
        .listen
        .or(config.listen_addr)
        .unwrap_or(DEFAULT_LISTEN_ADDR);

    let mut manager = HttpManager::new(listen_addr, Arc::new(registry));
    let shutdown = manager.shutdown_handle();
    tokio::spawn(async move {
        utils::wait_for_shutdown_signal().await;
        let _ = shutdown.send(());
    });

    manager.start().await
}
