//! # Authority Binary
//!
//! Loads the tree source, builds the proof service, advertises the
//! root, and serves proof requests until interrupted.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mv_authority::{AuthorityConfig, ProofServer, ProofService};
use shared_types::encode_hash;

/// Authority proof server for the Merkle validity protocol.
#[derive(Parser, Debug)]
#[command(name = "mv-authority")]
#[command(about = "Serves Merkle sibling paths for known transactions")]
struct Args {
    /// Port to listen on.
    #[arg(short, long, default_value_t = mv_authority::config::DEFAULT_PORT)]
    port: u16,

    /// Tree source: a text file with one transaction id per line.
    /// Leaf order is file order.
    #[arg(short, long)]
    tree_file: String,

    /// Maximum connections serviced concurrently.
    #[arg(long, default_value_t = 64)]
    max_connections: usize,

    /// Per-connection read timeout in milliseconds.
    #[arg(long, default_value_t = 5000)]
    read_timeout_ms: u64,
}

/// Parse the tree source file into an ordered transaction list.
fn load_tree_source(path: &str) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read tree file {path:?}"))?;

    let transactions: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    Ok(transactions)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let transactions = load_tree_source(&args.tree_file)?;
    info!(count = transactions.len(), "Tree source loaded");

    let service =
        Arc::new(ProofService::new(transactions).context("Failed to build authority tree")?);
    info!(root = %encode_hash(&service.root()), "Authority tree built");

    let config = AuthorityConfig {
        port: args.port,
        max_connections: args.max_connections,
        read_timeout_ms: args.read_timeout_ms,
        ..AuthorityConfig::default()
    };

    let server = ProofServer::new(service, config);
    let listener = server.bind().await.context("Failed to bind listening port")?;

    tokio::select! {
        _ = server.serve(listener) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    Ok(())
}
