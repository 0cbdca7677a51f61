//! # Client Binary
//!
//! One verification pass from the command line: reads the known root
//! and transaction list, drives the orchestrator, prints one outcome
//! line per transaction. Exit code 0 iff every transaction is valid.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mv_client::{ClientConfig, TcpProofChannel, ValidityRequest, VerificationOutcome};
use shared_types::decode_hash;

/// Validity client for the Merkle proof protocol.
#[derive(Parser, Debug)]
#[command(name = "mv-client")]
#[command(about = "Verifies transaction inclusion against a known Merkle root")]
struct Args {
    /// Authority host.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Authority port.
    #[arg(long, default_value_t = 2323)]
    port: u16,

    /// Known root hash, 64 hex chars, supplied out-of-band.
    #[arg(long)]
    root: String,

    /// Transactions to verify.
    #[arg(value_name = "TRANSACTION")]
    transactions: Vec<String>,

    /// Read transactions from a file instead (one id per line).
    #[arg(long, conflicts_with = "transactions")]
    tx_file: Option<String>,

    /// Connection establishment timeout in milliseconds.
    #[arg(long, default_value_t = 3000)]
    connect_timeout_ms: u64,

    /// Per-read timeout in milliseconds.
    #[arg(long, default_value_t = 5000)]
    read_timeout_ms: u64,

    /// Maximum proof fetches in flight at once.
    #[arg(long, default_value_t = 32)]
    max_in_flight: usize,
}

fn load_transactions(args: &Args) -> Result<Vec<String>> {
    let transactions = match &args.tx_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read transaction file {path:?}"))?
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        None => args.transactions.clone(),
    };

    if transactions.is_empty() {
        bail!("No transactions to verify");
    }
    Ok(transactions)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let known_root = decode_hash(&args.root).context("Invalid --root hash")?;
    let transactions = load_transactions(&args)?;

    let config = ClientConfig {
        connect_timeout_ms: args.connect_timeout_ms,
        read_timeout_ms: args.read_timeout_ms,
        max_in_flight: args.max_in_flight,
    };

    let channel = Arc::new(TcpProofChannel::new(args.host, args.port, &config));
    let session = ValidityRequest::new(config, known_root, transactions, channel);

    let results = session.verify_all().await;

    let mut all_valid = true;
    for (transaction, outcome) in &results {
        match outcome {
            VerificationOutcome::Valid => println!("VALID    {transaction}"),
            VerificationOutcome::Invalid => {
                all_valid = false;
                println!("INVALID  {transaction}");
            }
            VerificationOutcome::Errored(reason) => {
                all_valid = false;
                println!("ERRORED  {transaction}: {reason}");
            }
        }
    }

    if !all_valid {
        std::process::exit(1);
    }
    Ok(())
}
