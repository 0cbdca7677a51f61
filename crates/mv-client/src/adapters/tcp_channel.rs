//! # TCP Proof Channel
//!
//! One-shot, half-duplex proof fetch over TCP.
//!
//! Each call opens its own connection, writes one transaction-id line,
//! shuts down its write side, reads sibling-token lines until the
//! authority closes the stream, and tears the connection down. The
//! socket is owned by the call, so every exit path — success, timeout,
//! parse failure — ends with it closed.

use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

use shared_types::wire::{parse_response_line, ResponseLine};
use shared_types::ProofResponse;

use crate::config::ClientConfig;
use crate::domain::ClientError;
use crate::ports::ProofFetcher;

/// TCP implementation of the proof channel.
pub struct TcpProofChannel {
    host: String,
    port: u16,
    connect_timeout: Duration,
    read_timeout: Duration,
}

impl TcpProofChannel {
    /// Create a channel to the given authority endpoint.
    pub fn new(host: impl Into<String>, port: u16, config: &ClientConfig) -> Self {
        Self {
            host: host.into(),
            port,
            connect_timeout: Duration::from_millis(config.connect_timeout_ms),
            read_timeout: Duration::from_millis(config.read_timeout_ms),
        }
    }

    fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[async_trait]
impl ProofFetcher for TcpProofChannel {
    async fn fetch_proof(&self, transaction: &str) -> Result<ProofResponse, ClientError> {
        if transaction.contains('\n') || transaction.contains('\r') {
            return Err(ClientError::Protocol(
                "transaction identifier contains a line break".to_string(),
            ));
        }

        let addr = self.addr();
        let stream = timeout(self.connect_timeout, TcpStream::connect(&addr))
            .await
            .map_err(|_| ClientError::Connection(format!("connect to {addr} timed out")))?
            .map_err(|e| ClientError::Connection(format!("connect to {addr} failed: {e}")))?;

        let (read_half, mut write_half) = stream.into_split();

        let request = format!("{transaction}\n");
        write_half
            .write_all(request.as_bytes())
            .await
            .map_err(|e| ClientError::Connection(format!("send to {addr} failed: {e}")))?;
        // Half-duplex: nothing more to say, signal it.
        write_half
            .shutdown()
            .await
            .map_err(|e| ClientError::Connection(format!("shutdown to {addr} failed: {e}")))?;

        let mut lines = BufReader::new(read_half).lines();
        let mut path = Vec::new();
        let mut not_found = false;

        loop {
            let line = timeout(self.read_timeout, lines.next_line())
                .await
                .map_err(|_| ClientError::Connection(format!("read from {addr} timed out")))?
                .map_err(|e| ClientError::Connection(format!("read from {addr} failed: {e}")))?;

            let Some(line) = line else {
                // Peer closed its write side: end of path.
                break;
            };

            if not_found {
                return Err(ClientError::Protocol(
                    "data after NOT_FOUND".to_string(),
                ));
            }

            match parse_response_line(&line) {
                Ok(ResponseLine::Step(step)) => path.push(step),
                Ok(ResponseLine::NotFound) if path.is_empty() => not_found = true,
                Ok(ResponseLine::NotFound) => {
                    return Err(ClientError::Protocol(
                        "NOT_FOUND after proof lines".to_string(),
                    ));
                }
                Err(e) => return Err(ClientError::Protocol(e.to_string())),
            }
        }

        debug!(transaction, steps = path.len(), not_found, "Proof exchange complete");

        if not_found {
            Ok(ProofResponse::NotFound)
        } else {
            Ok(ProofResponse::Path(path))
        }
    }

    fn endpoint(&self) -> String {
        self.addr()
    }
}
