//! # TCP Proof Server
//!
//! The accept loop and per-connection exchange.
//!
//! Each connection carries exactly one request: read a transaction id
//! line, write the proof path one sibling token per line (or the
//! `NOT_FOUND` flag), close. Closing the write side is the protocol's
//! end-of-path marker, so connections are never reused.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Semaphore;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use shared_types::wire::encode_step;
use shared_types::ProofResponse;

use crate::config::AuthorityConfig;
use crate::domain::AuthorityError;
use crate::service::ProofService;

/// The authority's TCP server: accept loop plus bounded workers.
pub struct ProofServer {
    service: Arc<ProofService>,
    config: AuthorityConfig,
}

impl ProofServer {
    /// Create a server over an already-built proof service.
    pub fn new(service: Arc<ProofService>, config: AuthorityConfig) -> Self {
        Self { service, config }
    }

    /// Bind the listening socket.
    ///
    /// A bind failure is fatal for the process; everything after it is
    /// recoverable per-connection.
    pub async fn bind(&self) -> std::io::Result<TcpListener> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port));
        let listener = TcpListener::bind(addr).await?;
        info!(addr = %listener.local_addr()?, "Authority listening");
        Ok(listener)
    }

    /// Run the accept loop until the surrounding task is cancelled.
    ///
    /// A failure to service one connection closes that connection and
    /// continues accepting others.
    pub async fn serve(self, listener: TcpListener) {
        let limiter = Arc::new(Semaphore::new(self.config.max_connections));

        loop {
            let permit = match limiter.clone().acquire_owned().await {
                Ok(permit) => permit,
                // Semaphore is never closed while we run.
                Err(_) => return,
            };

            let (stream, peer) = match listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!(error = %e, "Accept failed");
                    continue;
                }
            };

            debug!(%peer, "Connection accepted");

            let service = Arc::clone(&self.service);
            let config = self.config.clone();
            tokio::spawn(async move {
                if let Err(e) = handle_connection(stream, service, &config).await {
                    warn!(%peer, error = %e, "Connection failed");
                }
                drop(permit);
            });
        }
    }
}

/// Service one connection: one request line in, one proof path out.
async fn handle_connection(
    stream: TcpStream,
    service: Arc<ProofService>,
    config: &AuthorityConfig,
) -> Result<(), AuthorityError> {
    let (read_half, mut write_half) = stream.into_split();

    // Bound both the wait and the size of the request line.
    let mut reader = BufReader::new(read_half).take(config.max_request_bytes);
    let mut line = String::new();
    let read = timeout(
        Duration::from_millis(config.read_timeout_ms),
        reader.read_line(&mut line),
    )
    .await
    .map_err(|_| AuthorityError::Timeout)??;

    if read == 0 {
        return Err(AuthorityError::MalformedRequest(
            "peer closed before sending a request".to_string(),
        ));
    }
    if !line.ends_with('\n') {
        // Either the peer closed mid-line or the line hit the size cap.
        return Err(AuthorityError::MalformedRequest(
            "request line unterminated or too long".to_string(),
        ));
    }

    let transaction = line.trim_end_matches(['\r', '\n']);
    if transaction.is_empty() {
        return Err(AuthorityError::MalformedRequest(
            "empty transaction identifier".to_string(),
        ));
    }

    let response = service.lookup(transaction)?;
    let body = render_response(&response);
    write_half.write_all(body.as_bytes()).await?;

    // Flush and send FIN: end-of-stream is the path terminator.
    write_half.shutdown().await?;
    Ok(())
}

/// Render a proof response as its wire lines.
fn render_response(response: &ProofResponse) -> String {
    match response {
        ProofResponse::Path(path) => {
            let mut body = String::new();
            for step in path {
                body.push_str(&encode_step(step));
                body.push('\n');
            }
            body
        }
        ProofResponse::NotFound => format!("{}\n", shared_types::NOT_FOUND_LINE),
    }
}
