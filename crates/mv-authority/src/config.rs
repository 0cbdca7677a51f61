//! # Authority Configuration

use serde::{Deserialize, Serialize};

/// Well-known default listening port.
pub const DEFAULT_PORT: u16 = 2323;

/// Authority server configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthorityConfig {
    /// Port to listen on.
    pub port: u16,

    /// Maximum connections serviced concurrently.
    pub max_connections: usize,

    /// Per-connection read timeout in milliseconds. A client that
    /// connects and never sends its request line is cut off.
    pub read_timeout_ms: u64,

    /// Maximum request line length in bytes. Bounds memory per
    /// connection; anything longer is malformed.
    pub max_request_bytes: u64,
}

impl Default for AuthorityConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            max_connections: 64,
            read_timeout_ms: 5_000,
            max_request_bytes: 4_096,
        }
    }
}

impl AuthorityConfig {
    /// Create a config for testing (ephemeral port, tight timeouts).
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            max_connections: 8,
            read_timeout_ms: 500,
            max_request_bytes: 1_024,
        }
    }
}
