//! # Client Configuration

use serde::{Deserialize, Serialize};

/// Validity client configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Connection establishment timeout in milliseconds.
    pub connect_timeout_ms: u64,

    /// Timeout for each read from the authority in milliseconds.
    pub read_timeout_ms: u64,

    /// Maximum proof fetches in flight at once.
    pub max_in_flight: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: 3_000,
            read_timeout_ms: 5_000,
            max_in_flight: 32,
        }
    }
}

impl ClientConfig {
    /// Create a config for testing (tight timeouts, small fan-out).
    pub fn for_testing() -> Self {
        Self {
            connect_timeout_ms: 500,
            read_timeout_ms: 500,
            max_in_flight: 4,
        }
    }
}
