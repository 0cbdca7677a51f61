//! # Wire Protocol Tests
//!
//! Drives the authority with a raw TCP socket, asserting on the exact
//! bytes of the line protocol rather than going through the client
//! adapter.

#[cfg(test)]
use std::net::SocketAddr;

#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use mv_authority::{AuthorityConfig, ProofServer, ProofService};

#[cfg(test)]
use tokio::io::{AsyncReadExt, AsyncWriteExt};

#[cfg(test)]
use tokio::net::TcpStream;

#[cfg(test)]
async fn start_authority(transactions: &[&str]) -> (SocketAddr, Arc<ProofService>) {
    let service = Arc::new(
        ProofService::new(transactions.iter().map(|s| s.to_string()).collect())
            .expect("tree source must build"),
    );

    let server = ProofServer::new(Arc::clone(&service), AuthorityConfig::for_testing());
    let listener = server.bind().await.expect("ephemeral bind must succeed");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(server.serve(listener));

    (addr, service)
}

/// One full exchange: send the request line, read everything until the
/// authority closes the connection.
#[cfg(test)]
async fn exchange(addr: SocketAddr, request: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();
    stream.shutdown().await.unwrap();

    let mut body = String::new();
    stream.read_to_string(&mut body).await.unwrap();
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_crypto::{hash_leaf, hash_pair};
    use shared_types::Hash;

    /// Test: each response line is a position prefix plus 64 hex chars
    #[tokio::test]
    async fn test_response_lines_are_prefixed_hex() {
        let (addr, _service) = start_authority(&["tx1", "tx2", "tx3", "tx4"]).await;

        let body = exchange(addr, "tx1\n").await;
        let lines: Vec<&str> = body.lines().collect();

        assert_eq!(lines.len(), 2);
        for line in lines {
            let (prefix, digits) = line.split_at(2);
            assert!(prefix == "L:" || prefix == "R:", "bad prefix in {line}");
            assert_eq!(digits.len(), 64);
            assert!(hex::decode(digits).is_ok(), "not hex: {digits}");
        }
    }

    /// Test: folding the raw wire bytes by hand reproduces the root
    #[tokio::test]
    async fn test_raw_path_folds_to_root() {
        let (addr, service) = start_authority(&["tx1", "tx2", "tx3"]).await;

        let body = exchange(addr, "tx2\n").await;

        let mut current = hash_leaf(b"tx2");
        for line in body.lines() {
            let sibling: Hash = hex::decode(&line[2..])
                .unwrap()
                .try_into()
                .expect("32-byte digest");
            current = match &line[..2] {
                "L:" => hash_pair(&sibling, &current),
                "R:" => hash_pair(&current, &sibling),
                other => panic!("unknown prefix {other}"),
            };
        }

        assert_eq!(current, service.root());
    }

    /// Test: unknown transaction gets exactly one NOT_FOUND line
    #[tokio::test]
    async fn test_unknown_transaction_gets_not_found_line() {
        let (addr, _service) = start_authority(&["tx1"]).await;

        let body = exchange(addr, "ghost\n").await;
        assert_eq!(body, "NOT_FOUND\n");
    }

    /// Test: a request with a trailing \r\n still resolves
    #[tokio::test]
    async fn test_crlf_request_line_is_accepted() {
        let (addr, _service) = start_authority(&["tx1", "tx2"]).await;

        let body = exchange(addr, "tx1\r\n").await;
        assert!(!body.starts_with("NOT_FOUND"), "got: {body}");
        assert!(!body.is_empty());
    }

    /// Test: an empty request line closes with no proof
    #[tokio::test]
    async fn test_empty_request_line_yields_nothing() {
        let (addr, _service) = start_authority(&["tx1"]).await;

        let body = exchange(addr, "\n").await;
        assert!(body.is_empty(), "got: {body}");
    }
}
