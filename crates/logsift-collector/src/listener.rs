//! The TCP ingestion listener.
//!
//! Accepts long-lived connections from log producers and reads
//! newline-delimited text. Every line goes to the queue via a non-blocking
//! `offer`; nothing is ever written back to the producer. Connections are
//! independent: an I/O error ends one connection's task, never the accept
//! loop.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::watch;

use crate::queue::LineQueue;

/// Runs the accept loop until the shutdown signal fires.
///
/// Each accepted connection gets its own task; the queue producer handle is
/// cloned per connection, so the queue shuts down once this function
/// returns and every connection task has finished.
pub async fn run_listener(
    listener: TcpListener,
    queue: LineQueue,
    mut shutdown: watch::Receiver<bool>,
) {
    loop {
        tokio::select! {
            _ = shutdown.changed() => {
                tracing::info!("listener shutting down, no longer accepting connections");
                break;
            }
            accepted = listener.accept() => match accepted {
                Ok((stream, peer)) => {
                    tracing::info!(%peer, "producer connected");
                    tokio::spawn(handle_connection(
                        stream,
                        queue.clone(),
                        shutdown.clone(),
                    ));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to accept connection");
                }
            },
        }
    }
}

/// Reads lines from one producer until it disconnects or shutdown fires.
async fn handle_connection(
    stream: TcpStream,
    queue: LineQueue,
    mut shutdown: watch::Receiver<bool>,
) {
    let peer = stream
        .peer_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|_| "<unknown>".to_string());
    let mut lines = BufReader::new(stream).lines();

    loop {
        tokio::select! {
            _ = shutdown.changed() => break,
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    if !queue.offer(line) {
                        tracing::warn!(
                            peer = %peer,
                            dropped_total = queue.dropped(),
                            "queue full, dropping log line"
                        );
                    }
                }
                Ok(None) => {
                    tracing::info!(peer = %peer, "producer disconnected");
                    break;
                }
                Err(e) => {
                    tracing::warn!(peer = %peer, error = %e, "read error, closing connection");
                    break;
                }
            },
        }
    }
}
