//! Simulated log producer.
//!
//! Plays one of two canned profiles (`linux` or `windows`) against the
//! collector's TCP port: every two seconds the next message in the profile
//! is wrapped as `{"message": "..."}` and sent, round-robin. On any send or
//! connect failure the client waits a second and reconnects. The collector
//! never acknowledges lines, so reconnect-with-delay is the whole recovery
//! story.

use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing_subscriber::EnvFilter;

const SEND_INTERVAL: Duration = Duration::from_secs(2);
const RECONNECT_DELAY: Duration = Duration::from_secs(1);

const LINUX_MESSAGES: &[&str] = &[
    // Login audit
    "<86> aiops9242 sudo: pam_unix(sudo:session): session opened for user root(uid=0)",
    // Syslog / logout audit
    "<34> aiops9242 cron: pam_unix(cron:session): session closed for user root",
];

const WINDOWS_MESSAGES: &[&str] = &[
    // Login audit
    "<134> WIN-PC Microsoft-Windows-Security-Auditing: Account Name: admin",
    // Event log
    "<102> WIN-PC Application Error: Application crash detected",
];

fn messages_for(profile: &str) -> Option<&'static [&'static str]> {
    match profile {
        "linux" => Some(LINUX_MESSAGES),
        "windows" => Some(WINDOWS_MESSAGES),
        _ => None,
    }
}

/// Wraps a canned message in the JSON envelope the collector understands.
fn frame(message: &str) -> String {
    let mut line = serde_json::json!({ "message": message }).to_string();
    line.push('\n');
    line
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let profile = std::env::args().nth(1).unwrap_or_default();
    let Some(messages) = messages_for(&profile) else {
        eprintln!("usage: logsift-client <linux|windows>");
        std::process::exit(2);
    };

    let addr = std::env::var("LOGSIFT_COLLECTOR_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:9000".to_string());

    tracing::info!(profile, %addr, "starting log client");

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut index = 0usize;

    'connect: loop {
        let mut stream = tokio::select! {
            _ = &mut ctrl_c => break 'connect,
            connected = TcpStream::connect(&addr) => match connected {
                Ok(stream) => {
                    tracing::info!(%addr, "connected to collector");
                    stream
                }
                Err(e) => {
                    tracing::warn!(error = %e, "unable to connect to collector, will retry");
                    tokio::time::sleep(RECONNECT_DELAY).await;
                    continue 'connect;
                }
            },
        };

        let mut ticker = tokio::time::interval(SEND_INTERVAL);
        loop {
            tokio::select! {
                _ = &mut ctrl_c => break 'connect,
                _ = ticker.tick() => {
                    let line = frame(messages[index % messages.len()]);
                    index += 1;
                    if let Err(e) = stream.write_all(line.as_bytes()).await {
                        tracing::warn!(error = %e, "connection lost, reconnecting");
                        tokio::time::sleep(RECONNECT_DELAY).await;
                        continue 'connect;
                    }
                }
            }
        }
    }

    tracing::info!("shutting down log client");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_wraps_and_terminates_with_newline() {
        let line = frame("hello world");
        assert_eq!(line, "{\"message\":\"hello world\"}\n");
    }

    #[test]
    fn unknown_profile_has_no_messages() {
        assert!(messages_for("macos").is_none());
        assert!(messages_for("linux").is_some());
        assert!(messages_for("windows").is_some());
    }
}
