//! HTTP forwarding of classified events to the store.

use logsift_types::LogEvent;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when forwarding an event.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// The request could not be sent or the response not read.
    #[error("ingest request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("ingest returned status {0}")]
    Status(StatusCode),
}

/// Posts classified events to the store's `/ingest` endpoint.
///
/// One shared instance serves the whole worker pool; `reqwest::Client`
/// pools connections internally.
#[derive(Debug, Clone)]
pub struct Forwarder {
    client: reqwest::Client,
    ingest_url: String,
}

impl Forwarder {
    /// Builds a forwarder for the store at `base_url`
    /// (e.g. `http://127.0.0.1:8082`).
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            ingest_url: format!("{}/ingest", base_url.trim_end_matches('/')),
        }
    }

    /// Sends one event, at most once.
    ///
    /// # Errors
    ///
    /// Returns `ForwardError` on transport failure or any non-2xx response.
    /// Callers log and move on; a failed event is not retried.
    pub async fn forward(&self, event: &LogEvent) -> Result<(), ForwardError> {
        let response = self.client.post(&self.ingest_url).json(event).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForwardError::Status(status));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingest_url_joins_without_double_slash() {
        let forwarder = Forwarder::new("http://127.0.0.1:8082/");
        assert_eq!(forwarder.ingest_url, "http://127.0.0.1:8082/ingest");

        let forwarder = Forwarder::new("http://127.0.0.1:8082");
        assert_eq!(forwarder.ingest_url, "http://127.0.0.1:8082/ingest");
    }
}
