//! Collector configuration loading from file and environment variables.

use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use thiserror::Error;

/// Top-level collector configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// TCP ingestion listener settings.
    #[serde(default)]
    pub listener: ListenerConfig,

    /// Bounded queue settings.
    #[serde(default)]
    pub queue: QueueConfig,

    /// Worker pool settings.
    #[serde(default)]
    pub workers: WorkersConfig,

    /// Store forwarding settings.
    #[serde(default)]
    pub forward: ForwardConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Network configuration for the TCP line listener.
#[derive(Debug, Clone, Deserialize)]
pub struct ListenerConfig {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to listen on for producer connections.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Bounded queue configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct QueueConfig {
    /// Maximum number of raw lines buffered between listener and workers.
    /// Lines offered to a full queue are dropped.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

/// Worker pool configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkersConfig {
    /// Number of concurrent classify-and-forward workers.
    #[serde(default = "default_worker_count")]
    pub count: usize,
}

/// Store forwarding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ForwardConfig {
    /// Base URL of the log server; events go to `{base_url}/ingest`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "logsift_collector=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0))
}

fn default_port() -> u16 {
    9000
}

fn default_capacity() -> usize {
    1000
}

fn default_worker_count() -> usize {
    4
}

fn default_base_url() -> String {
    "http://127.0.0.1:8082".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl Default for WorkersConfig {
    fn default() -> Self {
        Self {
            count: default_worker_count(),
        }
    }
}

impl Default for ForwardConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `LOGSIFT_COLLECTOR_HOST` overrides `listener.host`
/// - `LOGSIFT_COLLECTOR_PORT` overrides `listener.port`
/// - `LOGSIFT_COLLECTOR_QUEUE_CAPACITY` overrides `queue.capacity`
/// - `LOGSIFT_COLLECTOR_WORKERS` overrides `workers.count`
/// - `LOGSIFT_COLLECTOR_FORWARD_URL` overrides `forward.base_url`
/// - `LOGSIFT_COLLECTOR_LOG_LEVEL` overrides `logging.level`
/// - `LOGSIFT_COLLECTOR_LOG_JSON` overrides `logging.json` (set to "true" to enable)
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    // Environment variable overrides
    if let Ok(host) = std::env::var("LOGSIFT_COLLECTOR_HOST") {
        if let Ok(parsed) = host.parse() {
            config.listener.host = parsed;
        }
    }
    if let Ok(port) = std::env::var("LOGSIFT_COLLECTOR_PORT") {
        if let Ok(parsed) = port.parse() {
            config.listener.port = parsed;
        }
    }
    if let Ok(capacity) = std::env::var("LOGSIFT_COLLECTOR_QUEUE_CAPACITY") {
        if let Ok(parsed) = capacity.parse() {
            config.queue.capacity = parsed;
        }
    }
    if let Ok(count) = std::env::var("LOGSIFT_COLLECTOR_WORKERS") {
        if let Ok(parsed) = count.parse() {
            config.workers.count = parsed;
        }
    }
    if let Ok(url) = std::env::var("LOGSIFT_COLLECTOR_FORWARD_URL") {
        config.forward.base_url = url;
    }
    if let Ok(level) = std::env::var("LOGSIFT_COLLECTOR_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Ok(json) = std::env::var("LOGSIFT_COLLECTOR_LOG_JSON") {
        config.logging.json = json == "true" || json == "1";
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_deployment() {
        let config = Config::default();
        assert_eq!(config.listener.port, 9000);
        assert_eq!(config.queue.capacity, 1000);
        assert_eq!(config.workers.count, 4);
        assert_eq!(config.forward.base_url, "http://127.0.0.1:8082");
    }

    #[test]
    fn partial_file_keeps_defaults_for_omitted_sections() {
        let config: Config = toml::from_str(
            r#"
            [queue]
            capacity = 16

            [forward]
            base_url = "http://store:8082"
            "#,
        )
        .unwrap();

        assert_eq!(config.queue.capacity, 16);
        assert_eq!(config.forward.base_url, "http://store:8082");
        assert_eq!(config.listener.port, 9000);
        assert_eq!(config.workers.count, 4);
    }
}
