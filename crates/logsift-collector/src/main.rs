//! Logsift collector binary — the ingestion pipeline.
//!
//! Binds the TCP line listener, starts the worker pool, and wires them
//! together through the bounded queue. Shuts down gracefully on
//! SIGTERM/SIGINT: the listener stops accepting, queue producers drop, and
//! every worker drains the remaining lines before exiting.

use std::net::SocketAddr;
use std::sync::Arc;

use logsift_classify::Classifier;
use logsift_collector::{config, listener, worker, Forwarder};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

fn resolve_config_path() -> (Option<String>, &'static str) {
    if let Some(path) = std::env::args()
        .nth(1)
        .filter(|value| !value.trim().is_empty())
    {
        return (Some(path), "cli-arg");
    }

    if let Ok(path) = std::env::var("LOGSIFT_COLLECTOR_CONFIG") {
        if !path.trim().is_empty() {
            return (Some(path), "env-var");
        }
    }

    (None, "default")
}

#[tokio::main]
async fn main() {
    let (resolved_config_path, config_source) = resolve_config_path();
    let selected_config_path = resolved_config_path.as_deref().or(Some("collector.toml"));

    // Load configuration
    let config = config::load_config(selected_config_path)
        .expect("failed to load configuration — the collector cannot start without valid config");

    // Initialize tracing
    let filter =
        EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.logging.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    tracing::info!(
        source = config_source,
        path = selected_config_path.unwrap_or("<none>"),
        "resolved startup configuration path"
    );

    // Wire the pipeline: listener → queue → workers → store
    let (queue, consumer) = logsift_collector::line_queue(config.queue.capacity);
    let classifier = Arc::new(Classifier::default());
    let forwarder = Arc::new(Forwarder::new(&config.forward.base_url));

    let workers = worker::spawn_workers(config.workers.count, consumer, classifier, forwarder);

    let addr = SocketAddr::new(config.listener.host, config.listener.port);
    let tcp_listener = TcpListener::bind(addr)
        .await
        .expect("failed to bind to address — is another process using this port?");

    tracing::info!(
        %addr,
        queue_capacity = config.queue.capacity,
        workers = config.workers.count,
        forward = %config.forward.base_url,
        "starting logsift collector"
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let listener_task = tokio::spawn(listener::run_listener(tcp_listener, queue, shutdown_rx));

    shutdown_signal().await;

    // Stop accepting; once the listener task and its connection tasks drop
    // their queue handles the workers drain what is left and exit.
    let _ = shutdown_tx.send(true);
    let _ = listener_task.await;
    for handle in workers {
        let _ = handle.await;
    }

    tracing::info!("logsift collector shut down");
}

/// Waits for a SIGINT (Ctrl+C) or SIGTERM signal for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => { tracing::info!("received SIGINT, initiating graceful shutdown"); }
        () = terminate => { tracing::info!("received SIGTERM, initiating graceful shutdown"); }
    }
}
