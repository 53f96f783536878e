//! The classify-and-forward worker pool.

use std::sync::Arc;

use logsift_classify::Classifier;
use tokio::task::JoinHandle;

use crate::forward::Forwarder;
use crate::queue::LineConsumer;

/// Spawns `count` worker tasks sharing one queue consumer.
///
/// Each worker loops take → classify → forward until the queue shuts down.
/// The returned handles resolve once every queued line has been drained,
/// giving the binary a deterministic join point on shutdown.
pub fn spawn_workers(
    count: usize,
    consumer: LineConsumer,
    classifier: Arc<Classifier>,
    forwarder: Arc<Forwarder>,
) -> Vec<JoinHandle<()>> {
    (0..count)
        .map(|id| {
            let consumer = consumer.clone();
            let classifier = Arc::clone(&classifier);
            let forwarder = Arc::clone(&forwarder);
            tokio::spawn(worker_loop(id, consumer, classifier, forwarder))
        })
        .collect()
}

/// One worker's receive-classify-forward loop.
///
/// Forward failures are logged and the event is abandoned: at-most-once per
/// dequeued line, and nothing short of queue shutdown ends the loop. Each
/// worker preserves FIFO for the lines it personally dequeues.
async fn worker_loop(
    id: usize,
    consumer: LineConsumer,
    classifier: Arc<Classifier>,
    forwarder: Arc<Forwarder>,
) {
    tracing::debug!(worker = id, "worker started");

    while let Some(line) = consumer.take().await {
        let event = classifier.classify(&line);
        if let Err(e) = forwarder.forward(&event).await {
            tracing::warn!(
                worker = id,
                service = %event.service,
                error = %e,
                "forward failed, event dropped"
            );
        }
    }

    tracing::debug!(worker = id, "queue closed, worker exiting");
}
