//! The bounded raw-line queue between the listener and the worker pool.
//!
//! Deliberately asymmetric: the producer side never blocks (a full queue
//! drops the line so the listener can never stall a connection), while the
//! consumer side waits for work. Capacity is fixed at construction.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::sync::Mutex;

/// Creates a bounded queue of the given capacity.
///
/// Returns the producer handle and the shared consumer handle. Both are
/// cheap to clone; the queue shuts down once every [`LineQueue`] clone has
/// been dropped, at which point pending [`LineConsumer::take`] calls drain
/// the remaining items and then resolve to `None`.
pub fn line_queue(capacity: usize) -> (LineQueue, LineConsumer) {
    let (tx, rx) = mpsc::channel(capacity);
    let producer = LineQueue {
        tx,
        dropped: Arc::new(AtomicU64::new(0)),
    };
    let consumer = LineConsumer {
        rx: Arc::new(Mutex::new(rx)),
    };
    (producer, consumer)
}

/// Producer handle: non-blocking enqueue with overload shedding.
#[derive(Debug, Clone)]
pub struct LineQueue {
    tx: mpsc::Sender<String>,
    dropped: Arc<AtomicU64>,
}

impl LineQueue {
    /// Enqueues one raw line without blocking.
    ///
    /// Returns `false` and drops the line when the queue is full (bumping
    /// the drop counter) or already shut down. Loss here is by design:
    /// this is overload shedding, not a retry candidate.
    pub fn offer(&self, line: String) -> bool {
        match self.tx.try_send(line) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                false
            }
            Err(TrySendError::Closed(_)) => false,
        }
    }

    /// Total lines dropped because the queue was full.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Free slots remaining.
    pub fn remaining_capacity(&self) -> usize {
        self.tx.capacity()
    }
}

/// Consumer handle shared by all workers.
///
/// Workers contend on an internal async mutex; each `take` holds it only
/// for one `recv`, so dequeues are globally FIFO at the moment of receipt.
#[derive(Debug, Clone)]
pub struct LineConsumer {
    rx: Arc<Mutex<mpsc::Receiver<String>>>,
}

impl LineConsumer {
    /// Waits for the next line.
    ///
    /// Resolves to `None` once the queue has shut down and drained, which
    /// is each worker's signal to exit.
    pub async fn take(&self) -> Option<String> {
        self.rx.lock().await.recv().await
    }
}
