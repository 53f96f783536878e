//! The in-memory event store.

use std::sync::RwLock;

use logsift_types::LogEvent;

/// Append-only, concurrently shared collection of log events.
///
/// Insertion order is preserved; there is no update or delete. The store is
/// memory-resident and lost on process exit by design.
///
/// Uses `std::sync::RwLock` intentionally: every lock acquisition is a brief
/// Vec operation that never spans an `.await` point, making a synchronous
/// lock safe and more efficient than `tokio::sync::RwLock`.
#[derive(Debug, Default)]
pub struct LogStore {
    events: RwLock<Vec<LogEvent>>,
}

impl LogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one event. Never fails; safe under unbounded concurrent
    /// callers.
    pub fn add(&self, event: LogEvent) {
        self.events.write().expect("log store lock poisoned").push(event);
    }

    /// Returns a point-in-time copy of all events in insertion order.
    ///
    /// Always an independent copy, never a live view, so concurrent `add`
    /// calls cannot corrupt an iteration over the snapshot.
    pub fn snapshot(&self) -> Vec<LogEvent> {
        self.events.read().expect("log store lock poisoned").clone()
    }

    /// Current event count.
    pub fn len(&self) -> usize {
        self.events.read().expect("log store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
