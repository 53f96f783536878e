//! Logsift collector library logic.
//!
//! The collector is the ingestion half of the pipeline: a TCP listener
//! accepts persistent line-oriented connections from log producers, each
//! line lands in a fixed-capacity lossy queue, and a small pool of workers
//! drains the queue, classifying every line and forwarding the structured
//! event to the central store over HTTP.
//!
//! The queue is the only backpressure mechanism, and it sheds load instead
//! of stalling producers: a full queue drops the line, bumps an observable
//! counter, and moves on. Workers are fire-and-forget: a failed forward is
//! logged and the line is never retried.

pub mod config;
pub mod forward;
pub mod listener;
pub mod queue;
pub mod worker;

pub use forward::{ForwardError, Forwarder};
pub use queue::{line_queue, LineConsumer, LineQueue};
