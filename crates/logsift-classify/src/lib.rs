//! Log line classification for the Logsift pipeline.
//!
//! A [`Classifier`] turns one raw log line into a structured
//! [`logsift_types::LogEvent`]. Classification never fails: malformed input
//! degrades to `"unknown"` placeholder fields instead of an error, because
//! the collector's workers must keep draining the queue no matter what
//! arrives on the wire.
//!
//! Classification behaviour is data, not code: a [`ClassifierConfig`]
//! carries the ordered rule list and the username deny-list, so alternate
//! rule sets can be exercised in tests without touching the extraction
//! logic. [`ClassifierConfig::default`] reproduces the reference rules.

mod classifier;
mod rules;

pub use classifier::Classifier;
pub use rules::{ClassifierConfig, Classification, Rule};

#[cfg(test)]
mod tests;
