//! Shared data model for the Logsift pipeline.
//!
//! The only type that crosses crate boundaries is [`LogEvent`], the
//! structured record a classifier produces from one raw log line. Events are
//! immutable after creation: the collector builds them, the server stores
//! them, and the query surface serves copies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder value for any field the classifier could not extract.
pub const UNKNOWN: &str = "unknown";

/// A structured log event.
///
/// Produced exclusively by the classifier and owned by the store once
/// ingested. Every field is always populated: extraction failures degrade
/// to `"unknown"` rather than absent fields. `raw_message` is the audit
/// trail: it holds the working text verbatim and is never re-derived.
///
/// Serialises with camelCase wire names (`eventCategory`, `rawMessage`) to
/// match the `/ingest` body contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEvent {
    /// Assignment time at classification, not origin time.
    pub timestamp: DateTime<Utc>,
    /// Classification tag, e.g. `linux_login`, or `"unknown"`.
    pub service: String,
    /// Coarse category: `login.audit`, `logout.audit`, `system.event`,
    /// or `"unknown"`.
    pub event_category: String,
    /// `INFO`, `WARN`, or `ERROR`. Not an enforced enum on the wire.
    pub severity: String,
    /// Extracted actor or `"unknown"`.
    pub username: String,
    /// Extracted origin host or `"unknown"`.
    pub hostname: String,
    /// The original (or JSON-unwrapped) text, verbatim.
    pub raw_message: String,
    /// True iff `username` was on the deny-list at classification time.
    pub blacklisted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LogEvent {
        LogEvent {
            timestamp: "2026-08-27T12:00:00Z".parse().unwrap(),
            service: "linux_login".into(),
            event_category: "login.audit".into(),
            severity: "INFO".into(),
            username: "root".into(),
            hostname: "aiops9242".into(),
            raw_message: "<86> aiops9242 sudo: session opened for user root".into(),
            blacklisted: true,
        }
    }

    #[test]
    fn serialises_with_camel_case_wire_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["service"], "linux_login");
        assert_eq!(value["eventCategory"], "login.audit");
        assert_eq!(value["rawMessage"], sample().raw_message);
        assert_eq!(value["blacklisted"], true);
        assert!(value.get("event_category").is_none());
    }

    #[test]
    fn round_trips_through_json() {
        let event = sample();
        let json = serde_json::to_string(&event).unwrap();
        let back: LogEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
