//! The raw-text to structured-event classifier.

use std::borrow::Cow;

use chrono::Utc;
use logsift_types::{LogEvent, UNKNOWN};
use regex::Regex;
use serde_json::Value;

use crate::rules::{Classification, ClassifierConfig};

/// Stateless classifier built from a [`ClassifierConfig`].
///
/// The two username patterns are compiled once at construction. `classify`
/// itself does no I/O and holds no mutable state, so one instance can be
/// shared freely across worker tasks.
#[derive(Debug, Clone)]
pub struct Classifier {
    config: ClassifierConfig,
    linux_user: Regex,
    windows_user: Regex,
}

impl Classifier {
    /// Builds a classifier from the given configuration.
    pub fn new(config: ClassifierConfig) -> Self {
        // Both patterns are literals known to compile; a broken pattern here
        // would be a programming error, not runtime input.
        Self {
            config,
            linux_user: Regex::new(r"user\s+(\w+)").expect("linux username pattern"),
            windows_user: Regex::new(r"Account Name:\s*(\w+)").expect("windows username pattern"),
        }
    }

    /// Classifies one raw log line into a [`LogEvent`].
    ///
    /// Never fails. Fields that cannot be extracted degrade to `"unknown"`;
    /// an unrecognised line still produces a complete event with
    /// service/category `unknown` and severity `INFO`.
    pub fn classify(&self, raw: &str) -> LogEvent {
        let message = unwrap_message(raw);
        let message = message.as_ref();

        let username = self.extract_username(message);
        let blacklisted = self.config.deny_list.contains(&username);
        let classification = self.classify_text(message);

        LogEvent {
            timestamp: Utc::now(),
            service: classification.service,
            event_category: classification.event_category,
            severity: classification.severity,
            username,
            hostname: extract_hostname(message).to_string(),
            raw_message: message.to_string(),
            blacklisted,
        }
    }

    /// Tries the `user <name>` pattern first, then `Account Name: <name>`.
    fn extract_username(&self, message: &str) -> String {
        self.linux_user
            .captures(message)
            .or_else(|| self.windows_user.captures(message))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// First matching rule wins; no match falls through to unknown/INFO.
    fn classify_text(&self, message: &str) -> Classification {
        self.config
            .rules
            .iter()
            .find(|rule| rule.matches(message))
            .map(|rule| rule.assign.clone())
            .unwrap_or_else(|| Classification::new(UNKNOWN, UNKNOWN, "INFO"))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}

/// Unwraps `{"message": "<text>"}` envelopes.
///
/// Returns the `message` string when the input is a JSON object carrying
/// one; any parse failure, or a missing/non-string `message` field, is
/// treated identically to "not JSON" and the raw input is used verbatim.
fn unwrap_message(raw: &str) -> Cow<'_, str> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(mut map)) => match map.remove("message") {
            Some(Value::String(message)) => Cow::Owned(message),
            _ => Cow::Borrowed(raw),
        },
        _ => Cow::Borrowed(raw),
    }
}

/// Second whitespace-delimited token, or `"unknown"`.
fn extract_hostname(message: &str) -> &str {
    message.split_whitespace().nth(1).unwrap_or(UNKNOWN)
}
