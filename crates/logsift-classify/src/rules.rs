//! Classification rule configuration.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The `(service, event_category, severity)` triple a rule assigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Classification tag, e.g. `linux_login`.
    pub service: String,
    /// Coarse category, e.g. `login.audit`.
    pub event_category: String,
    /// `INFO`, `WARN`, or `ERROR`.
    pub severity: String,
}

impl Classification {
    pub fn new(service: &str, event_category: &str, severity: &str) -> Self {
        Self {
            service: service.to_string(),
            event_category: event_category.to_string(),
            severity: severity.to_string(),
        }
    }
}

/// One substring-matching classification rule.
///
/// A rule matches when any of its markers occurs as a substring of the
/// working text. Rules are evaluated in list order and the first match wins,
/// so a line carrying markers from several rules classifies by the earliest
/// rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    /// Substrings that trigger this rule (any-of).
    pub markers: Vec<String>,
    /// The classification assigned on match.
    pub assign: Classification,
}

impl Rule {
    pub fn new(markers: &[&str], assign: Classification) -> Self {
        Self {
            markers: markers.iter().map(|m| m.to_string()).collect(),
            assign,
        }
    }

    /// Returns true when any marker occurs in `text`.
    pub fn matches(&self, text: &str) -> bool {
        self.markers.iter().any(|marker| text.contains(marker))
    }
}

/// Full classifier configuration: ordered rules plus the username deny-list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Rules tested in order; first match wins.
    pub rules: Vec<Rule>,
    /// Usernames flagged as security-sensitive.
    pub deny_list: HashSet<String>,
}

impl Default for ClassifierConfig {
    /// The reference rule set.
    ///
    /// Order matters: `sudo`/`session opened` outranks `cron`/`session
    /// closed`, so a line containing both classifies as a linux login.
    fn default() -> Self {
        Self {
            rules: vec![
                Rule::new(
                    &["sudo", "session opened"],
                    Classification::new("linux_login", "login.audit", "INFO"),
                ),
                Rule::new(
                    &["cron", "session closed"],
                    Classification::new("linux_logout", "logout.audit", "INFO"),
                ),
                Rule::new(
                    &["Microsoft-Windows-Security-Auditing"],
                    Classification::new("windows_login", "login.audit", "INFO"),
                ),
                Rule::new(
                    &["Application Error"],
                    Classification::new("windows_event", "system.event", "ERROR"),
                ),
            ],
            deny_list: ["root", "admin"].iter().map(|s| s.to_string()).collect(),
        }
    }
}
