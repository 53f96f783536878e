//! Unit tests for the classifier.

use crate::rules::{Classification, Rule};
use crate::{Classifier, ClassifierConfig};
use logsift_types::UNKNOWN;

fn classifier() -> Classifier {
    Classifier::default()
}

// ── username extraction ──────────────────────────────────────────────

#[test]
fn extracts_username_after_user_keyword() {
    let event = classifier().classify("<86> host sudo: session opened for user alice(uid=0)");
    assert_eq!(event.username, "alice");
}

#[test]
fn extracts_username_after_account_name() {
    let event = classifier().classify("<134> WIN-PC Microsoft-Windows-Security-Auditing: Account Name: bob");
    assert_eq!(event.username, "bob");
}

#[test]
fn user_pattern_wins_when_both_match() {
    let event = classifier().classify("audit host for user carol and Account Name: dave");
    assert_eq!(event.username, "carol");
}

#[test]
fn user_pattern_is_case_sensitive() {
    let event = classifier().classify("something User alice did");
    assert_eq!(event.username, UNKNOWN);
}

#[test]
fn missing_username_degrades_to_unknown() {
    let event = classifier().classify("<86> host sudo: no actor mentioned");
    assert_eq!(event.username, UNKNOWN);
}

// ── deny-list ────────────────────────────────────────────────────────

#[test]
fn root_and_admin_are_blacklisted() {
    for name in ["root", "admin"] {
        let event = classifier().classify(&format!("login for user {name} ok"));
        assert_eq!(event.username, name);
        assert!(event.blacklisted, "{name} should be blacklisted");
    }
}

#[test]
fn other_usernames_are_not_blacklisted() {
    let event = classifier().classify("login for user alice ok");
    assert!(!event.blacklisted);
}

#[test]
fn unknown_username_is_not_blacklisted() {
    let event = classifier().classify("no actor here");
    assert_eq!(event.username, UNKNOWN);
    assert!(!event.blacklisted);
}

// ── rule classification ──────────────────────────────────────────────

#[test]
fn sudo_classifies_as_linux_login() {
    let event = classifier().classify("<86> aiops9242 sudo: pam_unix(sudo:session): session opened for user root(uid=0)");
    assert_eq!(event.service, "linux_login");
    assert_eq!(event.event_category, "login.audit");
    assert_eq!(event.severity, "INFO");
}

#[test]
fn cron_classifies_as_linux_logout() {
    let event = classifier().classify("<34> aiops9242 cron: pam_unix(cron:session): session closed for user root");
    assert_eq!(event.service, "linux_logout");
    assert_eq!(event.event_category, "logout.audit");
    assert_eq!(event.severity, "INFO");
}

#[test]
fn windows_auditing_marker_classifies_as_windows_login() {
    let event = classifier().classify("<134> WIN-PC Microsoft-Windows-Security-Auditing: Account Name: admin");
    assert_eq!(event.service, "windows_login");
    assert_eq!(event.event_category, "login.audit");
    assert_eq!(event.severity, "INFO");
}

#[test]
fn application_error_classifies_as_windows_event() {
    let event = classifier().classify("<102> WIN-PC Application Error: Application crash detected");
    assert_eq!(event.service, "windows_event");
    assert_eq!(event.event_category, "system.event");
    assert_eq!(event.severity, "ERROR");
}

#[test]
fn first_rule_wins_on_overlapping_markers() {
    // Carries both the login (`sudo`) and logout (`cron`) markers.
    let event = classifier().classify("<86> host sudo: invoked from cron job");
    assert_eq!(event.service, "linux_login");
    assert_eq!(event.event_category, "login.audit");
}

#[test]
fn unrecognised_text_degrades_to_unknown_info() {
    let event = classifier().classify("nothing recognisable");
    assert_eq!(event.service, UNKNOWN);
    assert_eq!(event.event_category, UNKNOWN);
    assert_eq!(event.severity, "INFO");
    assert_eq!(event.username, UNKNOWN);
}

#[test]
fn single_token_line_has_unknown_hostname() {
    let event = classifier().classify("lonely");
    assert_eq!(event.hostname, UNKNOWN);
}

#[test]
fn hostname_is_second_whitespace_token() {
    let event = classifier().classify("<86> aiops9242 sudo: whatever");
    assert_eq!(event.hostname, "aiops9242");
}

// ── JSON envelope unwrapping ─────────────────────────────────────────

#[test]
fn json_wrapped_line_classifies_like_bare_line() {
    let text = "<86> aiops9242 sudo: session opened for user root(uid=0)";
    let bare = classifier().classify(text);
    let wrapped = classifier().classify(&format!("{{\"message\":\"{text}\"}}"));

    assert_eq!(wrapped.service, bare.service);
    assert_eq!(wrapped.event_category, bare.event_category);
    assert_eq!(wrapped.severity, bare.severity);
    assert_eq!(wrapped.username, bare.username);
    assert_eq!(wrapped.hostname, bare.hostname);
    assert_eq!(wrapped.raw_message, text, "raw_message is the unwrapped text");
}

#[test]
fn json_without_message_field_is_treated_verbatim() {
    let raw = r#"{"msg":"user alice"}"#;
    let event = classifier().classify(raw);
    assert_eq!(event.raw_message, raw);
    assert_eq!(event.username, "alice");
}

#[test]
fn invalid_json_is_treated_verbatim() {
    let raw = r#"{"message": truncated"#;
    let event = classifier().classify(raw);
    assert_eq!(event.raw_message, raw);
}

#[test]
fn non_string_message_field_is_treated_verbatim() {
    let raw = r#"{"message": 42}"#;
    let event = classifier().classify(raw);
    assert_eq!(event.raw_message, raw);
}

// ── injected configuration ───────────────────────────────────────────

#[test]
fn alternate_rule_set_overrides_defaults() {
    let config = ClassifierConfig {
        rules: vec![Rule::new(
            &["deploy"],
            Classification::new("ci", "deploy.audit", "WARN"),
        )],
        deny_list: ["eve".to_string()].into_iter().collect(),
    };
    let classifier = Classifier::new(config);

    let event = classifier.classify("pipeline deploy started by user eve now");
    assert_eq!(event.service, "ci");
    assert_eq!(event.event_category, "deploy.audit");
    assert_eq!(event.severity, "WARN");
    assert!(event.blacklisted);

    // The reference markers mean nothing to this rule set.
    let other = classifier.classify("sudo: session opened for user root");
    assert_eq!(other.service, UNKNOWN);
    assert!(!other.blacklisted, "root is not on the injected deny-list");
}

#[test]
fn timestamp_is_assigned_at_classification() {
    let before = chrono::Utc::now();
    let event = classifier().classify("anything");
    let after = chrono::Utc::now();
    assert!(event.timestamp >= before && event.timestamp <= after);
}
