// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI integration tests for `wpt simulate`

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(deprecated)]

mod common;

use common::{event_messages, json, wpt, SettingsFile};
use predicates::prelude::*;

#[test]
fn test_simulate_default_lifecycle() {
    let simulation = json(&["simulate", "--format", "json"]);

    assert_eq!(simulation["report"]["enabled"], true);
    assert_eq!(simulation["report"]["attached"].as_array().unwrap().len(), 12);
    assert_eq!(simulation["fired"], 12);

    let messages = event_messages(&simulation);
    assert_eq!(messages.len(), 12);
    assert_eq!(messages[0], "Action triggered: muplugins_loaded");
    let pre_get_posts = "Action triggered: pre_get_posts: object(WP_Post) {id: 42}";
    assert!(messages.iter().any(|m| m == pre_get_posts));
}

#[test]
fn test_simulate_events_are_info_logs() {
    let simulation = json(&["simulate", "--format", "json"]);

    for event in simulation["events"].as_array().unwrap() {
        assert_eq!(event["type"], "log");
        assert_eq!(event["level"], "info");
    }
}

#[test]
fn test_simulate_theme_and_plugins() {
    let simulation = json(&[
        "simulate",
        "--hooks",
        "plugins_loaded,after_setup_theme",
        "--theme",
        "child,parent,grandparent",
        "--plugins",
        "akismet/akismet.php,hello.php",
        "--format",
        "json",
    ]);

    similar_asserts::assert_eq!(
        event_messages(&simulation),
        vec![
            "Action triggered: plugins_loaded: Active Plugins: akismet/akismet.php, hello.php"
                .to_string(),
            "Action triggered: after_setup_theme: Active Theme: child > parent > grandparent"
                .to_string(),
        ]
    );
}

#[test]
fn test_simulate_without_theme_or_plugins() {
    let simulation = json(&[
        "simulate",
        "--hooks",
        "plugins_loaded,after_setup_theme",
        "--format",
        "json",
    ]);

    similar_asserts::assert_eq!(
        event_messages(&simulation),
        vec![
            "Action triggered: plugins_loaded: Active Plugins: none".to_string(),
            "Action triggered: after_setup_theme: Active Theme: none".to_string(),
        ]
    );
}

#[test]
fn test_simulate_unknown_hooks_fall_back_to_defaults() {
    let simulation = json(&["simulate", "--hooks", "bogus,also_bogus", "--format", "json"]);

    assert_eq!(simulation["report"]["attached"].as_array().unwrap().len(), 12);
}

#[test]
fn test_simulate_drops_unknown_hooks() {
    let simulation = json(&["simulate", "--hooks", "wp_head,bogus", "--format", "json"]);

    assert_eq!(simulation["report"]["attached"], serde_json::json!(["wp_head"]));
    assert_eq!(event_messages(&simulation), vec!["Action triggered: wp_head"]);
}

#[test]
fn test_simulate_never_logs_passwords() {
    wpt()
        .args(["simulate", "--hooks", "password_reset,wp_authenticate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("password_reset: object(WP_User) {id: 1}"))
        .stdout(predicate::str::contains("wp_authenticate: admin"))
        .stdout(predicate::str::contains("hunter2").not());
}

#[test]
fn test_simulate_disabled() {
    let file = SettingsFile::new("enable_telemetry_listener = false\n");

    wpt()
        .args(["simulate", "--config", file.path()])
        .assert()
        .success()
        .stdout("telemetry listener disabled\n");
}

#[test]
fn test_simulate_respects_buffer_size() {
    let file = SettingsFile::new("max_telemetry_events = 3\n");

    let simulation = json(&["simulate", "--config", file.path(), "--format", "json"]);

    let messages = event_messages(&simulation);
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2], "Action triggered: shutdown");
}

#[test]
fn test_simulate_text_summary() {
    wpt()
        .args(["simulate", "--hooks", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("attached: 1  skipped: 0  rejected: 0  fired: 1"))
        .stdout(predicate::str::contains("[log] info     Action triggered: init"));
}
