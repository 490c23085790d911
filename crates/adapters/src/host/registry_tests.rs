// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::host::DEFAULT_PRIORITY;

fn recorder(log: &Arc<Mutex<Vec<String>>>, tag: &'static str) -> ActionCallback {
    let log = Arc::clone(log);
    Arc::new(move |args: &[Value]| {
        log.lock().unwrap().push(format!("{}:{}", tag, args.len()));
    })
}

#[test]
fn fires_registered_callback() {
    let registry = HookRegistry::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    registry.add_action("init", DEFAULT_PRIORITY, 0, recorder(&log, "a"));

    assert_eq!(registry.do_action("init", &[]), 1);
    assert_eq!(*log.lock().unwrap(), vec!["a:0"]);
    assert_eq!(registry.did_action("init"), 1);
}

#[test]
fn unregistered_action_runs_nothing_but_counts() {
    let registry = HookRegistry::new();
    assert_eq!(registry.do_action("wp_head", &[]), 0);
    assert_eq!(registry.did_action("wp_head"), 1);
    assert!(!registry.has_action("wp_head"));
}

#[test]
fn arguments_are_truncated_to_accepted_args() {
    let registry = HookRegistry::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    registry.add_action("save_post", DEFAULT_PRIORITY, 1, recorder(&log, "one"));
    registry.add_action("save_post", DEFAULT_PRIORITY, 5, recorder(&log, "five"));

    registry.do_action("save_post", &[Value::Int(1), Value::Int(2), Value::Int(3)]);

    assert_eq!(*log.lock().unwrap(), vec!["one:1", "five:3"]);
}

#[test]
fn callbacks_run_by_priority_then_registration_order() {
    let registry = HookRegistry::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    registry.add_action("init", 20, 0, recorder(&log, "late"));
    registry.add_action("init", 10, 0, recorder(&log, "first"));
    registry.add_action("init", 10, 0, recorder(&log, "second"));
    registry.add_action("init", 1, 0, recorder(&log, "early"));

    registry.do_action("init", &[]);

    assert_eq!(
        *log.lock().unwrap(),
        vec!["early:0", "first:0", "second:0", "late:0"]
    );
}

#[test]
fn remove_all_actions_detaches_callbacks() {
    let registry = HookRegistry::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    registry.add_action("delete_user", DEFAULT_PRIORITY, 3, recorder(&log, "a"));
    assert!(registry.has_action("delete_user"));

    registry.remove_all_actions("delete_user");

    assert!(!registry.has_action("delete_user"));
    assert_eq!(registry.do_action("delete_user", &[]), 0);
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn callback_may_fire_another_action() {
    let registry = HookRegistry::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    registry.add_action("inner", DEFAULT_PRIORITY, 0, recorder(&log, "inner"));

    let nested = registry.clone();
    registry.add_action(
        "outer",
        DEFAULT_PRIORITY,
        0,
        Arc::new(move |_: &[Value]| {
            nested.do_action("inner", &[]);
        }),
    );

    registry.do_action("outer", &[]);

    assert_eq!(*log.lock().unwrap(), vec!["inner:0"]);
    assert_eq!(registry.did_action("inner"), 1);
}

#[test]
fn clones_share_registrations() {
    let registry = HookRegistry::new();
    let other = registry.clone();
    other.add_action("init", DEFAULT_PRIORITY, 0, Arc::new(|_: &[Value]| {}));
    assert_eq!(registry.action_count("init"), 1);
}
