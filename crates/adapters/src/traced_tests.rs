// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::host::{HookRegistry, DEFAULT_PRIORITY};
use crate::sink::FakeSink;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use wpt_core::Value;

/// A writer that captures log output for testing
#[derive(Clone, Default)]
struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn new() -> Self {
        Self::default()
    }

    fn contents(&self) -> String {
        let logs = self.logs.lock().unwrap();
        String::from_utf8_lossy(&logs).to_string()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run a closure with captured tracing output
fn with_tracing<F, T>(f: F) -> (String, T)
where
    F: FnOnce() -> T,
{
    let logs = CapturedLogs::new();
    let logs_clone = logs.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(logs_clone)
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);

    (logs.contents(), result)
}

#[test]
fn traced_sink_delegates_to_inner() {
    let fake = FakeSink::new();
    let traced = TracedSink::new(fake.clone());

    traced.capture_log("Action triggered: init", EventLevel::Info);

    assert_eq!(fake.messages(), vec!["Action triggered: init"]);
    assert_eq!(fake.calls()[0].level, EventLevel::Info);
}

#[test]
fn traced_sink_logs_level_without_message_text() {
    let traced = TracedSink::new(FakeSink::new());

    let (logs, ()) = with_tracing(|| traced.capture_log("wp_login: admin", EventLevel::Warning));

    assert!(logs.contains("telemetry captured"), "logs: {}", logs);
    assert!(logs.contains("level=warning"), "logs: {}", logs);
    assert!(logs.contains("message_len=15"), "logs: {}", logs);
    assert!(!logs.contains("admin"), "message text leaked: {}", logs);
}

#[test]
fn traced_host_logs_attachment() {
    let registry = HookRegistry::new();
    let traced = TracedHost::new(registry.clone());

    let (logs, ()) = with_tracing(|| {
        traced.add_action("save_post", DEFAULT_PRIORITY, 3, Arc::new(|_: &[Value]| {}));
    });

    assert!(logs.contains("host.add_action"), "logs: {}", logs);
    assert!(logs.contains("save_post"), "logs: {}", logs);
    assert!(logs.contains("accepted_args=3"), "logs: {}", logs);
    assert!(registry.has_action("save_post"));
}
