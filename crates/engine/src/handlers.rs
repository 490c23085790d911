// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Argument handlers
//!
//! A handler turns an action name and its arguments into the message that
//! follows the `Action triggered: ` prefix.

use std::collections::BTreeMap;
use std::sync::Arc;
use wpt_adapters::SiteInfo;
use wpt_core::{concat_args, Value};

/// Formats an action and its arguments into a log message
pub type ArgsHandler = Arc<dyn Fn(&str, &[Value]) -> String + Send + Sync>;

/// Custom handlers keyed by action name
pub type HandlerMap = BTreeMap<String, ArgsHandler>;

pub const AFTER_SETUP_THEME: &str = "after_setup_theme";
pub const PLUGINS_LOADED: &str = "plugins_loaded";

/// Shown when the site reports no theme or no plugins
const NONE: &str = "none";

/// The redacting serializer as a handler
pub fn generic_handler() -> ArgsHandler {
    Arc::new(|action: &str, args: &[Value]| concat_args(action, args))
}

/// `after_setup_theme`: the active theme followed by its parents
pub fn after_setup_theme(site: Arc<dyn SiteInfo>) -> ArgsHandler {
    Arc::new(move |action: &str, _args: &[Value]| {
        let themes = match site.active_theme() {
            Some(theme) => theme.chain().join(" > "),
            None => NONE.to_string(),
        };
        format!("{}: Active Theme: {}", action, themes)
    })
}

/// `plugins_loaded`: the active plugins
pub fn plugins_loaded(site: Arc<dyn SiteInfo>) -> ArgsHandler {
    Arc::new(move |action: &str, _args: &[Value]| {
        let plugins = site.active_plugins();
        if plugins.is_empty() {
            return format!("{}: Active Plugins: {}", action, NONE);
        }
        format!("{}: Active Plugins: {}", action, plugins.join(", "))
    })
}

/// The built-in custom handlers
pub fn default_custom_handlers(site: Arc<dyn SiteInfo>) -> HandlerMap {
    let mut handlers = HandlerMap::new();
    handlers.insert(
        AFTER_SETUP_THEME.to_string(),
        after_setup_theme(Arc::clone(&site)),
    );
    handlers.insert(PLUGINS_LOADED.to_string(), plugins_loaded(site));
    handlers
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
