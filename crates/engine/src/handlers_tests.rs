// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use wpt_adapters::{StaticSite, Theme};

fn site(theme: Option<Theme>, plugins: &[&str]) -> Arc<dyn SiteInfo> {
    let mut site = StaticSite::new().with_plugins(plugins.iter().copied());
    if let Some(theme) = theme {
        site = site.with_theme(theme);
    }
    Arc::new(site)
}

#[test]
fn generic_handler_is_the_serializer() {
    let handler = generic_handler();
    assert_eq!(handler("act", &[Value::Int(5), Value::Null]), "act: 5, null");
    assert_eq!(handler("act", &[]), "act");
}

#[test]
fn theme_handler_reports_standalone_theme() {
    let handler = after_setup_theme(site(Some(Theme::new("twentytwentyfour")), &[]));
    assert_eq!(
        handler(AFTER_SETUP_THEME, &[]),
        "after_setup_theme: Active Theme: twentytwentyfour"
    );
}

#[test]
fn theme_handler_reports_parent_chain_in_order() {
    let theme = Theme::from_chain(["child", "parent", "grandparent"]).unwrap();
    let handler = after_setup_theme(site(Some(theme), &[]));

    let message = handler(AFTER_SETUP_THEME, &[]);

    assert!(message.contains("child"));
    assert_eq!(
        message,
        "after_setup_theme: Active Theme: child > parent > grandparent"
    );
}

#[test]
fn theme_handler_without_theme() {
    let handler = after_setup_theme(site(None, &[]));
    assert_eq!(
        handler(AFTER_SETUP_THEME, &[]),
        "after_setup_theme: Active Theme: none"
    );
}

#[test]
fn theme_handler_reads_site_at_fire_time() {
    let handler = after_setup_theme(site(Some(Theme::new("a")), &[]));
    // Arguments are ignored
    assert_eq!(
        handler(AFTER_SETUP_THEME, &[Value::from("ignored")]),
        "after_setup_theme: Active Theme: a"
    );
}

#[test]
fn plugins_handler_joins_active_plugins() {
    let handler = plugins_loaded(site(
        None,
        &["akismet/akismet.php", "rollbar/rollbar-php-wordpress.php"],
    ));
    assert_eq!(
        handler(PLUGINS_LOADED, &[]),
        "plugins_loaded: Active Plugins: akismet/akismet.php, rollbar/rollbar-php-wordpress.php"
    );
}

#[test]
fn plugins_handler_without_plugins() {
    let handler = plugins_loaded(site(None, &[]));
    assert_eq!(
        handler(PLUGINS_LOADED, &[]),
        "plugins_loaded: Active Plugins: none"
    );
}

#[test]
fn default_handlers_cover_theme_and_plugins() {
    let handlers = default_custom_handlers(site(None, &[]));
    let keys: Vec<&str> = handlers.keys().map(String::as_str).collect();
    assert_eq!(keys, vec![AFTER_SETUP_THEME, PLUGINS_LOADED]);
}
