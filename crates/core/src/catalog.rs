// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Catalog of instrumentable host actions
//!
//! Every action the listener can attach to is listed here together with the
//! number of positional arguments the host passes when it fires. Arities are
//! authoritative: configuration selects names, never arities.

use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

/// A host action and the number of arguments it is fired with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EventDescriptor {
    pub name: &'static str,
    pub arity: usize,
}

const fn action(name: &'static str, arity: usize) -> EventDescriptor {
    EventDescriptor { name, arity }
}

/// Actions instrumented when the settings select nothing valid
pub static DEFAULT_ACTIONS: &[EventDescriptor] = &[
    // Lifecycle actions
    action("muplugins_loaded", 0),
    action("plugins_loaded", 0),
    action("setup_theme", 0),
    action("after_setup_theme", 0),
    action("init", 0),
    action("wp_loaded", 0),
    action("pre_get_posts", 1),
    action("admin_init", 0),
    action("send_headers", 1),
    action("wp_head", 0),
    action("wp_footer", 0),
    action("shutdown", 0),
];

/// Every known action, excluding filters and dynamically named actions
///
/// See <https://developer.wordpress.org/apis/hooks/action-reference/>.
pub static ALL_ACTIONS: &[EventDescriptor] = &[
    // Lifecycle actions
    action("muplugins_loaded", 0),
    action("registered_taxonomy", 3),
    action("registered_post_type", 2),
    action("plugins_loaded", 0),
    action("sanitize_comment_cookies", 0),
    action("setup_theme", 0),
    action("load_textdomain", 2),
    action("after_setup_theme", 0),
    action("auth_cookie_malformed", 2),
    action("auth_cookie_valid", 2),
    action("set_current_user", 0),
    action("init", 0),
    action("widgets_init", 0),
    action("register_sidebar", 1),
    action("wp_register_sidebar_widget", 1),
    action("wp_default_scripts", 1),
    action("wp_default_styles", 1),
    action("admin_bar_init", 0),
    action("add_admin_bar_menus", 1),
    action("wp_loaded", 0),
    action("parse_request", 1),
    action("send_headers", 1),
    action("parse_query", 1),
    action("pre_get_posts", 1),
    action("posts_selection", 1),
    action("wp", 1),
    action("template_redirect", 0),
    action("get_header", 2),
    action("wp_enqueue_scripts", 0),
    action("wp_head", 0),
    action("wp_print_styles", 0),
    action("wp_print_scripts", 0),
    action("get_search_form", 2),
    action("loop_start", 1),
    action("the_post", 2),
    action("loop_end", 1),
    action("get_sidebar", 2),
    action("dynamic_sidebar", 1),
    action("pre_get_comments", 1),
    action("wp_meta", 0),
    action("get_footer", 2),
    action("wp_footer", 0),
    action("wp_print_footer_scripts", 0),
    action("admin_bar_menu", 1),
    action("wp_before_admin_bar_render", 0),
    action("wp_after_admin_bar_render", 0),
    action("shutdown", 0),
    // Admin actions
    action("auth_redirect", 1),
    action("admin_menu", 1),
    action("user_admin_menu", 1),
    action("network_admin_menu", 1),
    action("admin_init", 0),
    action("current_screen", 1),
    action("admin_xml_ns", 0),
    action("admin_enqueue_scripts", 1),
    action("admin_print_styles", 0),
    action("admin_print_scripts", 0),
    action("admin_head", 0),
    action("in_admin_header", 0),
    action("admin_notices", 0),
    action("all_admin_notices", 0),
    action("restrict_manage_posts", 2),
    action("pre_user_query", 1),
    action("in_admin_footer", 0),
    action("admin_footer", 1),
    action("admin_print_footer_scripts", 0),
    action("wp_dashboard_setup", 0),
    // Post, Taxonomy, and Attachment actions
    action("post_submitbox_misc_actions", 1),
    action("add_attachment", 1),
    action("clean_post_cache", 2),
    action("delete_attachment", 2),
    action("wp_trash_post", 2),
    action("trashed_post", 2),
    action("untrash_post", 2),
    action("untrashed_post", 2),
    action("before_delete_post", 2),
    action("delete_post", 2),
    action("deleted_post", 2),
    action("edit_attachment", 1),
    action("edit_post", 2),
    action("pre_post_update", 2),
    action("post_updated", 3),
    action("transition_post_status", 3),
    action("publish_phone", 1),
    action("save_post", 3),
    action("updated_postmeta", 4),
    action("wp_insert_post", 3),
    action("xmlrpc_publish_post", 1),
    // Taxonomy and Term actions
    action("create_term", 4),
    action("created_term", 4),
    action("add_term_relationship", 3),
    action("added_term_relationship", 3),
    action("set_object_terms", 6),
    action("edit_terms", 3),
    action("edited_terms", 3),
    action("edit_term_taxonomy", 3),
    action("edited_term_taxonomy", 3),
    action("edit_term_taxonomies", 1),
    action("edited_term_taxonomies", 1),
    action("pre_delete_term", 2),
    action("delete_term_taxonomy", 1),
    action("deleted_term_taxonomy", 1),
    action("delete_term", 5),
    action("delete_term_relationships", 3),
    action("deleted_term_relationships", 3),
    action("clean_object_term_cache", 2),
    action("clean_term_cache", 3),
    action("split_shared_term", 4),
    // Comment, Ping, and Trackback actions
    action("comment_closed", 1),
    action("comment_id_not_found", 1),
    action("comment_flood_trigger", 2),
    action("comment_on_draft", 1),
    action("comment_post", 3),
    action("edit_comment", 2),
    action("delete_comment", 2),
    action("deleted_comment", 2),
    action("trash_comment", 2),
    action("trashed_comment", 2),
    action("untrash_comment", 2),
    action("untrashed_comment", 2),
    action("spam_comment", 2),
    action("spammed_comment", 2),
    action("unspam_comment", 2),
    action("unspammed_comment", 2),
    action("pingback_post", 1),
    action("pre_ping", 3),
    action("trackback_post", 1),
    action("wp_check_comment_disallowed_list", 6),
    action("wp_insert_comment", 2),
    action("wp_set_comment_status", 2),
    // RSS, Atom, and RDF actions
    action("add_link", 1),
    action("delete_link", 1),
    action("edit_link", 1),
    action("atom_entry", 0),
    action("atom_head", 0),
    action("atom_ns", 0),
    action("commentrss2_item", 2),
    action("rdf_header", 0),
    action("rdf_item", 0),
    action("rdf_ns", 0),
    action("rss_head", 0),
    action("rss_item", 0),
    action("rss2_head", 0),
    action("rss2_item", 0),
    action("rss2_ns", 0),
    // Template actions
    action("comment_form", 1),
    action("comment_form_after", 0),
    action("do_robots", 0),
    action("do_robotstxt", 0),
    action("switch_theme", 3),
    action("after_switch_theme", 2),
    // Management actions
    action("activity_box_end", 0),
    action("add_option", 2),
    action("added_option", 2),
    action("dbx_post_sidebar", 1),
    action("delete_option", 1),
    action("deleted_option", 1),
    action("delete_user", 3),
    action("edit_form_top", 1),
    action("edit_form_after_title", 1),
    action("edit_form_after_editor", 1),
    action("edit_form_advanced", 1),
    action("edit_page_form", 1),
    action("edit_user_profile", 1),
    action("login_form", 0),
    action("login_head", 0),
    action("lost_password", 1),
    action("lostpassword_form", 0),
    action("lostpassword_post", 2),
    action("manage_link_custom_column", 2),
    action("manage_posts_custom_column", 2),
    action("manage_posts_columns", 2),
    action("manage_pages_custom_column", 2),
    action("manage_pages_columns", 1),
    action("manage_media_custom_column", 2),
    action("manage_media_columns", 2),
    // Capped at 1: the second argument is the new password.
    action("password_reset", 1),
    action("personal_options_update", 1),
    action("profile_personal_options", 1),
    action("profile_update", 3),
    action("quick_edit_custom_box", 3),
    action("register_form", 0),
    action("register_post", 3),
    action("retrieve_password", 1),
    action("show_user_profile", 1),
    action("sidebar_admin_page", 0),
    action("sidebar_admin_setup", 0),
    action("update_option", 3),
    action("updated_option", 3),
    action("user_new_form", 1),
    action("user_profile_update_errors", 3),
    action("wpmu_new_user", 1),
    action("user_register", 2),
    action("welcome_panel", 0),
    // Capped at 1: the second argument is the password.
    action("wp_authenticate", 1),
    action("wp_login", 2),
    action("wp_logout", 1),
    // Advanced actions
    action("activated_plugin", 2),
    action("add_meta_boxes", 2),
    action("network_admin_notices", 0),
    action("user_admin_notices", 0),
    action("blog_privacy_selector", 0),
    action("check_admin_referer", 2),
    action("check_ajax_referer", 2),
    action("customize_controls_enqueue_scripts", 0),
    action("customize_register", 1),
    action("customize_preview_init", 0),
    action("deactivated_plugin", 2),
    action("generate_rewrite_rules", 1),
    action("upgrader_process_complete", 2),
    // Login actions
    action("login_init", 0),
    action("login_enqueue_scripts", 0),
    action("login_header", 0),
    action("admin_email_confirm", 1),
    action("admin_email_confirm_form", 0),
    action("validate_password_reset", 2),
    action("resetpass_form", 1),
    action("user_request_action_confirmed", 1),
    action("login_footer", 0),
];

fn index() -> &'static HashMap<&'static str, usize> {
    static INDEX: OnceLock<HashMap<&'static str, usize>> = OnceLock::new();
    INDEX.get_or_init(|| ALL_ACTIONS.iter().map(|d| (d.name, d.arity)).collect())
}

/// Arity of a known action, or `None` if the name is not in the catalog
pub fn lookup_arity(name: &str) -> Option<usize> {
    index().get(name).copied()
}

/// Full descriptor of a known action
pub fn descriptor(name: &str) -> Option<EventDescriptor> {
    index()
        .get_key_value(name)
        .map(|(name, arity)| EventDescriptor {
            name: *name,
            arity: *arity,
        })
}

pub fn is_known(name: &str) -> bool {
    index().contains_key(name)
}

/// Default actions in lifecycle order
pub fn defaults() -> impl Iterator<Item = EventDescriptor> {
    DEFAULT_ACTIONS.iter().copied()
}

/// Every known action in catalog order
pub fn all() -> impl Iterator<Item = EventDescriptor> {
    ALL_ACTIONS.iter().copied()
}

/// Every known action in request order: the default lifecycle actions as
/// the host fires them, then the rest in catalog order
pub fn lifecycle() -> impl Iterator<Item = EventDescriptor> {
    let default_set = default_names();
    defaults().chain(all().filter(move |d| !default_set.contains(d.name)))
}

pub fn default_names() -> BTreeSet<&'static str> {
    DEFAULT_ACTIONS.iter().map(|d| d.name).collect()
}

pub fn all_names() -> BTreeSet<&'static str> {
    ALL_ACTIONS.iter().map(|d| d.name).collect()
}

/// Resolve configured names against the full catalog
///
/// Unknown names are dropped. The result is ordered by catalog position.
pub fn resolve<'a, I>(names: I) -> Vec<EventDescriptor>
where
    I: IntoIterator<Item = &'a str>,
{
    let wanted: BTreeSet<&str> = names
        .into_iter()
        .filter(|name| {
            let known = is_known(name);
            if !known {
                tracing::debug!(action = name, "ignoring unknown action");
            }
            known
        })
        .collect();

    ALL_ACTIONS
        .iter()
        .filter(|d| wanted.contains(d.name))
        .copied()
        .collect()
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
