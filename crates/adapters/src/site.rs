// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Site information used by custom action handlers

use serde::{Deserialize, Serialize};

/// An installed theme and, for child themes, its parent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Stylesheet directory identifying the theme
    pub stylesheet: String,
    pub parent: Option<Box<Theme>>,
}

impl Theme {
    pub fn new(stylesheet: impl Into<String>) -> Self {
        Self {
            stylesheet: stylesheet.into(),
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: Theme) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// Build a theme from a chain ordered child first
    pub fn from_chain<I, S>(chain: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        I::IntoIter: DoubleEndedIterator,
        S: Into<String>,
    {
        chain.into_iter().rev().fold(None, |parent, stylesheet| {
            let theme = Theme::new(stylesheet);
            Some(match parent {
                Some(p) => theme.with_parent(p),
                None => theme,
            })
        })
    }

    /// Stylesheets of this theme followed by each ancestor
    pub fn chain(&self) -> Vec<&str> {
        let mut chain = vec![self.stylesheet.as_str()];
        let mut current = self;
        while let Some(parent) = current.parent.as_deref() {
            chain.push(parent.stylesheet.as_str());
            current = parent;
        }
        chain
    }
}

/// Read access to the running site
pub trait SiteInfo: Send + Sync {
    fn active_theme(&self) -> Option<Theme>;
    fn active_plugins(&self) -> Vec<String>;
}

/// Site information fixed at construction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSite {
    theme: Option<Theme>,
    plugins: Vec<String>,
}

impl StaticSite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_plugins<I, S>(mut self, plugins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.plugins = plugins.into_iter().map(Into::into).collect();
        self
    }
}

impl SiteInfo for StaticSite {
    fn active_theme(&self) -> Option<Theme> {
        self.theme.clone()
    }

    fn active_plugins(&self) -> Vec<String> {
        self.plugins.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_lists_child_then_ancestors() {
        let theme = Theme::new("grandchild")
            .with_parent(Theme::new("child").with_parent(Theme::new("base")));
        assert_eq!(theme.chain(), vec!["grandchild", "child", "base"]);
    }

    #[test]
    fn from_chain_builds_parent_links() {
        let theme = Theme::from_chain(["kid", "parent", "root"]).unwrap();
        assert_eq!(theme.stylesheet, "kid");
        assert_eq!(theme.chain(), vec!["kid", "parent", "root"]);
    }

    #[test]
    fn from_empty_chain_is_none() {
        assert!(Theme::from_chain(Vec::<String>::new()).is_none());
    }

    #[test]
    fn static_site_reports_configuration() {
        let site = StaticSite::new()
            .with_theme(Theme::new("twentytwentyfour"))
            .with_plugins(["akismet/akismet.php", "rollbar/rollbar.php"]);

        assert_eq!(site.active_theme().unwrap().stylesheet, "twentytwentyfour");
        assert_eq!(site.active_plugins().len(), 2);
        assert!(StaticSite::new().active_theme().is_none());
    }
}
