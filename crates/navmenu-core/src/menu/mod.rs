//! Sidebar menu resolution.
//!
//! Takes the editor-configured item list and the current request URL and
//! produces a fresh [`ResolvedMenu`]: one entry per item, in input order, with
//! its resolved link and active flag. Nothing is cached between calls.

mod file;

pub use file::{load_menu, MenuDefinition, MenuFileError};

use serde::{Deserialize, Serialize};

use crate::resolver::ContentResolver;
use crate::url_model::{is_active, resolve_url};

/// One configured menu entry.
///
/// Deserializes from block attributes (`url`, `isActive`) as well as the
/// snake_case names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(default)]
    pub label: String,
    /// Absolute URL, root-relative path, content id, slug, or `#`.
    #[serde(default, rename = "url", alias = "urlRef", alias = "url_ref")]
    pub url_ref: String,
    /// Editor-chosen default highlight, used only when no link matches.
    #[serde(
        default,
        rename = "active",
        alias = "isActive",
        alias = "manual_active"
    )]
    pub manual_active: bool,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, url_ref: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url_ref: url_ref.into(),
            manual_active: false,
        }
    }

    pub fn with_manual_active(mut self, manual_active: bool) -> Self {
        self.manual_active = manual_active;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMenuItem {
    pub item: MenuItem,
    pub resolved_url: String,
    pub is_active: bool,
}

/// Menu entries ready for rendering, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedMenu {
    entries: Vec<ResolvedMenuItem>,
}

impl ResolvedMenu {
    pub fn entries(&self) -> &[ResolvedMenuItem] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedMenuItem> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels of every entry marked active, in display order.
    pub fn active_labels(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.is_active)
            .map(|e| e.item.label.as_str())
            .collect()
    }
}

impl<'a> IntoIterator for &'a ResolvedMenu {
    type Item = &'a ResolvedMenuItem;
    type IntoIter = std::slice::Iter<'a, ResolvedMenuItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Resolves every item's link and decides which items are active.
///
/// An item is active when its link matches `current_url`. Only if no item
/// matches do the items flagged `manual_active` become active instead; every
/// flagged item is marked, not just the first.
pub fn resolve_menu(
    items: &[MenuItem],
    current_url: &str,
    resolver: &dyn ContentResolver,
) -> ResolvedMenu {
    let matched: Vec<(String, bool)> = items
        .iter()
        .map(|item| {
            let resolved = resolve_url(&item.url_ref, resolver);
            let active = is_active(&resolved, current_url);
            (resolved, active)
        })
        .collect();

    let any_url_matched = matched.iter().any(|(_, active)| *active);
    tracing::debug!(
        "resolved {} menu items for {} (url match: {})",
        items.len(),
        current_url,
        any_url_matched
    );

    let entries = items
        .iter()
        .zip(matched)
        .map(|(item, (resolved_url, url_active))| ResolvedMenuItem {
            item: item.clone(),
            resolved_url,
            is_active: url_active || (!any_url_matched && item.manual_active),
        })
        .collect();

    ResolvedMenu { entries }
}
