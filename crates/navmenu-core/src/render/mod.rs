//! HTML rendering of a resolved sidebar menu.
//!
//! The markup and class names are the front-end contract: styles and the
//! client-side script select on `chuyennhanali-menu-*` and `is-active`.

mod escape;

pub use escape::{escape_html_attr, escape_html_text};

use crate::menu::{ResolvedMenu, ResolvedMenuItem};

pub const BLOCK_CLASS: &str = "chuyennhanali-sidebar-menu-block";
pub const TITLE_CLASS: &str = "chuyennhanali-menu-title";
pub const LIST_CLASS: &str = "chuyennhanali-menu-list";
pub const ITEM_CLASS: &str = "chuyennhanali-menu-item";
pub const LINK_CLASS: &str = "chuyennhanali-menu-link";
pub const EMPTY_CLASS: &str = "chuyennhanali-menu-empty";
pub const ACTIVE_CLASS: &str = "is-active";

pub const DEFAULT_EMPTY_MESSAGE: &str = "No menu items.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Heading above the list; omitted when `None` or blank.
    pub title: Option<String>,
    /// Shown instead of the list when the menu has no items.
    pub empty_message: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: None,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }
}

/// Renders the menu as an HTML fragment. Output is deterministic for a
/// given menu and options.
pub fn render_menu(menu: &ResolvedMenu, options: &RenderOptions) -> String {
    let mut out = String::new();
    out.push_str(&format!("<div class=\"{BLOCK_CLASS}\">\n"));

    if let Some(title) = options.title.as_deref().filter(|t| !t.trim().is_empty()) {
        out.push_str(&format!(
            "  <h4 class=\"{TITLE_CLASS}\">{}</h4>\n",
            escape_html_text(title.trim())
        ));
    }

    if menu.is_empty() {
        out.push_str(&format!(
            "  <p class=\"{EMPTY_CLASS}\">{}</p>\n",
            escape_html_text(&options.empty_message)
        ));
    } else {
        out.push_str(&format!("  <ul class=\"{LIST_CLASS}\">\n"));
        for (index, entry) in menu.iter().enumerate() {
            out.push_str(&render_item(index, entry));
        }
        out.push_str("  </ul>\n");
    }

    out.push_str("</div>\n");
    out
}

fn render_item(index: usize, entry: &ResolvedMenuItem) -> String {
    let label = if entry.item.label.trim().is_empty() {
        format!("Menu {}", index + 1)
    } else {
        entry.item.label.trim().to_string()
    };
    let href = escape_html_attr(&entry.resolved_url);
    let label = escape_html_text(&label);

    if entry.is_active {
        format!(
            "    <li class=\"{ITEM_CLASS} {ACTIVE_CLASS}\"><a class=\"{LINK_CLASS}\" href=\"{href}\" aria-current=\"page\">{label}<span class=\"active-indicator\" aria-hidden=\"true\"></span></a></li>\n"
        )
    } else {
        format!(
            "    <li class=\"{ITEM_CLASS}\"><a class=\"{LINK_CLASS}\" href=\"{href}\">{label}</a></li>\n"
        )
    }
}
