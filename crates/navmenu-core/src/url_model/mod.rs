//! URL modeling for menu links.
//!
//! Classifies editor-supplied link references, resolves them to usable URLs
//! through a [`ContentResolver`], and decides whether a resolved link points
//! at the current page.

mod active;
mod path;

pub use active::is_active;
pub use path::normalize_path;
pub(crate) use path::parse_url;

use crate::resolver::{ContentResolver, ContentType};

/// Kind of link reference entered for a menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlRef<'a> {
    /// `#` or an in-page `#fragment`; never points at another page.
    Placeholder(&'a str),
    /// Empty reference; the site homepage.
    Home,
    /// Parses as an absolute URL (has a scheme), or is protocol-relative
    /// (`//host/path`).
    Absolute(&'a str),
    /// Starts with `/`.
    RootRelative(&'a str),
    /// All ASCII digits; a content identifier.
    ContentId(u64),
    /// Anything else; looked up as a page or post slug.
    Slug(&'a str),
}

/// Classifies a raw link reference. Surrounding whitespace is ignored.
pub fn classify_ref(raw: &str) -> UrlRef<'_> {
    let r = raw.trim();
    if r.is_empty() {
        return UrlRef::Home;
    }
    if r.starts_with('#') {
        return UrlRef::Placeholder(r);
    }
    if r.starts_with("//") || url::Url::parse(r).is_ok() {
        return UrlRef::Absolute(r);
    }
    if r.starts_with('/') {
        return UrlRef::RootRelative(r);
    }
    if r.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(id) = r.parse::<u64>() {
            return UrlRef::ContentId(id);
        }
    }
    UrlRef::Slug(r)
}

/// Resolves a menu link reference to the URL placed in the rendered `href`.
///
/// - absolute and protocol-relative URLs are returned unchanged
/// - root-relative paths are joined to the site base URL
/// - numeric ids are looked up by id, then as a slug
/// - slugs are looked up as a page, then as a post
/// - anything unresolved becomes `base_url/ref`
///
/// Never fails; every branch has a usable result.
pub fn resolve_url(raw: &str, resolver: &dyn ContentResolver) -> String {
    let base = resolver.base_url();
    match classify_ref(raw) {
        UrlRef::Placeholder(r) => r.to_string(),
        UrlRef::Home => join_base(base, "/"),
        UrlRef::Absolute(r) => r.to_string(),
        UrlRef::RootRelative(r) => join_base(base, r),
        UrlRef::ContentId(id) => {
            if let Some(permalink) = resolver.permalink_by_id(id) {
                tracing::debug!("menu link {} resolved by id to {}", id, permalink);
                return permalink;
            }
            tracing::debug!("no content with id {}; trying slug lookup", id);
            resolve_slug(raw.trim(), resolver)
        }
        UrlRef::Slug(slug) => resolve_slug(slug, resolver),
    }
}

fn resolve_slug(slug: &str, resolver: &dyn ContentResolver) -> String {
    for content_type in ContentType::LOOKUP_ORDER {
        if let Some(permalink) = resolver.permalink_by_slug(slug, content_type) {
            tracing::debug!(
                "menu link {:?} resolved as {:?} to {}",
                slug,
                content_type,
                permalink
            );
            return permalink;
        }
    }
    let fallback = join_base(resolver.base_url(), &format!("/{slug}"));
    tracing::debug!("menu link {:?} unresolved; using {}", slug, fallback);
    fallback
}

/// Joins a root-relative path onto the base URL without doubling the slash.
fn join_base(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
