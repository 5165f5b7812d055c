//! Active-link matching.

use super::path::normalize_path;

/// True if a resolved menu link points at the current page.
///
/// Both URLs are reduced with [`normalize_path`]. A homepage link (empty
/// path) only matches the homepage. Any other link matches when the current
/// path equals it or continues it at a `/` boundary, so `/blog` matches
/// `/blog/post-1` but not `/blog-archive`. Empty, `#` and unparseable links
/// never match.
pub fn is_active(item_url: &str, current_url: &str) -> bool {
    let item = item_url.trim();
    if item.is_empty() || item.starts_with('#') {
        return false;
    }

    let (Some(item_path), Some(current_path)) =
        (normalize_path(item), normalize_path(current_url))
    else {
        return false;
    };

    if item_path.is_empty() {
        return current_path.is_empty();
    }

    match current_path.strip_prefix(item_path.as_str()) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_respects_segment_boundary() {
        assert!(is_active("https://site.test/blog", "https://site.test/blog/post-1"));
        assert!(is_active("https://site.test/blog/", "https://site.test/blog"));
        assert!(!is_active("https://site.test/blog", "https://site.test/blog-archive"));
    }

    #[test]
    fn homepage_only_matches_homepage() {
        assert!(is_active("https://site.test/", "https://site.test/?utm=x"));
        assert!(is_active("https://site.test", "https://site.test/#hero"));
        assert!(!is_active("https://site.test/", "https://site.test/shop"));
    }

    #[test]
    fn placeholders_never_match() {
        assert!(!is_active("#", "https://site.test/"));
        assert!(!is_active("", "https://site.test/"));
        assert!(!is_active("#orders", "https://site.test/orders"));
    }

    #[test]
    fn host_is_ignored() {
        assert!(is_active("https://cdn.test/docs", "https://site.test/docs/intro"));
    }

    #[test]
    fn unencoded_link_matches_encoded_current_url() {
        assert!(is_active(
            "https://site.test/tài-khoản",
            "https://site.test/t%C3%A0i-kho%E1%BA%A3n/orders"
        ));
        assert!(!is_active(
            "https://site.test/tài-khoản",
            "https://site.test/t%C3%A0i-kho%E1%BA%A3n-cu"
        ));
    }

    #[test]
    fn unparseable_urls_never_match() {
        assert!(!is_active("http://[broken/x", "https://site.test/x"));
        assert!(!is_active("/x", "http://[broken/x"));
    }

    #[test]
    fn query_on_item_is_ignored() {
        assert!(is_active("/orders?status=done", "https://site.test/orders"));
    }
}
