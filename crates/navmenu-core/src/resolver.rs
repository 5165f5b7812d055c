//! Content resolver interface for turning content ids and slugs into permalinks.
//!
//! Menu resolution only depends on this trait and does not know where the
//! content lives (a host CMS, a static index, a test fixture).

use serde::{Deserialize, Serialize};

/// Kind of content a slug is looked up under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Page,
    Post,
}

impl ContentType {
    /// Order in which slug lookups are attempted.
    pub const LOOKUP_ORDER: [ContentType; 2] = [ContentType::Page, ContentType::Post];
}

/// Capability supplied by the host site.
pub trait ContentResolver {
    /// Permalink of the content with the given numeric id, if it exists.
    fn permalink_by_id(&self, id: u64) -> Option<String>;

    /// Permalink of the content with the given slug and type, if it exists.
    fn permalink_by_slug(&self, slug: &str, content_type: ContentType) -> Option<String>;

    /// Site base URL (scheme + host, optionally a path prefix).
    fn base_url(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_is_looked_up_before_post() {
        assert_eq!(
            ContentType::LOOKUP_ORDER,
            [ContentType::Page, ContentType::Post]
        );
        assert_eq!(ContentType::default(), ContentType::Page);
    }

    #[test]
    fn content_type_serde_lowercase() {
        let t: ContentType = serde_json::from_str("\"post\"").unwrap();
        assert_eq!(t, ContentType::Post);
        assert_eq!(serde_json::to_string(&ContentType::Page).unwrap(), "\"page\"");
    }
}
