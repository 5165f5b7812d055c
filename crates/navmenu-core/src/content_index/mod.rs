//! Static content index: a file-backed stand-in for the host site's content
//! lookups.
//!
//! Maps page/post ids and slugs to permalinks so menus can be resolved
//! outside the CMS (CLI rendering, snapshot tests).

mod parse;

pub use parse::{ContentEntry, ContentIndex};

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

use crate::resolver::{ContentResolver, ContentType};

/// Reads and parses a JSON content index.
pub fn load_content_index(path: &Path) -> Result<ContentIndex> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read content index: {}", path.display()))?;
    let index: ContentIndex = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse content index JSON: {}", path.display()))?;
    tracing::info!(
        "loaded {} content entries from {}",
        index.entries.len(),
        path.display()
    );
    Ok(index)
}

type SlugKey = (ContentType, String);

/// In-memory [`ContentResolver`] over a fixed set of entries.
#[derive(Debug, Clone)]
pub struct StaticContentResolver {
    base_url: String,
    by_id: HashMap<u64, IndexedEntry>,
    /// Slug key to the id that currently owns it.
    by_slug: HashMap<SlugKey, u64>,
}

#[derive(Debug, Clone)]
struct IndexedEntry {
    slug_key: SlugKey,
    permalink: String,
}

impl StaticContentResolver {
    /// Resolver with no content; every lookup misses.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            by_id: HashMap::new(),
            by_slug: HashMap::new(),
        }
    }

    pub fn from_index(base_url: impl Into<String>, index: ContentIndex) -> Self {
        let mut resolver = Self::new(base_url);
        for entry in index.entries {
            resolver.insert(entry);
        }
        resolver
    }

    /// Adds an entry. A repeated id replaces the earlier entry entirely,
    /// including its slug; a repeated (type, slug) points at the newer id.
    pub fn insert(&mut self, entry: ContentEntry) {
        let permalink = entry
            .permalink
            .clone()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| self.pretty_permalink(&entry.slug));
        let slug_key = (entry.content_type, entry.slug);

        let indexed = IndexedEntry {
            slug_key: slug_key.clone(),
            permalink,
        };
        if let Some(previous) = self.by_id.insert(entry.id, indexed) {
            tracing::warn!(
                "duplicate content id {}: slug {:?} replaced by {:?}",
                entry.id,
                previous.slug_key.1,
                slug_key.1
            );
            if self.by_slug.get(&previous.slug_key) == Some(&entry.id) {
                self.by_slug.remove(&previous.slug_key);
            }
        }
        self.by_slug.insert(slug_key, entry.id);
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    fn pretty_permalink(&self, slug: &str) -> String {
        format!(
            "{}/{}/",
            self.base_url.trim_end_matches('/'),
            slug.trim_matches('/')
        )
    }
}

impl ContentResolver for StaticContentResolver {
    fn permalink_by_id(&self, id: u64) -> Option<String> {
        self.by_id.get(&id).map(|e| e.permalink.clone())
    }

    fn permalink_by_slug(&self, slug: &str, content_type: ContentType) -> Option<String> {
        let id = self.by_slug.get(&(content_type, slug.to_string()))?;
        self.permalink_by_id(*id)
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn entry(id: u64, slug: &str, ty: ContentType, permalink: Option<&str>) -> ContentEntry {
        ContentEntry {
            id,
            slug: slug.to_string(),
            content_type: ty,
            permalink: permalink.map(String::from),
        }
    }

    #[test]
    fn pretty_permalink_when_missing() {
        let mut r = StaticContentResolver::new("https://site.test/");
        r.insert(entry(3, "about", ContentType::Page, None));
        assert_eq!(
            r.permalink_by_id(3).as_deref(),
            Some("https://site.test/about/")
        );
        assert_eq!(
            r.permalink_by_slug("about", ContentType::Page).as_deref(),
            Some("https://site.test/about/")
        );
        assert!(r.permalink_by_slug("about", ContentType::Post).is_none());
    }

    #[test]
    fn explicit_permalink_wins() {
        let mut r = StaticContentResolver::new("https://site.test");
        r.insert(entry(
            9,
            "hello",
            ContentType::Post,
            Some("https://site.test/2024/05/hello/"),
        ));
        assert_eq!(
            r.permalink_by_slug("hello", ContentType::Post).as_deref(),
            Some("https://site.test/2024/05/hello/")
        );
    }

    #[test]
    fn duplicate_id_last_wins() {
        let mut r = StaticContentResolver::new("https://site.test");
        r.insert(entry(1, "old", ContentType::Page, None));
        r.insert(entry(1, "new", ContentType::Page, None));
        assert_eq!(r.len(), 1);
        assert_eq!(
            r.permalink_by_id(1).as_deref(),
            Some("https://site.test/new/")
        );
        assert_eq!(
            r.permalink_by_slug("new", ContentType::Page).as_deref(),
            Some("https://site.test/new/")
        );
        assert!(r.permalink_by_slug("old", ContentType::Page).is_none());
    }

    #[test]
    fn shared_slug_survives_other_id_replacement() {
        let mut r = StaticContentResolver::new("https://site.test");
        r.insert(entry(1, "shared", ContentType::Page, None));
        r.insert(entry(2, "shared", ContentType::Page, Some("https://site.test/?page_id=2")));
        r.insert(entry(1, "moved", ContentType::Page, None));
        assert_eq!(
            r.permalink_by_slug("shared", ContentType::Page).as_deref(),
            Some("https://site.test/?page_id=2")
        );
        assert_eq!(
            r.permalink_by_slug("moved", ContentType::Page).as_deref(),
            Some("https://site.test/moved/")
        );
    }

    #[test]
    fn load_index_from_json() {
        let json = r#"{
            "entries": [
                { "id": 12, "slug": "tai-khoan" },
                { "id": 40, "slug": "tin-tuc", "type": "post", "permalink": "https://site.test/?p=40" }
            ]
        }"#;
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(json.as_bytes()).unwrap();
        f.flush().unwrap();

        let index = load_content_index(f.path()).unwrap();
        assert_eq!(index.entries.len(), 2);
        assert_eq!(index.entries[0].content_type, ContentType::Page);
        assert_eq!(index.entries[1].content_type, ContentType::Post);

        let r = StaticContentResolver::from_index("https://site.test", index);
        assert_eq!(
            r.permalink_by_id(40).as_deref(),
            Some("https://site.test/?p=40")
        );
    }

    #[test]
    fn load_index_malformed_err() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"{ not json").unwrap();
        f.flush().unwrap();
        let err = load_content_index(f.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("parse content index JSON"));
    }

    #[test]
    fn load_index_missing_file_err() {
        assert!(load_content_index(Path::new("/nonexistent/navmenu/index.json")).is_err());
    }
}
