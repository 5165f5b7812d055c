//! On-disk content index format.

use serde::{Deserialize, Serialize};

use crate::resolver::ContentType;

/// Root of a content index file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentIndex {
    #[serde(default)]
    pub entries: Vec<ContentEntry>,
}

/// One published page or post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentEntry {
    pub id: u64,
    pub slug: String,
    #[serde(default, rename = "type")]
    pub content_type: ContentType,
    /// Canonical URL; when absent the pretty permalink `base/slug/` is used.
    #[serde(default)]
    pub permalink: Option<String>,
}
