//! Builds the content resolver from config plus command-line overrides.

use anyhow::Result;
use navmenu_core::config::NavmenuConfig;
use navmenu_core::content_index::{load_content_index, StaticContentResolver};

use crate::cli::SiteArgs;

pub fn build_resolver(cfg: &NavmenuConfig, site: &SiteArgs) -> Result<StaticContentResolver> {
    let base_url = site
        .base_url
        .clone()
        .unwrap_or_else(|| cfg.base_url.clone());

    match site.index.as_ref().or(cfg.content_index.as_ref()) {
        Some(path) => {
            let index = load_content_index(path)?;
            Ok(StaticContentResolver::from_index(base_url, index))
        }
        None => Ok(StaticContentResolver::new(base_url)),
    }
}
