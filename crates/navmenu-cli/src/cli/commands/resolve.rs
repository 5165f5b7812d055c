//! `navmenu resolve <ref>` – print the URL a link reference resolves to.

use anyhow::Result;
use navmenu_core::config::NavmenuConfig;
use navmenu_core::url_model::resolve_url;

use super::site::build_resolver;
use crate::cli::SiteArgs;

pub fn run_resolve(cfg: &NavmenuConfig, site: &SiteArgs, reference: &str) -> Result<()> {
    let resolver = build_resolver(cfg, site)?;
    println!("{}", resolve_url(reference, &resolver));
    Ok(())
}
