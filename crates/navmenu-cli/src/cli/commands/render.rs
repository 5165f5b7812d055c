//! `navmenu render <menu> --current-url <url>` – print the menu HTML.

use anyhow::Result;
use navmenu_core::config::NavmenuConfig;
use navmenu_core::menu::{load_menu, resolve_menu};
use navmenu_core::render::render_menu;
use std::path::Path;

use super::site::build_resolver;
use crate::cli::SiteArgs;

pub fn run_render(
    cfg: &NavmenuConfig,
    site: &SiteArgs,
    menu_path: &Path,
    current_url: &str,
    title: Option<String>,
) -> Result<()> {
    let resolver = build_resolver(cfg, site)?;
    let definition = load_menu(menu_path)?;

    // Title precedence: flag, then menu file, then config.
    let mut options = cfg.render_options();
    if let Some(t) = title.or(definition.title) {
        options.title = Some(t);
    }

    let menu = resolve_menu(&definition.items, current_url, &resolver);
    print!("{}", render_menu(&menu, &options));
    Ok(())
}
