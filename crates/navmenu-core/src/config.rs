use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::render::{RenderOptions, DEFAULT_EMPTY_MESSAGE};

/// Global configuration loaded from `~/.config/navmenu/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavmenuConfig {
    /// Site base URL that root-relative links and unresolved slugs are joined to.
    pub base_url: String,
    /// Optional heading rendered above the menu list.
    #[serde(default)]
    pub menu_title: Option<String>,
    /// Message rendered when a menu has no items.
    #[serde(default = "default_empty_message")]
    pub empty_message: String,
    /// Optional JSON content index used to resolve ids and slugs.
    #[serde(default)]
    pub content_index: Option<PathBuf>,
}

fn default_empty_message() -> String {
    DEFAULT_EMPTY_MESSAGE.to_string()
}

impl Default for NavmenuConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost".to_string(),
            menu_title: None,
            empty_message: default_empty_message(),
            content_index: None,
        }
    }
}

impl NavmenuConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            title: self.menu_title.clone(),
            empty_message: self.empty_message.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("navmenu")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<NavmenuConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = NavmenuConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<NavmenuConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: NavmenuConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_values() {
        let cfg = NavmenuConfig::default();
        assert_eq!(cfg.base_url, "http://localhost");
        assert!(cfg.menu_title.is_none());
        assert_eq!(cfg.empty_message, "No menu items.");
        assert!(cfg.content_index.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = NavmenuConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: NavmenuConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.base_url, cfg.base_url);
        assert_eq!(parsed.empty_message, cfg.empty_message);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            base_url = "https://chuyennhanali.com"
            menu_title = "Tài khoản của tôi"
            empty_message = "Chưa có menu nào."
            content_index = "/var/lib/navmenu/index.json"
        "#;
        let cfg: NavmenuConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.base_url, "https://chuyennhanali.com");
        assert_eq!(cfg.menu_title.as_deref(), Some("Tài khoản của tôi"));
        assert_eq!(cfg.empty_message, "Chưa có menu nào.");
        assert_eq!(
            cfg.content_index.as_deref(),
            Some(Path::new("/var/lib/navmenu/index.json"))
        );

        let opts = cfg.render_options();
        assert_eq!(opts.title.as_deref(), Some("Tài khoản của tôi"));
        assert_eq!(opts.empty_message, "Chưa có menu nào.");
    }

    #[test]
    fn config_toml_minimal_uses_defaults() {
        let cfg: NavmenuConfig = toml::from_str("base_url = \"https://site.test\"").unwrap();
        assert_eq!(cfg.empty_message, "No menu items.");
        assert!(cfg.menu_title.is_none());
    }

    #[test]
    fn load_from_file() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"base_url = \"https://site.test\"\n").unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.base_url, "https://site.test");
    }

    #[test]
    fn load_from_missing_base_url_err() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"menu_title = \"x\"\n").unwrap();
        f.flush().unwrap();
        assert!(load_from(f.path()).is_err());
    }
}
