//! Menu definition files (TOML, or JSON block attributes).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::MenuItem;

/// A menu as configured in the editor: optional title plus ordered items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDefinition {
    #[serde(default, alias = "menuTitle")]
    pub title: Option<String>,
    #[serde(default, alias = "menuItems")]
    pub items: Vec<MenuItem>,
}

#[derive(Debug, thiserror::Error)]
pub enum MenuFileError {
    #[error("read menu file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse menu TOML {}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("parse menu JSON {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads a menu definition. `.json` files are read as block attributes
/// (`menuTitle`, `menuItems`); anything else is TOML.
pub fn load_menu(path: &Path) -> Result<MenuDefinition, MenuFileError> {
    let data = std::fs::read_to_string(path).map_err(|source| MenuFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let menu: MenuDefinition = if is_json {
        serde_json::from_str(&data).map_err(|source| MenuFileError::Json {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        toml::from_str(&data).map_err(|source| MenuFileError::Toml {
            path: path.to_path_buf(),
            source,
        })?
    };

    tracing::info!(
        "loaded menu with {} items from {}",
        menu.items.len(),
        path.display()
    );
    Ok(menu)
}
