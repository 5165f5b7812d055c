//! CLI for resolving and rendering sidebar menus.

mod commands;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use navmenu_core::config::{self, NavmenuConfig};
use std::path::PathBuf;

use commands::{run_active, run_completions, run_order_id, run_render, run_resolve};

/// Top-level CLI for the sidebar menu resolver.
#[derive(Debug, Parser)]
#[command(name = "navmenu")]
#[command(about = "Resolve menu links and render the NaLi sidebar menu", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/navmenu/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Where content ids and slugs are looked up.
#[derive(Debug, Clone, Default, Args)]
pub struct SiteArgs {
    /// JSON content index (overrides `content_index` in config).
    #[arg(long, value_name = "PATH")]
    pub index: Option<PathBuf>,

    /// Site base URL (overrides `base_url` in config).
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Render a menu definition (TOML, or JSON block attributes) as HTML.
    Render {
        /// Path to the menu definition.
        menu: PathBuf,

        /// Full URL of the page the menu is rendered on.
        #[arg(long, value_name = "URL")]
        current_url: String,

        /// Heading above the list (overrides the menu file and config).
        #[arg(long)]
        title: Option<String>,

        #[command(flatten)]
        site: SiteArgs,
    },

    /// Resolve a single link reference (URL, path, id, or slug).
    Resolve {
        /// Link reference as entered in the editor.
        reference: String,

        #[command(flatten)]
        site: SiteArgs,
    },

    /// Check whether a resolved link is active for the current URL.
    Active {
        /// Resolved menu link.
        item_url: String,
        /// Full URL of the current page.
        current_url: String,
    },

    /// Print the order id addressed by an order-details URL.
    OrderId {
        /// URL of the order-details page.
        url: String,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let config_override = cli.config;

        // Only the commands that resolve links need the site config.
        let load_config = || -> Result<NavmenuConfig> {
            let cfg = match config_override.as_deref() {
                Some(path) => config::load_from(path)?,
                None => config::load_or_init()?,
            };
            tracing::debug!("loaded config: {:?}", cfg);
            Ok(cfg)
        };

        match cli.command {
            CliCommand::Render {
                menu,
                current_url,
                title,
                site,
            } => run_render(&load_config()?, &site, &menu, &current_url, title)?,
            CliCommand::Resolve { reference, site } => {
                run_resolve(&load_config()?, &site, &reference)?
            }
            CliCommand::Active {
                item_url,
                current_url,
            } => run_active(&item_url, &current_url),
            CliCommand::OrderId { url } => run_order_id(&url),
            CliCommand::Completions { shell } => run_completions(shell, &mut Cli::command()),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
