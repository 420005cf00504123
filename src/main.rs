//! catalog-tree CLI - browse hierarchical product catalogs
//!
//! Usage: catalog-tree <COMMAND>
//!
//! Commands:
//!   browse  Browse a catalog interactively
//!   render  Print the catalog tree once
//!   check   Report duplicate ids and invalid prices

use std::path::Path;

use anyhow::Result;
use clap::Parser;

use catalog_tree::config::Config;
use catalog_tree::presentation::{Cli, Commands};
use catalog_tree::ui::context::UiContext;
use catalog_tree::ui::output::print_config_warnings;

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    catalog_tree::logging::init(
        cli.verbose,
        cli.log_file.as_deref(),
        cli.command.is_interactive(),
    )?;

    let mut config = load_config(cli.config.as_deref())?;

    let page_size = match &cli.command {
        Commands::Browse { page_size, .. } | Commands::Render { page_size, .. } => *page_size,
        Commands::Check { .. } => None,
    };
    if let Some(size) = page_size {
        config.pagination.page_size = size;
    }
    config.validate()?;

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);
    log::debug!("{:?}", ui);

    match cli.command {
        Commands::Browse { catalog, .. } => commands::cmd_browse(&catalog, &config, &ui),
        Commands::Render {
            catalog,
            expand_all,
            view,
            ..
        } => commands::cmd_render(&catalog, expand_all, view.into(), &config, &ui),
        Commands::Check { catalog, strict } => commands::cmd_check(&catalog, strict, &ui),
    }
}

/// `--config` wins over the project/user lookup. Env overrides apply either way.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let unicode = catalog_tree::ui::terminal::detect_capabilities().supports_unicode;

    if let Some(path) = explicit {
        let (config, warnings) = Config::load_with_warnings(path)?;
        print_config_warnings(path, &warnings, unicode);
        return Ok(config.with_env_overrides());
    }

    let project_root = std::env::current_dir()?;
    let (config, source, warnings) = Config::load_or_default(Some(&project_root))?;
    if let Some(path) = source {
        log::debug!("loaded config from {}", path.display());
        print_config_warnings(&path, &warnings, unicode);
    }
    Ok(config)
}
