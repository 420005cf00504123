//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --log-file, --config) are
//!   inherited by all subcommands
//! - `browse` is the only interactive command

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::ui::widgets::catalog_tree::ViewMode;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// View selected for every node that offers the products/categories switch
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewArg {
    #[default]
    Categories,
    Products,
}

impl From<ViewArg> for ViewMode {
    fn from(value: ViewArg) -> Self {
        match value {
            ViewArg::Categories => ViewMode::Categories,
            ViewArg::Products => ViewMode::Products,
        }
    }
}

/// catalog-tree - browse hierarchical product catalogs in the terminal
#[derive(Parser, Debug)]
#[command(name = "catalog-tree")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Catalog files may be JSON, TOML or YAML. Use '-' to read JSON from stdin.")]
pub struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write log output to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Use this config file instead of the project/user lookup
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse a catalog interactively
    Browse {
        /// Catalog file (.json, .toml, .yaml) or '-' for stdin
        catalog: PathBuf,

        /// Products revealed per page
        #[arg(long, value_name = "N")]
        page_size: Option<usize>,
    },

    /// Print the catalog tree once
    Render {
        /// Catalog file (.json, .toml, .yaml) or '-' for stdin
        catalog: PathBuf,

        /// Products revealed per page
        #[arg(long, value_name = "N")]
        page_size: Option<usize>,

        /// Expand every node
        #[arg(long)]
        expand_all: bool,

        /// View for nodes that have both products and subcategories
        #[arg(long, value_enum, default_value = "categories")]
        view: ViewArg,
    },

    /// Report duplicate ids and invalid prices
    Check {
        /// Catalog file (.json, .toml, .yaml) or '-' for stdin
        catalog: PathBuf,

        /// Exit non-zero when any issue is found
        #[arg(long)]
        strict: bool,
    },
}

impl Commands {
    /// Only `browse` takes over the terminal
    pub fn is_interactive(&self) -> bool {
        matches!(self, Commands::Browse { .. })
    }
}
