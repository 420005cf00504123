//! Configuration module for catalog-tree
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CATALOG_TREE_*)
//! 3. Project config (./catalog-tree.toml)
//! 4. User config (<config dir>/catalog-tree/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, OutputConfig, PaginationConfig};
