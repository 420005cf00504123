//! Error types for catalog-tree
//!
//! The tree widget itself never fails; these cover loading catalogs,
//! reading configuration and driving the terminal.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for catalog-tree operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Main error type for catalog-tree operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON catalog could not be parsed
    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML catalog could not be parsed
    #[error("invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    /// YAML catalog could not be parsed
    #[error("invalid YAML catalog: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Catalog file extension is not one we know how to read
    #[error("unsupported catalog format for {path} (expected .json, .toml, .yaml or .yml)")]
    UnsupportedFormat { path: PathBuf },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Page size must reveal at least one product per step
    #[error("page size must be at least 1 (got {value})")]
    InvalidPageSize { value: usize },

    /// Interactive browsing needs a real terminal
    #[error("browse requires an interactive terminal; use `catalog-tree render` instead")]
    NotATerminal,

    /// A global logger was already installed
    #[error("failed to initialize logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}
