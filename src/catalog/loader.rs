//! Catalog file loading

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Catalog, CatalogNode};

/// On-disk catalog formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
    Yaml,
}

impl CatalogFormat {
    /// Pick a format from the file extension.
    pub fn from_path(path: &Path) -> CatalogResult<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(CatalogFormat::Json),
            "toml" => Ok(CatalogFormat::Toml),
            "yaml" | "yml" => Ok(CatalogFormat::Yaml),
            _ => Err(CatalogError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// The table form of a catalog file. `categories` is required and no
/// other key is allowed, so a lone category object or a misspelled key
/// is an error rather than an empty catalog.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogTable {
    categories: Vec<CatalogNode>,
}

impl From<CatalogTable> for Catalog {
    fn from(table: CatalogTable) -> Self {
        Catalog::new(table.categories)
    }
}

/// Load a catalog from `path`. `-` reads JSON from stdin.
pub fn load(path: &Path) -> CatalogResult<Catalog> {
    let catalog = if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        from_json_str(&content)?
    } else {
        let format = CatalogFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        load_str(&content, format)?
    };

    log::debug!(
        "loaded catalog from {} ({} root categories)",
        path.display(),
        catalog.categories.len()
    );
    Ok(catalog)
}

/// Parse catalog text in the given format.
pub fn load_str(content: &str, format: CatalogFormat) -> CatalogResult<Catalog> {
    match format {
        CatalogFormat::Json => from_json_str(content),
        CatalogFormat::Toml => Ok(toml::from_str::<CatalogTable>(content)?.into()),
        CatalogFormat::Yaml => Ok(serde_yaml_ng::from_str::<CatalogTable>(content)?.into()),
    }
}

/// Parse a JSON catalog: a bare array of root categories, or an object
/// with a `categories` key.
///
/// The form is picked from the first token so serde_json reports errors
/// with their line and column.
pub fn from_json_str(content: &str) -> CatalogResult<Catalog> {
    if content.trim_start().starts_with('[') {
        let categories: Vec<CatalogNode> = serde_json::from_str(content)?;
        return Ok(Catalog::new(categories));
    }
    let table: CatalogTable = serde_json::from_str(content)?;
    Ok(table.into())
}
