//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CatalogError, CatalogResult};

use super::types::{ColorMode, Config};

/// Project-level config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "catalog-tree.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CatalogResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CatalogError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    log::debug!("loaded config from {}", path.display());
    Ok((config, warnings))
}

/// Load from project config, user config, or defaults, then apply
/// environment overrides.
pub fn load_or_default(
    project_root: Option<&Path>,
) -> CatalogResult<(Config, Option<PathBuf>, Vec<ConfigWarning>)> {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for candidate in candidates {
        if candidate.exists() {
            let (config, warnings) = load_with_warnings(&candidate)?;
            let config = with_env_overrides(config, |key| std::env::var(key).ok());
            return Ok((config, Some(candidate), warnings));
        }
    }

    let config = with_env_overrides(Config::default(), |key| std::env::var(key).ok());
    Ok((config, None, Vec::new()))
}

/// Apply environment variable overrides (CATALOG_TREE_* prefix).
///
/// Values that do not parse are ignored.
pub fn with_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // CATALOG_TREE_PAGE_SIZE
    if let Some(size) = get_env("CATALOG_TREE_PAGE_SIZE") {
        match size.trim().parse::<usize>() {
            Ok(size) if size > 0 => config.pagination.page_size = size,
            _ => log::warn!("ignoring invalid CATALOG_TREE_PAGE_SIZE={:?}", size),
        }
    }

    // CATALOG_TREE_COLOR
    if let Some(color) = get_env("CATALOG_TREE_COLOR") {
        match color.to_lowercase().as_str() {
            "auto" => config.output.color = ColorMode::Auto,
            "always" => config.output.color = ColorMode::Always,
            "never" => config.output.color = ColorMode::Never,
            _ => log::warn!("ignoring invalid CATALOG_TREE_COLOR={:?}", color),
        }
    }

    // CATALOG_TREE_UNICODE
    if let Some(val) = get_env("CATALOG_TREE_UNICODE") {
        config.output.unicode = val.to_lowercase() != "false" && val != "0";
    }

    config
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("catalog-tree").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["pagination", "page_size", "output", "color", "unicode"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
