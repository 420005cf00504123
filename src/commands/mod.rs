//! Command handlers for the `catalog-tree` binary.

mod browse;
mod check;
mod render;

use std::path::Path;

pub use browse::cmd_browse;
pub use check::cmd_check;
pub use render::cmd_render;

/// Title shown above the tree: the file stem, or "stdin" for `-`.
fn catalog_title(path: &Path) -> String {
    if path == Path::new("-") {
        return "stdin".to_string();
    }
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
