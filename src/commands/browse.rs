use std::path::Path;

use anyhow::Result;

use catalog_tree::error::CatalogError;
use catalog_tree::ui::context::UiContext;
use catalog_tree::ui::widgets::catalog_tree::run_interactive;
use catalog_tree::{catalog, CatalogTree, Config, Pagination};

pub fn cmd_browse(catalog_path: &Path, config: &Config, ui: &UiContext) -> Result<()> {
    if !ui.caps.is_tty {
        return Err(CatalogError::NotATerminal.into());
    }

    let catalog = catalog::load(catalog_path)?;
    log::info!(
        "browsing {} categories from {}",
        catalog.categories.len(),
        catalog_path.display()
    );

    let mut tree = CatalogTree::new(&catalog, Pagination::new(config.pagination.page_size));
    let title = super::catalog_title(catalog_path);
    run_interactive(&mut tree, &title, ui.interactive_style())?;
    Ok(())
}
