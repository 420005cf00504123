use std::path::Path;

use anyhow::Result;

use catalog_tree::ui::context::UiContext;
use catalog_tree::{catalog, CatalogTree, Config, Pagination, ViewMode};

pub fn cmd_render(
    catalog_path: &Path,
    expand_all: bool,
    view: ViewMode,
    config: &Config,
    ui: &UiContext,
) -> Result<()> {
    let catalog = catalog::load(catalog_path)?;

    let mut tree = CatalogTree::new(&catalog, Pagination::new(config.pagination.page_size));
    if expand_all {
        tree.expand_all(view);
    } else {
        tree.apply_view(view);
    }

    if ui.json {
        let output = serde_json::json!({
            "catalog": super::catalog_title(catalog_path),
            "page_size": config.pagination.page_size,
            "rows": tree.row_summaries(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print!("{}", tree.render(ui.print_style()));
    Ok(())
}
