use std::path::Path;

use anyhow::Result;

use catalog_tree::catalog;
use catalog_tree::ui::context::UiContext;
use catalog_tree::ui::views::check::render_check_report;

pub fn cmd_check(catalog_path: &Path, strict: bool, ui: &UiContext) -> Result<()> {
    let catalog = catalog::load(catalog_path)?;
    let report = catalog::check(&catalog);
    log::debug!(
        "checked {} nodes, {} issues",
        report.node_count(),
        report.issues.len()
    );

    if ui.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_check_report(&report, ui.color, ui.unicode));
    }

    if strict && !report.is_clean() {
        anyhow::bail!("{} issue(s) found in {}", report.issues.len(), catalog_path.display());
    }
    Ok(())
}
