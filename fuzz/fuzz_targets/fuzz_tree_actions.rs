#![no_main]

use libfuzzer_sys::fuzz_target;

use catalog_tree::ui::widgets::catalog_tree::RenderStyle;
use catalog_tree::{CatalogTree, Pagination, TreeAction};

const ACTIONS: [TreeAction; 11] = [
    TreeAction::Up,
    TreeAction::Down,
    TreeAction::First,
    TreeAction::Last,
    TreeAction::Activate,
    TreeAction::Expand,
    TreeAction::Collapse,
    TreeAction::ShowProducts,
    TreeAction::ShowCategories,
    TreeAction::ToggleView,
    TreeAction::LoadMore,
];

// First byte: page size. Up to the first NUL: catalog JSON. Rest: actions.
fuzz_target!(|data: &[u8]| {
    let Some((&page, rest)) = data.split_first() else {
        return;
    };
    let split = rest.iter().position(|&b| b == 0).unwrap_or(rest.len());
    let Ok(content) = std::str::from_utf8(&rest[..split]) else {
        return;
    };
    let Ok(catalog) = catalog_tree::catalog::from_json_str(content) else {
        return;
    };

    let page_size = usize::from(page % 16) + 1;
    let mut tree = CatalogTree::new(&catalog, Pagination::new(page_size));
    for &byte in rest.get(split + 1..).unwrap_or_default() {
        let action = ACTIONS[usize::from(byte) % ACTIONS.len()];
        tree.handle_action(action);
    }
    let _ = tree.render(RenderStyle::plain(byte_flag(page)));
});

fn byte_flag(byte: u8) -> bool {
    byte & 0x80 != 0
}
