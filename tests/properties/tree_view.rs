//! Property tests for the catalog tree widget.

use proptest::prelude::*;

use catalog_tree::ui::widgets::catalog_tree::{RenderStyle, RowKind};
use catalog_tree::{Catalog, CatalogNode, CatalogTree, Pagination, Product, TreeAction, ViewMode};

fn node_with_products(n: usize) -> CatalogNode {
    CatalogNode::new("", "Node").with_products(
        (0..n).map(|i| Product::new(format!("p{}", i), format!("Product {}", i), 1.0)),
    )
}

fn node_strategy() -> impl Strategy<Value = CatalogNode> {
    let leaf = (0usize..12).prop_map(node_with_products);
    leaf.prop_recursive(3, 24, 3, |inner| {
        (
            0usize..12,
            proptest::collection::vec(inner.clone(), 0..3),
            proptest::collection::vec(inner, 0..2),
        )
            .prop_map(|(products, subcategories, sub_subcategories)| {
                let mut node = node_with_products(products);
                node.subcategories = subcategories;
                node.sub_subcategories = sub_subcategories;
                node
            })
    })
}

/// Give every node a unique id so pagination entries never collide.
fn assign_ids(node: &mut CatalogNode, next: &mut usize) {
    node.id = format!("n{}", next);
    node.name = format!("Node {}", next);
    *next += 1;
    for child in node
        .subcategories
        .iter_mut()
        .chain(node.sub_subcategories.iter_mut())
    {
        assign_ids(child, next);
    }
}

fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    proptest::collection::vec(node_strategy(), 0..4).prop_map(|mut roots| {
        let mut next = 0;
        for root in &mut roots {
            assign_ids(root, &mut next);
        }
        Catalog::new(roots)
    })
}

fn action_strategy() -> impl Strategy<Value = TreeAction> {
    prop_oneof![
        Just(TreeAction::Up),
        Just(TreeAction::Down),
        Just(TreeAction::First),
        Just(TreeAction::Last),
        Just(TreeAction::Activate),
        Just(TreeAction::Expand),
        Just(TreeAction::Collapse),
        Just(TreeAction::ShowProducts),
        Just(TreeAction::ShowCategories),
        Just(TreeAction::ToggleView),
        Just(TreeAction::LoadMore),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: random interaction never panics, never quits, and keeps
    /// the cursor on a visible row.
    #[test]
    fn property_actions_keep_cursor_in_bounds(
        catalog in catalog_strategy(),
        page_size in 1usize..6,
        actions in proptest::collection::vec(action_strategy(), 0..40),
    ) {
        let mut tree = CatalogTree::new(&catalog, Pagination::new(page_size));
        for action in actions {
            prop_assert!(!tree.handle_action(action));
            if catalog.categories.is_empty() {
                prop_assert!(tree.rows().is_empty());
            } else {
                prop_assert!(tree.cursor_position() < tree.rows().len());
            }
        }
    }

    /// PROPERTY: a card shows an expanded section iff the node has products
    /// or subcategories.
    #[test]
    fn property_open_iff_has_children(catalog in catalog_strategy()) {
        let mut tree = CatalogTree::with_default_pagination(&catalog);
        tree.expand_all(ViewMode::Categories);

        for row in tree.rows() {
            if let RowKind::Node { node, open, .. } = &row.kind {
                prop_assert_eq!(*open, node.has_children());
            }
        }
    }

    /// PROPERTY: the view switch is drawn exactly on nodes with both
    /// products and subcategories.
    #[test]
    fn property_switch_iff_products_and_categories(catalog in catalog_strategy()) {
        let mut tree = CatalogTree::with_default_pagination(&catalog);
        tree.expand_all(ViewMode::Categories);
        let rendered = tree.render_rows(RenderStyle::plain(true));

        for (row, line) in tree.rows().iter().zip(&rendered) {
            match &row.kind {
                RowKind::Node { node, .. } => {
                    prop_assert_eq!(
                        line.switch.is_some(),
                        node.has_products() && node.has_categories()
                    );
                }
                _ => prop_assert!(line.switch.is_none()),
            }
        }
    }

    /// PROPERTY: in products view every "load more" row reports exactly the
    /// products that are not shown.
    #[test]
    fn property_load_more_counts_hidden(
        catalog in catalog_strategy(),
        page_size in 1usize..6,
    ) {
        let mut tree = CatalogTree::new(&catalog, Pagination::new(page_size));
        tree.expand_all(ViewMode::Products);

        let rows = tree.rows();
        for (i, row) in rows.iter().enumerate() {
            if let RowKind::LoadMore { node, hidden } = &row.kind {
                prop_assert_eq!(*hidden, node.products.len() - page_size);
                let shown = rows[..i]
                    .iter()
                    .rev()
                    .take_while(|r| matches!(r.kind, RowKind::Product { .. }))
                    .count();
                prop_assert_eq!(shown, page_size);
            }
        }
    }

    /// PROPERTY: toggling one root never changes its siblings.
    #[test]
    fn property_siblings_are_independent(catalog in catalog_strategy(), target in 0usize..4) {
        prop_assume!(target < catalog.categories.len());

        let mut tree = CatalogTree::with_default_pagination(&catalog);
        let card = tree
            .rows()
            .iter()
            .position(|r| r.path == vec![target])
            .unwrap();
        for _ in 0..card {
            tree.handle_action(TreeAction::Down);
        }
        tree.handle_action(TreeAction::Activate);

        for (i, root) in tree.roots().iter().enumerate() {
            prop_assert_eq!(root.is_expanded(), i == target);
        }
    }
}
