//! Property tests for per-node pagination.

use proptest::prelude::*;

use catalog_tree::{CatalogNode, Pagination, Product};

fn node_with_products(n: usize) -> CatalogNode {
    CatalogNode::new("n", "Node").with_products(
        (0..n).map(|i| Product::new(format!("p{}", i), format!("Product {}", i), i as f64)),
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every load-more reveals exactly one more page.
    #[test]
    fn property_load_more_adds_one_page(page_size in 1usize..20, clicks in 0usize..10) {
        let mut pagination = Pagination::new(page_size);
        for _ in 0..clicks {
            pagination.load_more("n");
        }
        prop_assert_eq!(pagination.visible_count("n"), page_size * (clicks + 1));
    }

    /// PROPERTY: shown + hidden always equals the node's product count,
    /// and "load more" is offered exactly when something is hidden.
    #[test]
    fn property_visible_and_hidden_partition_products(
        page_size in 1usize..10,
        total in 0usize..40,
        clicks in 0usize..6,
    ) {
        let node = node_with_products(total);
        let mut pagination = Pagination::new(page_size);
        for _ in 0..clicks {
            pagination.load_more(&node.id);
        }

        let shown = pagination.visible_products(&node);
        prop_assert_eq!(shown.len() + pagination.hidden_count(&node), total);
        prop_assert_eq!(pagination.has_more(&node), pagination.hidden_count(&node) > 0);
        prop_assert_eq!(shown, &node.products[..shown.len()]);
    }

    /// PROPERTY: paging one node never changes another.
    #[test]
    fn property_nodes_page_independently(page_size in 1usize..10, clicks in 1usize..6) {
        let mut pagination = Pagination::new(page_size);
        for _ in 0..clicks {
            pagination.load_more("a");
        }
        prop_assert_eq!(pagination.visible_count("b"), page_size);
        prop_assert_eq!(pagination.tracked_nodes(), 1);
    }
}
