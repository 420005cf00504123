//! Per-node product pagination.
//!
//! One controller is owned by the tree root and shared by every node.
//! Entries appear on the first "load more" for a node and are never
//! removed, so a node that is collapsed and reopened keeps its page.

use std::collections::HashMap;

use crate::models::{CatalogNode, Product};

/// Products revealed initially and per "load more" step.
pub const PRODUCTS_PER_PAGE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    visible: HashMap<String, usize>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(PRODUCTS_PER_PAGE)
    }
}

impl Pagination {
    /// `page_size` is expected to be at least 1 (see `Config::validate`).
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            visible: HashMap::new(),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of products currently revealed for `node_id`.
    pub fn visible_count(&self, node_id: &str) -> usize {
        self.visible
            .get(node_id)
            .copied()
            .unwrap_or(self.page_size)
    }

    /// Reveal one more page for `node_id` and return the new count.
    ///
    /// A node without an entry starts from the default page, so the first
    /// call goes from one page to two.
    pub fn load_more(&mut self, node_id: &str) -> usize {
        let page_size = self.page_size;
        let count = self
            .visible
            .entry(node_id.to_string())
            .or_insert(page_size);
        *count = count.saturating_add(page_size);
        log::debug!("load more for '{}': {} visible", node_id, *count);
        *count
    }

    /// The products to show for `node`, in original order.
    pub fn visible_products<'a>(&self, node: &'a CatalogNode) -> &'a [Product] {
        let count = self.visible_count(&node.id).min(node.products.len());
        &node.products[..count]
    }

    /// Whether the "load more" affordance should be offered for `node`.
    pub fn has_more(&self, node: &CatalogNode) -> bool {
        node.products.len() > self.visible_count(&node.id)
    }

    /// Products still hidden behind "load more".
    pub fn hidden_count(&self, node: &CatalogNode) -> usize {
        node.products
            .len()
            .saturating_sub(self.visible_count(&node.id))
    }

    /// Number of nodes that have been paged at least once
    pub fn tracked_nodes(&self) -> usize {
        self.visible.len()
    }
}
