//! Catalog data model
//!
//! Categories, subcategories and sub-subcategories share one shape
//! ([`CatalogNode`]). What a node shows is decided by which of its
//! collections are populated, never by which tier it sits on.

use serde::{Deserialize, Serialize};

/// A sellable item attached to a catalog node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Carried through, never rendered. Any JSON number is accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<f64>,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            stock: None,
        }
    }

    /// Price as shown in the tree, e.g. `$19.50`
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }
}

/// Format a price with a dollar sign and exactly two decimals.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Which collection a child node came from.
///
/// Subcategories sit one level below their parent, sub-subcategories two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildKind {
    Subcategory,
    SubSubcategory,
}

impl ChildKind {
    pub fn level_offset(self) -> usize {
        match self {
            ChildKind::Subcategory => 1,
            ChildKind::SubSubcategory => 2,
        }
    }
}

/// A category, subcategory or sub-subcategory.
///
/// Every collection is optional in the input; absent collections
/// deserialize to empty vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogNode {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<Product>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subcategories: Vec<CatalogNode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_subcategories: Vec<CatalogNode>,
}

impl CatalogNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            products: Vec::new(),
            subcategories: Vec::new(),
            sub_subcategories: Vec::new(),
        }
    }

    pub fn with_products(mut self, products: impl IntoIterator<Item = Product>) -> Self {
        self.products.extend(products);
        self
    }

    pub fn with_subcategory(mut self, child: CatalogNode) -> Self {
        self.subcategories.push(child);
        self
    }

    pub fn with_sub_subcategory(mut self, child: CatalogNode) -> Self {
        self.sub_subcategories.push(child);
        self
    }

    pub fn has_products(&self) -> bool {
        !self.products.is_empty()
    }

    pub fn has_categories(&self) -> bool {
        !self.subcategories.is_empty() || !self.sub_subcategories.is_empty()
    }

    /// Whether the node can be expanded at all
    pub fn has_children(&self) -> bool {
        self.has_categories() || self.has_products()
    }

    /// Whether the products/categories switch is offered
    pub fn shows_view_toggle(&self) -> bool {
        self.has_products() && self.has_categories()
    }

    /// Number of direct products (not recursive)
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Child nodes in display order: all subcategories, then all
    /// sub-subcategories.
    pub fn child_nodes(&self) -> impl Iterator<Item = (ChildKind, &CatalogNode)> {
        self.subcategories
            .iter()
            .map(|c| (ChildKind::Subcategory, c))
            .chain(
                self.sub_subcategories
                    .iter()
                    .map(|c| (ChildKind::SubSubcategory, c)),
            )
    }
}

/// An ordered list of root categories. Order is display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<CatalogNode>,
}

impl Catalog {
    pub fn new(categories: Vec<CatalogNode>) -> Self {
        Self { categories }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Visit every node depth-first with its display level (0 = root category).
    pub fn walk(&self, mut visit: impl FnMut(&CatalogNode, usize)) {
        fn go(node: &CatalogNode, level: usize, visit: &mut impl FnMut(&CatalogNode, usize)) {
            visit(node, level);
            for (kind, child) in node.child_nodes() {
                go(child, level + kind.level_offset(), visit);
            }
        }

        for root in &self.categories {
            go(root, 0, &mut visit);
        }
    }
}
