//! catalog-tree - browse hierarchical product catalogs in the terminal
//!
//! A catalog is a list of categories. Each category may carry products,
//! subcategories and sub-subcategories. The [`CatalogTree`] widget shows it
//! as expandable cards with a products/categories switch and paginated
//! product lists.

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use config::Config;
pub use error::{CatalogError, CatalogResult};
pub use models::{format_price, Catalog, CatalogNode, ChildKind, Product};
pub use ui::widgets::catalog_tree::{
    CatalogTree, NodeView, Pagination, RowSummary, TreeAction, ViewMode, PRODUCTS_PER_PAGE,
};
