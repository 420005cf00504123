//! Catalog consistency report
//!
//! The tree trusts its input: duplicate ids mis-key pagination and
//! negative prices render as-is. This report surfaces those problems to
//! whoever maintains the catalog file.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::models::{Catalog, CatalogNode};

/// A single problem found in a catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckIssue {
    /// Two or more nodes share an id; their pagination state is shared
    DuplicateNodeId { id: String, occurrences: usize },
    /// A node lists the same product id more than once
    DuplicateProductId { node_id: String, product_id: String },
    /// Price is negative, NaN or infinite
    InvalidPrice {
        node_id: String,
        product_id: String,
        price: f64,
    },
}

impl std::fmt::Display for CheckIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckIssue::DuplicateNodeId { id, occurrences } => {
                write!(f, "node id '{}' is used {} times", id, occurrences)
            }
            CheckIssue::DuplicateProductId {
                node_id,
                product_id,
            } => write!(
                f,
                "product id '{}' appears more than once in node '{}'",
                product_id, node_id
            ),
            CheckIssue::InvalidPrice {
                node_id,
                product_id,
                price,
            } => write!(
                f,
                "product '{}' in node '{}' has invalid price {}",
                product_id, node_id, price
            ),
        }
    }
}

/// Counts and issues for a whole catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CheckReport {
    pub categories: usize,
    pub subcategories: usize,
    pub sub_subcategories: usize,
    pub products: usize,
    pub issues: Vec<CheckIssue>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.categories + self.subcategories + self.sub_subcategories
    }
}

pub fn check(catalog: &Catalog) -> CheckReport {
    let mut report = CheckReport {
        categories: catalog.categories.len(),
        ..CheckReport::default()
    };

    // First-seen order keeps the report stable across runs.
    let mut id_order: Vec<&str> = Vec::new();
    let mut id_counts: HashMap<&str, usize> = HashMap::new();

    fn visit<'a>(
        node: &'a CatalogNode,
        report: &mut CheckReport,
        id_order: &mut Vec<&'a str>,
        id_counts: &mut HashMap<&'a str, usize>,
    ) {
        let count = id_counts.entry(node.id.as_str()).or_insert(0);
        if *count == 0 {
            id_order.push(node.id.as_str());
        }
        *count += 1;

        report.products += node.products.len();
        report.subcategories += node.subcategories.len();
        report.sub_subcategories += node.sub_subcategories.len();

        let mut seen_products = HashSet::new();
        let mut reported_products = HashSet::new();
        for product in &node.products {
            if !seen_products.insert(product.id.as_str())
                && reported_products.insert(product.id.as_str())
            {
                report.issues.push(CheckIssue::DuplicateProductId {
                    node_id: node.id.clone(),
                    product_id: product.id.clone(),
                });
            }
            if !product.price.is_finite() || product.price < 0.0 {
                report.issues.push(CheckIssue::InvalidPrice {
                    node_id: node.id.clone(),
                    product_id: product.id.clone(),
                    price: product.price,
                });
            }
        }

        for (_, child) in node.child_nodes() {
            visit(child, report, id_order, id_counts);
        }
    }

    for root in &catalog.categories {
        visit(root, &mut report, &mut id_order, &mut id_counts);
    }

    for id in id_order {
        let occurrences = id_counts[id];
        if occurrences > 1 {
            report.issues.push(CheckIssue::DuplicateNodeId {
                id: id.to_string(),
                occurrences,
            });
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;

    fn sample() -> Catalog {
        Catalog::new(vec![
            CatalogNode::new("c1", "Electronics")
                .with_products([Product::new("p1", "Cable", 4.0)])
                .with_subcategory(
                    CatalogNode::new("s1", "Phones")
                        .with_sub_subcategory(CatalogNode::new("ss1", "Cases")),
                ),
            CatalogNode::new("c2", "Garden"),
        ])
    }

    #[test]
    fn clean_catalog_counts_every_tier() {
        let report = check(&sample());
        assert!(report.is_clean());
        assert_eq!(report.categories, 2);
        assert_eq!(report.subcategories, 1);
        assert_eq!(report.sub_subcategories, 1);
        assert_eq!(report.products, 1);
        assert_eq!(report.node_count(), 4);
    }

    #[test]
    fn duplicate_node_ids_are_reported_once() {
        let catalog = Catalog::new(vec![
            CatalogNode::new("dup", "A").with_subcategory(CatalogNode::new("dup", "B")),
            CatalogNode::new("dup", "C"),
        ]);

        let report = check(&catalog);
        assert_eq!(
            report.issues,
            vec![CheckIssue::DuplicateNodeId {
                id: "dup".to_string(),
                occurrences: 3
            }]
        );
    }

    #[test]
    fn duplicate_product_ids_within_node() {
        let catalog = Catalog::new(vec![CatalogNode::new("c1", "A").with_products([
            Product::new("p1", "One", 1.0),
            Product::new("p1", "Again", 1.0),
            Product::new("p1", "Third", 1.0),
        ])]);

        let report = check(&catalog);
        assert_eq!(report.issues.len(), 1);
        assert!(report.issues[0].to_string().contains("'p1'"));
    }

    #[test]
    fn negative_and_nan_prices_are_invalid() {
        let catalog = Catalog::new(vec![CatalogNode::new("c1", "A").with_products([
            Product::new("p1", "Refund", -2.0),
            Product::new("p2", "Broken", f64::NAN),
            Product::new("p3", "Free", 0.0),
        ])]);

        let report = check(&catalog);
        let ids: Vec<_> = report
            .issues
            .iter()
            .filter_map(|i| match i {
                CheckIssue::InvalidPrice { product_id, .. } => Some(product_id.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[test]
    fn report_serializes_with_issue_kind() {
        let report = check(&Catalog::new(vec![
            CatalogNode::new("x", "A"),
            CatalogNode::new("x", "B"),
        ]));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["issues"][0]["kind"], "duplicate_node_id");
        assert_eq!(json["issues"][0]["occurrences"], 2);
    }
}
