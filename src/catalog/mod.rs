//! Catalog input boundary
//!
//! Loading turns a catalog file into an immutable [`Catalog`]; the tree
//! widget never validates what it is given. `check` is a separate,
//! opt-in report for catalog authors.

mod check;
mod loader;

pub use check::{check, CheckIssue, CheckReport};
pub use loader::{from_json_str, load, load_str, CatalogFormat};

pub use crate::models::Catalog;
