//! Catalog Tree Widget
//!
//! An expandable catalog tree with a per-node products/categories switch
//! and per-node product pagination.
//!
//! This module is organized into:
//! - `node`: per-instance expand flag and view mode
//! - `pagination`: root-owned visible product counts
//! - `tree`: row flattening and action handling
//! - `render`: terminal rendering functions
//! - `input`: keyboard/mouse handling and the interactive loop

mod input;
mod node;
mod pagination;
mod render;
mod tree;

pub use input::{handle_mouse, key_to_action, rows_height, run_interactive, Viewport};
pub use node::{NodeView, ViewMode};
pub use pagination::{Pagination, PRODUCTS_PER_PAGE};
pub use render::{render_row, RenderStyle, RenderedRow, SwitchRegions};
pub use tree::{CatalogTree, FlattenedRow, RowKind, RowSummary, TreeAction};
