//! CatalogTree state management and action handling.
//!
//! The tree owns the root node instances and the shared pagination
//! controller, flattens whatever is currently visible into rows, and
//! routes user actions to the node that owns the row under the cursor.

use serde::Serialize;

use crate::models::{Catalog, CatalogNode, Product};

use super::node::{NodeView, ViewMode};
use super::pagination::Pagination;
use super::render::{render_help_bar, render_row, render_status_bar, RenderStyle, RenderedRow};

/// One visible line of the tree
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenedRow<'a> {
    /// Index path to the node instance that owns this row
    pub path: Vec<usize>,
    /// Visual nesting (number of open ancestors)
    pub indent: usize,
    pub kind: RowKind<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowKind<'a> {
    /// A node's card
    Node {
        node: &'a CatalogNode,
        level: usize,
        open: bool,
        view_mode: ViewMode,
    },
    /// A product listed by the owning node
    Product { product: &'a Product },
    /// "Load More" under the owning node's products
    LoadMore { node: &'a CatalogNode, hidden: usize },
}

/// Catalog tree action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Jump to the first row
    First,
    /// Jump to the last row
    Last,
    /// Click the row: toggle a card, or load more
    Activate,
    /// Expand node
    Expand,
    /// Collapse node
    Collapse,
    /// Switch the owning node to its products
    ShowProducts,
    /// Switch the owning node to its categories
    ShowCategories,
    /// Flip the owning node's view
    ToggleView,
    /// Reveal another page of the owning node's products
    LoadMore,
    /// Leave the browser
    Quit,
}

/// Serializable summary of a visible row (for `render --json`)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowSummary {
    Node {
        id: String,
        name: String,
        level: usize,
        indent: usize,
        expanded: bool,
        view: Option<ViewMode>,
        products: usize,
    },
    Product {
        id: String,
        name: String,
        price: String,
        indent: usize,
    },
    LoadMore {
        node_id: String,
        hidden: usize,
        indent: usize,
    },
}

/// Interactive catalog tree
pub struct CatalogTree<'a> {
    roots: Vec<NodeView<'a>>,
    pagination: Pagination,
    cursor: usize,
    rows: Vec<FlattenedRow<'a>>,
}

impl<'a> CatalogTree<'a> {
    /// Mount every root category of `catalog`.
    pub fn new(catalog: &'a Catalog, pagination: Pagination) -> Self {
        let mut tree = Self {
            roots: catalog
                .categories
                .iter()
                .map(|root| NodeView::mount(root, 0))
                .collect(),
            pagination,
            cursor: 0,
            rows: Vec::new(),
        };
        tree.rebuild_rows();
        tree
    }

    pub fn with_default_pagination(catalog: &'a Catalog) -> Self {
        Self::new(catalog, Pagination::default())
    }

    pub fn roots(&self) -> &[NodeView<'a>] {
        &self.roots
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Rows currently visible, top to bottom
    pub fn rows(&self) -> &[FlattenedRow<'a>] {
        &self.rows
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    pub fn current_row(&self) -> Option<&FlattenedRow<'a>> {
        self.rows.get(self.cursor)
    }

    /// Node instance at an index path
    pub fn view_at(&self, path: &[usize]) -> Option<&NodeView<'a>> {
        let (first, rest) = path.split_first()?;
        let mut view = self.roots.get(*first)?;
        for idx in rest {
            view = view.children().get(*idx)?;
        }
        Some(view)
    }

    fn view_at_mut(&mut self, path: &[usize]) -> Option<&mut NodeView<'a>> {
        let (first, rest) = path.split_first()?;
        let mut view = self.roots.get_mut(*first)?;
        for idx in rest {
            view = view.child_mut(*idx)?;
        }
        Some(view)
    }

    /// Rebuild the flattened row list
    pub fn rebuild_rows(&mut self) {
        let mut rows = Vec::new();
        for (i, root) in self.roots.iter().enumerate() {
            Self::flatten_view(root, &[i], 0, &self.pagination, &mut rows);
        }
        self.rows = rows;

        if !self.rows.is_empty() && self.cursor >= self.rows.len() {
            self.cursor = self.rows.len() - 1;
        }
    }

    fn flatten_view(
        view: &NodeView<'a>,
        path: &[usize],
        indent: usize,
        pagination: &Pagination,
        rows: &mut Vec<FlattenedRow<'a>>,
    ) {
        let node = view.node();
        rows.push(FlattenedRow {
            path: path.to_vec(),
            indent,
            kind: RowKind::Node {
                node,
                level: view.level(),
                open: view.is_open(),
                view_mode: view.effective_view_mode(),
            },
        });

        if !view.is_open() {
            return;
        }

        match view.effective_view_mode() {
            ViewMode::Products => {
                for product in pagination.visible_products(node) {
                    rows.push(FlattenedRow {
                        path: path.to_vec(),
                        indent: indent + 1,
                        kind: RowKind::Product { product },
                    });
                }
                if pagination.has_more(node) {
                    rows.push(FlattenedRow {
                        path: path.to_vec(),
                        indent: indent + 1,
                        kind: RowKind::LoadMore {
                            node,
                            hidden: pagination.hidden_count(node),
                        },
                    });
                }
            }
            ViewMode::Categories => {
                for (i, child) in view.children().iter().enumerate() {
                    let mut child_path = path.to_vec();
                    child_path.push(i);
                    Self::flatten_view(child, &child_path, indent + 1, pagination, rows);
                }
            }
        }
    }

    /// Move the cursor to the card of the node at `path`.
    fn focus_node(&mut self, path: &[usize]) {
        if let Some(idx) = self
            .rows
            .iter()
            .position(|r| r.path == path && matches!(r.kind, RowKind::Node { .. }))
        {
            self.cursor = idx;
        }
    }

    /// Handle a tree action. Returns true when the browser should exit.
    pub fn handle_action(&mut self, action: TreeAction) -> bool {
        let Some(row) = self.rows.get(self.cursor).cloned() else {
            return action == TreeAction::Quit;
        };
        let on_card = matches!(row.kind, RowKind::Node { .. });

        match action {
            TreeAction::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            TreeAction::Down => {
                if self.cursor + 1 < self.rows.len() {
                    self.cursor += 1;
                }
                false
            }
            TreeAction::First => {
                self.cursor = 0;
                false
            }
            TreeAction::Last => {
                self.cursor = self.rows.len() - 1;
                false
            }
            TreeAction::Activate => {
                match row.kind {
                    RowKind::Node { .. } => {
                        if let Some(view) = self.view_at_mut(&row.path) {
                            view.toggle_expanded();
                        }
                    }
                    RowKind::LoadMore { node, .. } => {
                        self.pagination.load_more(&node.id);
                    }
                    RowKind::Product { .. } => {}
                }
                self.rebuild_rows();
                false
            }
            TreeAction::Expand => {
                if on_card {
                    if let Some(view) = self.view_at_mut(&row.path) {
                        view.expand();
                    }
                    self.rebuild_rows();
                }
                false
            }
            TreeAction::Collapse => {
                let collapsed = self
                    .view_at_mut(&row.path)
                    .map(|view| view.collapse())
                    .unwrap_or(false);
                self.rebuild_rows();
                if !on_card || collapsed {
                    self.focus_node(&row.path);
                } else if row.path.len() > 1 {
                    self.focus_node(&row.path[..row.path.len() - 1]);
                }
                false
            }
            TreeAction::ShowProducts | TreeAction::ShowCategories | TreeAction::ToggleView => {
                let changed = self
                    .view_at_mut(&row.path)
                    .map(|view| {
                        let mode = match action {
                            TreeAction::ShowProducts => ViewMode::Products,
                            TreeAction::ShowCategories => ViewMode::Categories,
                            _ => view.view_mode().flipped(),
                        };
                        view.set_view_mode(mode)
                    })
                    .unwrap_or(false);
                if changed {
                    self.rebuild_rows();
                    self.focus_node(&row.path);
                }
                false
            }
            TreeAction::LoadMore => {
                if let Some(view) = self.view_at(&row.path) {
                    let node = view.node();
                    let listing_products = view.is_open()
                        && view.effective_view_mode() == ViewMode::Products;
                    if listing_products && self.pagination.has_more(node) {
                        self.pagination.load_more(&node.id);
                        self.rebuild_rows();
                    }
                }
                false
            }
            TreeAction::Quit => true,
        }
    }

    /// Handle a mouse click on visible row `index` at `column`.
    ///
    /// A click on a switch segment selects that view and does nothing
    /// else; any other click on a row activates it.
    pub fn click(&mut self, index: usize, column: usize, style: RenderStyle) {
        if index >= self.rows.len() {
            return;
        }

        // Hit-test the row exactly as it was drawn, before the cursor moves.
        let drawn = render_row(&self.rows[index], index == self.cursor, style);
        self.cursor = index;

        match drawn.switch.and_then(|s| s.hit(column)) {
            Some(ViewMode::Products) => {
                self.handle_action(TreeAction::ShowProducts);
            }
            Some(ViewMode::Categories) => {
                self.handle_action(TreeAction::ShowCategories);
            }
            None => {
                self.handle_action(TreeAction::Activate);
            }
        }
    }

    /// Expand every node, applying `mode` wherever a switch is offered.
    pub fn expand_all(&mut self, mode: ViewMode) {
        for root in &mut self.roots {
            root.expand_all(mode);
        }
        self.rebuild_rows();
    }

    /// Select `mode` on every mounted node that offers the switch, leaving
    /// expansion as it is.
    pub fn apply_view(&mut self, mode: ViewMode) {
        for root in &mut self.roots {
            root.apply_view_mode(mode);
        }
        self.rebuild_rows();
    }

    /// Render every visible row
    pub fn render_rows(&self, style: RenderStyle) -> Vec<RenderedRow> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| render_row(row, i == self.cursor, style))
            .collect()
    }

    /// Render the tree to a string
    pub fn render(&self, style: RenderStyle) -> String {
        let mut out = String::new();
        for row in self.render_rows(style) {
            out.push_str(&row.line.render(style.color));
            out.push('\n');
        }
        out
    }

    /// Render the status bar
    pub fn render_status_bar(&self, style: RenderStyle) -> String {
        render_status_bar(
            self.cursor,
            self.rows.len(),
            self.pagination.page_size(),
            style,
        )
    }

    /// Render the help bar
    pub fn render_help_bar(&self, style: RenderStyle) -> String {
        render_help_bar(style)
    }

    /// Summaries of the visible rows
    pub fn row_summaries(&self) -> Vec<RowSummary> {
        self.rows
            .iter()
            .map(|row| match &row.kind {
                RowKind::Node {
                    node,
                    level,
                    open,
                    view_mode,
                } => RowSummary::Node {
                    id: node.id.clone(),
                    name: node.name.clone(),
                    level: *level,
                    indent: row.indent,
                    expanded: *open,
                    view: node.shows_view_toggle().then_some(*view_mode),
                    products: node.product_count(),
                },
                RowKind::Product { product } => RowSummary::Product {
                    id: product.id.clone(),
                    name: product.name.clone(),
                    price: product.display_price(),
                    indent: row.indent,
                },
                RowKind::LoadMore { node, hidden } => RowSummary::LoadMore {
                    node_id: node.id.clone(),
                    hidden: *hidden,
                    indent: row.indent,
                },
            })
            .collect()
    }
}
