//! Per-node view state.
//!
//! A [`NodeView`] is one mounted instance of a catalog node. It owns the
//! node's expand flag and view mode, plus the instances of whatever child
//! nodes it currently displays. Child instances are dropped as soon as the
//! node stops showing them (collapse, or switch to products), so their
//! state starts fresh when they are shown again.

use serde::Serialize;

use crate::models::CatalogNode;

/// Which set of children an expanded node lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Categories,
    Products,
}

impl ViewMode {
    pub fn flipped(self) -> Self {
        match self {
            ViewMode::Categories => ViewMode::Products,
            ViewMode::Products => ViewMode::Categories,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Categories => "Categories",
            ViewMode::Products => "Products",
        }
    }
}

#[derive(Debug, Clone)]
pub struct NodeView<'a> {
    node: &'a CatalogNode,
    level: usize,
    expanded: bool,
    view_mode: ViewMode,
    children: Vec<NodeView<'a>>,
}

impl<'a> NodeView<'a> {
    /// Create a fresh instance: collapsed, showing categories.
    pub fn mount(node: &'a CatalogNode, level: usize) -> Self {
        log::trace!("mount '{}' at level {}", node.id, level);
        Self {
            node,
            level,
            expanded: false,
            view_mode: ViewMode::default(),
            children: Vec::new(),
        }
    }

    pub fn node(&self) -> &'a CatalogNode {
        self.node
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// Raw expand flag. See [`NodeView::is_open`] for what is displayed.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether an expanded section is displayed under the card
    pub fn is_open(&self) -> bool {
        self.expanded && self.node.has_children()
    }

    /// The mode chosen with the switch (meaningful only when it is offered)
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// The mode that decides what an open node lists.
    ///
    /// Without a switch the node lists whichever kind of child it has.
    pub fn effective_view_mode(&self) -> ViewMode {
        if self.node.shows_view_toggle() {
            self.view_mode
        } else if self.node.has_products() {
            ViewMode::Products
        } else {
            ViewMode::Categories
        }
    }

    /// Mounted child instances, in display order
    pub fn children(&self) -> &[NodeView<'a>] {
        &self.children
    }

    pub(crate) fn child_mut(&mut self, index: usize) -> Option<&mut NodeView<'a>> {
        self.children.get_mut(index)
    }

    /// Flip the expand flag, as a click on the card does.
    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
        log::debug!(
            "{} '{}'",
            if self.expanded { "expand" } else { "collapse" },
            self.node.id
        );
        self.sync_children();
    }

    /// Expand if the node has anything to show. Returns whether state changed.
    pub fn expand(&mut self) -> bool {
        if self.expanded || !self.node.has_children() {
            return false;
        }
        self.toggle_expanded();
        true
    }

    /// Returns whether state changed.
    pub fn collapse(&mut self) -> bool {
        if !self.expanded {
            return false;
        }
        self.toggle_expanded();
        true
    }

    /// Select a view with the switch. Ignored when the node offers no
    /// switch. Never touches the expand flag. Returns whether state changed.
    pub fn set_view_mode(&mut self, mode: ViewMode) -> bool {
        if !self.node.shows_view_toggle() || self.view_mode == mode {
            return false;
        }
        self.view_mode = mode;
        log::debug!("view '{}' as {}", self.node.id, mode.label());
        self.sync_children();
        true
    }

    /// Expand this node and every descendant it ends up showing.
    ///
    /// `mode` is applied to every node that offers the switch.
    pub fn expand_all(&mut self, mode: ViewMode) {
        self.set_view_mode(mode);
        self.expand();
        for child in &mut self.children {
            child.expand_all(mode);
        }
    }

    /// Apply `mode` to this node and every mounted descendant that offers
    /// the switch, without expanding or collapsing anything.
    pub fn apply_view_mode(&mut self, mode: ViewMode) {
        self.set_view_mode(mode);
        for child in &mut self.children {
            child.apply_view_mode(mode);
        }
    }

    fn shows_categories(&self) -> bool {
        self.is_open() && self.effective_view_mode() == ViewMode::Categories
    }

    fn sync_children(&mut self) {
        if self.shows_categories() {
            if self.children.is_empty() {
                let level = self.level;
                self.children = self
                    .node
                    .child_nodes()
                    .map(|(kind, child)| NodeView::mount(child, level + kind.level_offset()))
                    .collect();
            }
        } else if !self.children.is_empty() {
            log::trace!("unmount children of '{}'", self.node.id);
            self.children.clear();
        }
    }
}
