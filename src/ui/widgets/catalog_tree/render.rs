//! Terminal rendering functions for the catalog tree.
//!
//! Rows render to [`Line`]s so the caller can both print them and map
//! mouse columns back to the view switch.

use std::ops::Range;

use unicode_width::UnicodeWidthStr;

use crate::models::CatalogNode;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{Line, Span};
use crate::ui::theme;

use super::node::ViewMode;
use super::tree::{FlattenedRow, RowKind};

/// How rows are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    pub unicode: bool,
    pub color: bool,
    /// Prefix rows with a `> ` cursor column
    pub show_cursor: bool,
}

impl RenderStyle {
    /// Plain text without a cursor column, as used by `render`
    pub fn plain(unicode: bool) -> Self {
        Self {
            unicode,
            color: false,
            show_cursor: false,
        }
    }

    pub fn interactive(unicode: bool, color: bool) -> Self {
        Self {
            unicode,
            color,
            show_cursor: true,
        }
    }
}

/// Columns covered by each segment of a node's view switch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchRegions {
    pub products: Range<usize>,
    pub categories: Range<usize>,
}

impl SwitchRegions {
    /// The segment under `column`, if any
    pub fn hit(&self, column: usize) -> Option<ViewMode> {
        if self.products.contains(&column) {
            Some(ViewMode::Products)
        } else if self.categories.contains(&column) {
            Some(ViewMode::Categories)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub line: Line,
    pub switch: Option<SwitchRegions>,
}

/// Render a single row
pub fn render_row(row: &FlattenedRow<'_>, is_active: bool, style: RenderStyle) -> RenderedRow {
    let mut line = Line::new();

    if style.show_cursor {
        line.push_plain(if is_active { "> " } else { "  " });
    }
    line.push_plain("  ".repeat(row.indent));

    let switch = match &row.kind {
        RowKind::Node {
            node,
            open,
            view_mode,
            ..
        } => render_card(&mut line, node, *open, *view_mode, style),
        RowKind::Product { product } => {
            line.push(Span::info(format!(
                "{} ",
                Icon::Product.render(style.unicode)
            )));
            line.push_plain(product.name.clone());
            line.push_plain("  ");
            line.push(Span::info(product.display_price()).bold());
            None
        }
        RowKind::LoadMore { hidden, .. } => {
            line.push(Span::info(format!(
                "{} Load More",
                Icon::LoadMore.render(style.unicode)
            )));
            line.push(Span::dim(format!(" ({} more)", hidden)));
            None
        }
    };

    RenderedRow { line, switch }
}

fn render_card(
    line: &mut Line,
    node: &CatalogNode,
    open: bool,
    view_mode: ViewMode,
    style: RenderStyle,
) -> Option<SwitchRegions> {
    // Chevron only for nodes with something to show
    if node.has_children() {
        let icon = if open { Icon::Expanded } else { Icon::Collapsed };
        line.push(Span::dim(format!("{} ", icon.render(style.unicode))));
    } else {
        let width = Icon::Collapsed.render(style.unicode).width() + 1;
        line.push_plain(" ".repeat(width));
    }

    line.push(Span::plain(node.name.clone()).bold());

    let count = node.product_count();
    line.push(Span::dim(format!("  {} Products", count)));

    if count > 0 {
        line.push_plain("  ");
        line.push(Span::info(format!("({})", count)).bold());
    }

    if !node.shows_view_toggle() {
        return None;
    }

    let separator = if style.unicode {
        theme::separators::SEGMENT
    } else {
        theme::separators_ascii::SEGMENT
    };

    line.push_plain("  [");
    let products = line.push(switch_segment(ViewMode::Products, view_mode, style));
    line.push(Span::dim(separator));
    let categories = line.push(switch_segment(ViewMode::Categories, view_mode, style));
    line.push_plain("]");

    Some(SwitchRegions {
        products,
        categories,
    })
}

fn switch_segment(segment: ViewMode, current: ViewMode, style: RenderStyle) -> Span {
    let icon = match segment {
        ViewMode::Products => Icon::ProductsView,
        ViewMode::Categories => Icon::CategoriesView,
    };
    let text = format!("{} {}", icon.render(style.unicode), segment.label());

    if segment == current {
        Span::info(format!("*{}*", text)).bold()
    } else {
        Span::dim(format!(" {} ", text))
    }
}

/// Render the status bar
pub fn render_status_bar(cursor: usize, rows: usize, page_size: usize, style: RenderStyle) -> String {
    let position = if rows == 0 { 0 } else { cursor + 1 };
    let text = format!(
        "Row {}/{}    {} products per page",
        position, rows, page_size
    );
    Span::dim(text).render(style.color)
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar(style: RenderStyle) -> String {
    let (arrows_v, arrows_h) = if style.unicode {
        ("↑↓", "→←")
    } else {
        ("Up/Down", "Right/Left")
    };
    format!(
        "[Enter] Open / Load more    [p] Products    [c] Categories    [Tab] Switch view    [q] Quit\n\
         (Use {} to navigate, {} to expand/collapse, m to load more)",
        arrows_v, arrows_h
    )
}
