use crossterm::style::Color;

/// Design tokens for the catalog tree UI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and separators must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const WARNING: &str = "⚠";
    pub const CATALOG: &str = "◆";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";

    // Rows.
    pub const PRODUCT: &str = "▪";
    pub const LOAD_MORE: &str = "↓";

    // View switch segments.
    pub const PRODUCTS_VIEW: &str = "▦";
    pub const CATEGORIES_VIEW: &str = "☰";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const WARNING: &str = "[WARN]";
    pub const CATALOG: &str = "[CATALOG]";

    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";

    pub const PRODUCT: &str = "*";
    pub const LOAD_MORE: &str = "+";

    pub const PRODUCTS_VIEW: &str = "#";
    pub const CATEGORIES_VIEW: &str = "=";
}

pub mod separators {
    pub const RULE: &str = "─";
    pub const SEGMENT: &str = "│";
}

pub mod separators_ascii {
    pub const RULE: &str = "-";
    pub const SEGMENT: &str = "|";
}

/// Horizontal rule spanning `width` columns.
pub fn rule(width: usize, supports_unicode: bool) -> String {
    let unit = if supports_unicode {
        separators::RULE
    } else {
        separators_ascii::RULE
    };
    unit.repeat(width)
}
