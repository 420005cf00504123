use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Warning,
    Catalog,
    Expanded,
    Collapsed,
    Product,
    LoadMore,
    ProductsView,
    CategoriesView,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Catalog) => theme::icons::CATALOG,
            (true, Icon::Expanded) => theme::icons::EXPAND,
            (true, Icon::Collapsed) => theme::icons::COLLAPSE,
            (true, Icon::Product) => theme::icons::PRODUCT,
            (true, Icon::LoadMore) => theme::icons::LOAD_MORE,
            (true, Icon::ProductsView) => theme::icons::PRODUCTS_VIEW,
            (true, Icon::CategoriesView) => theme::icons::CATEGORIES_VIEW,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Catalog) => theme::icons_ascii::CATALOG,
            (false, Icon::Expanded) => theme::icons_ascii::EXPAND,
            (false, Icon::Collapsed) => theme::icons_ascii::COLLAPSE,
            (false, Icon::Product) => theme::icons_ascii::PRODUCT,
            (false, Icon::LoadMore) => theme::icons_ascii::LOAD_MORE,
            (false, Icon::ProductsView) => theme::icons_ascii::PRODUCTS_VIEW,
            (false, Icon::CategoriesView) => theme::icons_ascii::CATEGORIES_VIEW,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Warning => theme::colors::WARNING,
            Icon::Catalog | Icon::Product | Icon::LoadMore => theme::colors::INFO,
            Icon::Expanded | Icon::Collapsed | Icon::ProductsView | Icon::CategoriesView => {
                theme::colors::DIM
            }
        };
        format!("{}", s.with(color))
    }
}
