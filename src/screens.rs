//! Transient per-screen view state: active tab, search text, sheet
//! visibility. Deliberately kept outside the pricing/selection core, which
//! never reads these flags.

use crate::catalog;
use crate::domain::{Category, Product};

/// Category tabs on the product browsing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryTab {
    Recomendados,
    Todos,
    Bebidas,
    Postres,
}

/// View state for the product browsing screen.
#[derive(Debug, Clone)]
pub struct BrowseScreen {
    pub active_tab: CategoryTab,
    pub search_value: String,
    pub search_focused: bool,
}

impl Default for BrowseScreen {
    fn default() -> Self {
        Self {
            active_tab: CategoryTab::Recomendados,
            search_value: String::new(),
            search_focused: false,
        }
    }
}

impl BrowseScreen {
    /// Switching tabs clears any active search.
    pub fn select_tab(&mut self, tab: CategoryTab) {
        self.active_tab = tab;
        self.search_value.clear();
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_value = query.into();
    }

    pub fn focus_search(&mut self) {
        self.search_focused = true;
    }

    pub fn blur_search(&mut self) {
        self.search_focused = false;
    }

    /// Whether a search is active. The empty string means "no search", not
    /// "match everything".
    pub fn searching(&self) -> bool {
        !self.search_value.is_empty()
    }

    /// The products the single-section grid shows.
    ///
    /// An empty query never falls through to the full catalog: it yields the
    /// active tab's capped listing instead. The "Todos" tab renders
    /// [`sections`](Self::sections) rather than a flat grid.
    pub fn visible_products(&self) -> Vec<Product> {
        if self.searching() {
            return catalog::search(&self.search_value);
        }
        match self.active_tab {
            CategoryTab::Recomendados => catalog::recommended(),
            CategoryTab::Bebidas => catalog::by_category(Category::Bebida),
            CategoryTab::Postres => catalog::by_category(Category::Postre),
            CategoryTab::Todos => Vec::new(),
        }
    }

    /// Titled sections for the "Todos" tab, each capped like its own tab.
    pub fn sections(&self) -> Vec<(&'static str, Vec<Product>)> {
        vec![
            ("Recomendados", catalog::recommended()),
            ("Bebidas", catalog::by_category(Category::Bebida)),
            ("Postres", catalog::by_category(Category::Postre)),
        ]
    }
}

/// View state for the order summary screen's bottom sheets.
#[derive(Debug, Clone, Default)]
pub struct SummaryScreen {
    pub show_payment_sheet: bool,
    pub show_edit_sheet: bool,
}

impl SummaryScreen {
    pub fn open_payment_sheet(&mut self) {
        self.show_payment_sheet = true;
    }

    pub fn close_payment_sheet(&mut self) {
        self.show_payment_sheet = false;
    }

    pub fn open_edit_sheet(&mut self) {
        self.show_edit_sheet = true;
    }

    pub fn close_edit_sheet(&mut self) {
        self.show_edit_sheet = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_search_shows_the_active_tab_not_everything() {
        let mut screen = BrowseScreen::default();
        screen.set_search("");
        assert!(!screen.searching());

        let products = screen.visible_products();
        assert_eq!(products.len(), 4);
        assert!(products.iter().all(|p| p.recommended));
    }

    #[test]
    fn search_overrides_the_active_tab() {
        let mut screen = BrowseScreen::default();
        screen.select_tab(CategoryTab::Postres);
        screen.set_search("latte");

        let products = screen.visible_products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Latte");
    }

    #[test]
    fn switching_tabs_clears_the_search() {
        let mut screen = BrowseScreen::default();
        screen.set_search("brownie");
        screen.select_tab(CategoryTab::Bebidas);
        assert!(!screen.searching());
        assert_eq!(screen.visible_products().len(), 4);
    }

    #[test]
    fn a_miss_yields_the_empty_state() {
        let mut screen = BrowseScreen::default();
        screen.set_search("sushi");
        assert!(screen.visible_products().is_empty());
    }

    #[test]
    fn todos_tab_renders_three_capped_sections() {
        let mut screen = BrowseScreen::default();
        screen.select_tab(CategoryTab::Todos);
        assert!(screen.visible_products().is_empty());

        let sections = screen.sections();
        assert_eq!(sections.len(), 3);
        for (_, products) in &sections {
            assert!(products.len() <= catalog::PAGE_SIZE);
        }
    }

    #[test]
    fn sheet_flags_toggle_independently() {
        let mut screen = SummaryScreen::default();
        screen.open_payment_sheet();
        screen.open_edit_sheet();
        screen.close_payment_sheet();
        assert!(!screen.show_payment_sheet);
        assert!(screen.show_edit_sheet);
    }
}
