//! # Application State
//!
//! Core browsing state for Marquee. Domain logic only — presentation state
//! (input mode, scroll offsets) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Catalog          // immutable record store
//! ├── query: String             // free-text title search
//! ├── category: CategoryFilter  // All or one category
//! ├── rail: RailKind            // active rail tab
//! ├── rail_limit: usize         // items per rail
//! ├── selection: Selection      // detail view: Closed or Open(id)
//! ├── viewport: ViewportMode    // Desktop (modal) vs Mobile (sheet)
//! ├── theme: Theme              // dark/light, persisted on toggle
//! └── status_message: String    // status bar text
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs.
//! The filtered list, the rail sublist, and the resolved active game are
//! derived on demand — never cached, never allowed to go stale.

use crate::core::catalog::{Catalog, GameRecord};
use crate::core::config::{ResolvedConfig, Theme};
use crate::core::filter::{self, CategoryFilter};
use crate::core::rail::{self, RailKind};
use crate::core::selection::Selection;
use crate::core::viewport::ViewportMode;

pub struct App {
    pub catalog: Catalog,
    pub query: String,
    pub category: CategoryFilter,
    pub rail: RailKind,
    pub rail_limit: usize,
    pub selection: Selection,
    pub viewport: ViewportMode,
    pub theme: Theme,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: Catalog, theme: Theme, rail_limit: usize) -> Self {
        Self {
            catalog,
            query: String::new(),
            category: CategoryFilter::All,
            rail: RailKind::Featured,
            rail_limit,
            selection: Selection::Closed,
            // Mobile until the first resize notification classifies the
            // real width.
            viewport: ViewportMode::Mobile,
            theme,
            status_message: String::from("Type to search"),
        }
    }

    pub fn from_config(catalog: Catalog, config: &ResolvedConfig) -> Self {
        Self::new(catalog, config.theme, config.rail_limit)
    }

    /// The catalog filtered by the current query and category.
    pub fn filtered(&self) -> Vec<&GameRecord> {
        filter::filter(self.catalog.games(), &self.query, self.category)
    }

    /// The active rail's sublist of [`App::filtered`].
    pub fn rail_items(&self) -> Vec<&GameRecord> {
        rail::select_rail(&self.filtered(), self.rail, self.rail_limit)
    }

    /// The open game, resolved through the live catalog. `None` when the
    /// selection is closed — and also if the id ever failed to resolve,
    /// so a stale selection can never reach the screen.
    pub fn active_game(&self) -> Option<&GameRecord> {
        self.selection.active_id().and_then(|id| self.catalog.get(id))
    }

    pub fn result_count(&self) -> usize {
        self.filtered().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_new_defaults() {
        let app = test_app();
        assert_eq!(app.query, "");
        assert_eq!(app.category, CategoryFilter::All);
        assert_eq!(app.rail, RailKind::Featured);
        assert_eq!(app.selection, Selection::Closed);
        assert_eq!(app.viewport, ViewportMode::Mobile);
        assert_eq!(app.result_count(), 6);
    }

    #[test]
    fn test_derived_views_follow_state() {
        let mut app = test_app();
        app.query = "quantum".to_string();
        assert_eq!(app.result_count(), 1);
        assert_eq!(app.rail_items().len(), 1);
        assert_eq!(app.filtered()[0].id, "g2");
    }

    #[test]
    fn test_active_game_resolves_through_catalog() {
        let mut app = test_app();
        assert!(app.active_game().is_none());
        app.selection.open("g4".to_string());
        assert_eq!(app.active_game().map(|g| g.id.as_str()), Some("g4"));
        app.selection.open("not-there".to_string());
        assert!(app.active_game().is_none());
    }
}
