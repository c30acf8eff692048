//! # Actions
//!
//! Everything that can happen in Marquee becomes an `Action`.
//! User types a character? That's `Action::QueryChanged(text)`.
//! The terminal is resized? That's `Action::ViewportResized(px)`.
//!
//! The `update()` function takes the current state and an action and
//! applies exactly one transition. No I/O here — side effects are
//! signalled through the returned [`Effect`] and executed by the adapter.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! This keeps every transition testable:
//! `update(&mut app, action); assert_eq!(app.selection, expected)`.

use log::{debug, warn};

use crate::core::catalog::Catalog;
use crate::core::filter::CategoryFilter;
use crate::core::rail::RailKind;
use crate::core::state::App;
use crate::core::viewport;

/// One user or environment event, translated by the adapter.
#[derive(Debug)]
pub enum Action {
    QueryChanged(String),
    CategoryChanged(CategoryFilter),
    RailChanged(RailKind),
    /// Open the detail view on a game id.
    OpenItem(String),
    CloseItem,
    /// Viewport width in pixels; reclassifies desktop vs mobile.
    ViewportResized(u16),
    /// Swap in a newly loaded catalog (runtime reload).
    ReplaceCatalog(Catalog),
    ToggleTheme,
    Quit,
}

/// Side effect requested by a transition, executed by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Write the theme preference through to the config file.
    PersistTheme,
}

/// Apply one action to the state. Exactly one transition per call; no
/// partial updates are observable.
pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::QueryChanged(query) => {
            app.query = query;
            Effect::None
        }
        Action::CategoryChanged(category) => {
            app.category = category;
            Effect::None
        }
        Action::RailChanged(rail) => {
            app.rail = rail;
            Effect::None
        }
        Action::OpenItem(id) => {
            // The selection invariant: only ids from the current catalog
            // may become active.
            if app.catalog.contains(&id) {
                app.selection.open(id);
            } else {
                warn!("OpenItem for unknown id `{id}` ignored");
            }
            Effect::None
        }
        Action::CloseItem => {
            app.selection.close();
            Effect::None
        }
        Action::ViewportResized(width_px) => {
            app.viewport = viewport::classify(width_px);
            Effect::None
        }
        Action::ReplaceCatalog(catalog) => {
            app.catalog = catalog;
            app.selection.reconcile(&app.catalog);
            app.status_message = format!("Catalog reloaded ({} games)", app.catalog.len());
            Effect::None
        }
        Action::ToggleTheme => {
            app.theme = app.theme.toggle();
            app.status_message = format!("Theme: {}", app.theme.label());
            Effect::PersistTheme
        }
        Action::Quit => Effect::Quit,
    }
}
