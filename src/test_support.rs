//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::catalog::{Catalog, Category, Difficulty, GameRecord};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;

/// The built-in six-game catalog, which the scenario tests are written
/// against (ids g1..g6).
pub fn sample_catalog() -> Catalog {
    Catalog::builtin()
}

/// Creates a test App over the built-in catalog with default settings.
pub fn test_app() -> App {
    App::from_config(sample_catalog(), &ResolvedConfig::default())
}

/// Build a minimal record for order/tie-break tests.
pub fn make_game(id: &str, title: &str, category: Category, plays: u64) -> GameRecord {
    GameRecord {
        id: id.to_string(),
        title: title.to_string(),
        category,
        rating: 4.0,
        plays,
        difficulty: Difficulty::Easy,
        badges: Vec::new(),
        description: String::new(),
    }
}
