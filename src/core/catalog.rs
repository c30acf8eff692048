//! # Catalog
//!
//! The immutable store of game records. A catalog is created once at
//! startup — from the built-in set or a TOML file — validated in full,
//! and never mutated afterwards. A runtime reload replaces the whole
//! catalog in one step (see `Action::ReplaceCatalog`).
//!
//! Unknown `category`/`difficulty` values are rejected at parse time by
//! the typed serde enums; everything serde cannot express (empty ids,
//! rating range, duplicate ids) is checked in [`validate`] before a
//! `Catalog` is handed out.

use log::info;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Game genre. Doubles as the category-filter vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Arcade,
    Puzzle,
    Strategy,
    Racing,
    Sports,
    Retro,
}

impl Category {
    /// All known categories, in display order.
    pub const ALL: [Category; 6] = [
        Category::Arcade,
        Category::Puzzle,
        Category::Strategy,
        Category::Racing,
        Category::Sports,
        Category::Retro,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Arcade => "Arcade",
            Category::Puzzle => "Puzzle",
            Category::Strategy => "Strategy",
            Category::Racing => "Racing",
            Category::Sports => "Sports",
            Category::Retro => "Retro",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// One game in the catalog. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GameRecord {
    pub id: String,
    pub title: String,
    pub category: Category,
    /// Star rating in `[0, 5]`, checked at load time.
    pub rating: f32,
    pub plays: u64,
    pub difficulty: Difficulty,
    /// Display tags only; no semantic effect on filtering or rails.
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub description: String,
}

/// On-disk catalog shape: `[[games]]` tables.
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    games: Vec<GameRecord>,
}

/// Ordered, read-only set of game records.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    games: Vec<GameRecord>,
}

impl Catalog {
    /// Parse and validate a catalog from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(text).map_err(CatalogError::Parse)?;
        validate(&file.games)?;
        Ok(Self { games: file.games })
    }

    /// The built-in six-game catalog.
    pub fn builtin() -> Self {
        // The constant below is part of the binary; a parse failure here
        // is a programming error, not a runtime condition.
        Self::from_toml(BUILTIN_CATALOG).expect("built-in catalog must be valid")
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&GameRecord> {
        self.games.iter().find(|g| g.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

/// Load the catalog: from `path` when given, otherwise the built-in set.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(CatalogError::Io)?;
            let catalog = Catalog::from_toml(&text)?;
            info!(
                "Loaded catalog from {} ({} games)",
                path.display(),
                catalog.len()
            );
            Ok(catalog)
        }
        None => {
            let catalog = Catalog::builtin();
            info!("Using built-in catalog ({} games)", catalog.len());
            Ok(catalog)
        }
    }
}

fn validate(games: &[GameRecord]) -> Result<(), CatalogError> {
    let mut seen = std::collections::HashSet::new();
    for (index, game) in games.iter().enumerate() {
        if game.id.is_empty() {
            return Err(CatalogError::MissingField { index, field: "id" });
        }
        if game.title.is_empty() {
            return Err(CatalogError::MissingField {
                index,
                field: "title",
            });
        }
        if !(0.0..=5.0).contains(&game.rating) {
            return Err(CatalogError::RatingOutOfRange {
                id: game.id.clone(),
                rating: game.rating,
            });
        }
        if !seen.insert(game.id.as_str()) {
            return Err(CatalogError::DuplicateId(game.id.clone()));
        }
    }
    Ok(())
}

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    MissingField { index: usize, field: &'static str },
    RatingOutOfRange { id: String, rating: f32 },
    DuplicateId(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Parse(e) => write!(f, "catalog parse error: {e}"),
            CatalogError::MissingField { index, field } => {
                write!(f, "game #{index}: missing or empty `{field}`")
            }
            CatalogError::RatingOutOfRange { id, rating } => {
                write!(f, "game `{id}`: rating {rating} outside [0, 5]")
            }
            CatalogError::DuplicateId(id) => write!(f, "duplicate game id `{id}`"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Static catalog configuration baked into the binary.
const BUILTIN_CATALOG: &str = r#"
[[games]]
id = "g1"
title = "Neon Runner"
category = "racing"
rating = 4.7
plays = 12840
difficulty = "Easy"
badges = ["New", "Hot"]
description = "Dash through cyber-streets, drift neon corners, and chase milliseconds in a skill-first time-attack racer."

[[games]]
id = "g2"
title = "Quantum Blocks"
category = "puzzle"
rating = 4.5
plays = 9021
difficulty = "Medium"
badges = ["Editor Pick"]
description = "A mind-bending grid puzzler where blocks entangle, collapse, and cascade. Think ahead or blink and lose."

[[games]]
id = "g3"
title = "Starforge Tactics"
category = "strategy"
rating = 4.8
plays = 23105
difficulty = "Hard"
badges = ["Ranked"]
description = "Build, conquer, and outwit across a glittering sector. Multiplayer ladders, seasons, and replays."

[[games]]
id = "g4"
title = "Street Striker 2D"
category = "arcade"
rating = 4.2
plays = 5012
difficulty = "Easy"
badges = ["Retro"]
description = "Pick-up-and-play brawler with crunchy hits, pixel art swagger, and couch co-op."

[[games]]
id = "g5"
title = "Goalverse '25"
category = "sports"
rating = 4.1
plays = 7633
difficulty = "Medium"
badges = ["Seasonal"]
description = "Arcade football distilled: fast matches, skill shots, and squad chemistry."

[[games]]
id = "g6"
title = "Retro Rocket"
category = "retro"
rating = 4.9
plays = 11002
difficulty = "Hard"
badges = ["8-bit"]
description = "Vertical shmup love letter. Tight hitboxes, perfect patterns, pure flow."
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.games()[0].id, "g1");
        assert_eq!(catalog.games()[0].title, "Neon Runner");
        assert_eq!(catalog.games()[2].plays, 23105);
        assert_eq!(catalog.games()[5].category, Category::Retro);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get("g4").map(|g| g.title.as_str()), Some("Street Striker 2D"));
        assert!(catalog.get("missing").is_none());
        assert!(catalog.contains("g6"));
        assert!(!catalog.contains(""));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let toml_str = r#"
[[games]]
id = "x1"
title = "Mystery"
category = "rhythm"
rating = 3.0
plays = 10
difficulty = "Easy"
"#;
        let err = Catalog::from_toml(toml_str).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_unknown_difficulty_rejected() {
        let toml_str = r#"
[[games]]
id = "x1"
title = "Mystery"
category = "puzzle"
rating = 3.0
plays = 10
difficulty = "Brutal"
"#;
        assert!(matches!(
            Catalog::from_toml(toml_str).unwrap_err(),
            CatalogError::Parse(_)
        ));
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let toml_str = r#"
[[games]]
id = "x1"
title = "Overrated"
category = "puzzle"
rating = 5.1
plays = 10
difficulty = "Easy"
"#;
        let err = Catalog::from_toml(toml_str).unwrap_err();
        assert!(matches!(err, CatalogError::RatingOutOfRange { .. }));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let toml_str = r#"
[[games]]
id = "x1"
title = "First"
category = "puzzle"
rating = 3.0
plays = 10
difficulty = "Easy"

[[games]]
id = "x1"
title = "Second"
category = "arcade"
rating = 3.0
plays = 10
difficulty = "Easy"
"#;
        let err = Catalog::from_toml(toml_str).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "x1"));
    }

    #[test]
    fn test_empty_title_rejected() {
        let toml_str = r#"
[[games]]
id = "x1"
title = ""
category = "puzzle"
rating = 3.0
plays = 10
difficulty = "Easy"
"#;
        let err = Catalog::from_toml(toml_str).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingField { field: "title", .. }
        ));
    }

    #[test]
    fn test_badges_and_description_optional() {
        let toml_str = r#"
[[games]]
id = "x1"
title = "Bare"
category = "puzzle"
rating = 3.0
plays = 10
difficulty = "Easy"
"#;
        let catalog = Catalog::from_toml(toml_str).unwrap();
        assert!(catalog.games()[0].badges.is_empty());
        assert!(catalog.games()[0].description.is_empty());
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::from_toml("").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_catalog_builtin_when_no_path() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let err = load_catalog(Some(Path::new("/nonexistent/catalog.toml"))).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
