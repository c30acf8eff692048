//! # Filter Engine
//!
//! Pure filtering over the catalog: category equality plus case-insensitive
//! substring match on the title. The filter is stable (catalog order is
//! preserved) and returns references into the catalog, never copies.

use crate::core::catalog::{Category, GameRecord};

/// Category filter: everything, or one known category.
///
/// Invalid categories cannot be constructed — the vocabulary is the
/// [`Category`] enum, validated when the catalog is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// All filter values in strip order: `All` first, then each category.
    pub fn all() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    /// Next filter in strip order, wrapping at the end.
    pub fn next(self) -> Self {
        match self {
            CategoryFilter::All => CategoryFilter::Only(Category::ALL[0]),
            CategoryFilter::Only(c) => {
                let idx = Category::ALL.iter().position(|&k| k == c).unwrap_or(0);
                match Category::ALL.get(idx + 1) {
                    Some(&next) => CategoryFilter::Only(next),
                    None => CategoryFilter::All,
                }
            }
        }
    }

    /// Previous filter in strip order, wrapping at the start.
    pub fn prev(self) -> Self {
        match self {
            CategoryFilter::All => CategoryFilter::Only(Category::ALL[Category::ALL.len() - 1]),
            CategoryFilter::Only(c) => {
                let idx = Category::ALL.iter().position(|&k| k == c).unwrap_or(0);
                if idx == 0 {
                    CategoryFilter::All
                } else {
                    CategoryFilter::Only(Category::ALL[idx - 1])
                }
            }
        }
    }
}

/// Filter `games` by query and category, preserving order.
///
/// The query is trimmed before matching; a whitespace-only query matches
/// everything. Matching is case-insensitive and runs against the title
/// only.
pub fn filter<'a>(
    games: &'a [GameRecord],
    query: &str,
    category: CategoryFilter,
) -> Vec<&'a GameRecord> {
    let needle = query.trim().to_lowercase();
    games
        .iter()
        .filter(|game| {
            category.matches(game.category)
                && (needle.is_empty() || game.title.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_catalog;

    #[test]
    fn test_no_filter_returns_catalog_in_order() {
        let catalog = sample_catalog();
        let filtered = filter(catalog.games(), "", CategoryFilter::All);
        assert_eq!(filtered.len(), catalog.len());
        for (got, want) in filtered.iter().zip(catalog.games()) {
            assert!(std::ptr::eq(*got, want));
        }
    }

    #[test]
    fn test_whitespace_query_matches_everything() {
        let catalog = sample_catalog();
        let filtered = filter(catalog.games(), "   \t ", CategoryFilter::All);
        assert_eq!(filtered.len(), catalog.len());
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let catalog = sample_catalog();
        let lower = filter(catalog.games(), "neon", CategoryFilter::All);
        let upper = filter(catalog.games(), "NEON", CategoryFilter::All);
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 1);
    }

    #[test]
    fn test_query_neon_finds_g1() {
        let catalog = sample_catalog();
        let filtered = filter(catalog.games(), "neon", CategoryFilter::All);
        let ids: Vec<&str> = filtered.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, ["g1"]);
    }

    #[test]
    fn test_category_retro_finds_g6() {
        let catalog = sample_catalog();
        let filtered = filter(
            catalog.games(),
            "",
            CategoryFilter::Only(Category::Retro),
        );
        let ids: Vec<&str> = filtered.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, ["g6"]);
    }

    #[test]
    fn test_category_and_query_combine() {
        let catalog = sample_catalog();
        // "r" matches several titles, but only one racing game.
        let filtered = filter(catalog.games(), "r", CategoryFilter::Only(Category::Racing));
        let ids: Vec<&str> = filtered.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, ["g1"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let catalog = sample_catalog();
        let filtered = filter(catalog.games(), "zzzzzz", CategoryFilter::All);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_category_cycling_wraps() {
        let mut current = CategoryFilter::All;
        let count = CategoryFilter::all().count();
        for _ in 0..count {
            current = current.next();
        }
        assert_eq!(current, CategoryFilter::All);
        assert_eq!(CategoryFilter::All.prev().next(), CategoryFilter::All);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Appending characters to the query never grows the result.
            #[test]
            fn narrowing_query_is_monotonic(
                base in "[a-z ]{0,6}",
                suffix in "[a-z]{1,4}"
            ) {
                let catalog = sample_catalog();
                let wide = filter(catalog.games(), &base, CategoryFilter::All);
                let narrow = filter(
                    catalog.games(),
                    &format!("{base}{suffix}"),
                    CategoryFilter::All,
                );
                prop_assert!(narrow.len() <= wide.len());
                for game in &narrow {
                    prop_assert!(wide.iter().any(|w| std::ptr::eq(*w, *game)));
                }
            }

            /// Every item of a category-filtered result carries that category.
            #[test]
            fn category_partition(idx in 0usize..Category::ALL.len()) {
                let catalog = sample_catalog();
                let category = Category::ALL[idx];
                let filtered =
                    filter(catalog.games(), "", CategoryFilter::Only(category));
                for game in filtered {
                    prop_assert_eq!(game.category, category);
                }
            }
        }
    }
}
