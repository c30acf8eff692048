//! # Rail Selector
//!
//! Turns the filtered list into a bounded, ordered sublist for one of the
//! three presentation rails. Selection policy only — filtering happened
//! upstream, and the input is never mutated.

use crate::core::catalog::GameRecord;

/// How many items a rail shows unless configured otherwise.
pub const DEFAULT_RAIL_LIMIT: usize = 4;

/// Named rail tab. Determines ordering, not filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RailKind {
    #[default]
    Featured,
    Trending,
    New,
}

impl RailKind {
    pub const ALL: [RailKind; 3] = [RailKind::Featured, RailKind::Trending, RailKind::New];

    pub fn label(self) -> &'static str {
        match self {
            RailKind::Featured => "Featured",
            RailKind::Trending => "Trending",
            RailKind::New => "New",
        }
    }

    /// Next tab, wrapping. Tab-key cycling in the UI.
    pub fn next(self) -> Self {
        match self {
            RailKind::Featured => RailKind::Trending,
            RailKind::Trending => RailKind::New,
            RailKind::New => RailKind::Featured,
        }
    }
}

/// Select the rail sublist from an already-filtered sequence.
///
/// - `Featured`: first `limit` in filtered order. The catalog ordering is
///   what makes an item featured; this function does not reorder.
/// - `Trending`: sorted by `plays` descending. `sort_by` is stable, so
///   ties keep their filtered order and the result is deterministic.
/// - `New`: filtered order reversed. The record has no creation timestamp,
///   so recency is approximated by reverse catalog order.
///
/// Fewer than `limit` items means all of them; no padding.
pub fn select_rail<'a>(
    filtered: &[&'a GameRecord],
    kind: RailKind,
    limit: usize,
) -> Vec<&'a GameRecord> {
    match kind {
        RailKind::Featured => filtered.iter().copied().take(limit).collect(),
        RailKind::Trending => {
            let mut ordered = filtered.to_vec();
            ordered.sort_by(|a, b| b.plays.cmp(&a.plays));
            ordered.truncate(limit);
            ordered
        }
        RailKind::New => filtered.iter().rev().copied().take(limit).collect(),
    }
}
