//! Catalog validation error types.
//!
//! The browse core itself has no failure modes: filters and sorts are total
//! over well-typed inputs, and failed lookups are no-ops. What can go wrong
//! is the *payload* handed to the store — a record claiming the filter-only
//! sentinel category, or a colliding id. Those are caught at install time.

use std::collections::HashSet;
use std::fmt;

use crate::catalog::Game;

/// A catalog record that violates a store invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShelfError {
    /// The record carries the `All` sentinel, which is a filter parameter,
    /// never a real category.
    FilterOnlyCategory {
        /// Id of the offending record.
        id: u32,
        /// Title of the offending record (for logging).
        title: String,
    },

    /// The record reuses an id already present earlier in the list.
    DuplicateId { id: u32, title: String },
}

impl fmt::Display for ShelfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShelfError::FilterOnlyCategory { id, title } => write!(
                f,
                "record {} ('{}') uses the filter-only All category",
                id, title
            ),
            ShelfError::DuplicateId { id, title } => {
                write!(f, "record {} ('{}') reuses an existing id", id, title)
            }
        }
    }
}

impl std::error::Error for ShelfError {}

/// Convenience alias: a `Result` using `ShelfError` as the error type.
pub type ShelfResult<T> = Result<T, ShelfError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns the first invariant violation in `games`, if any.
pub fn validate_catalog(games: &[Game]) -> ShelfResult<()> {
    let mut seen = HashSet::new();
    for game in games {
        if game.category.is_filter_only() {
            return Err(ShelfError::FilterOnlyCategory {
                id: game.id,
                title: game.title.clone(),
            });
        }
        if !seen.insert(game.id) {
            return Err(ShelfError::DuplicateId {
                id: game.id,
                title: game.title.clone(),
            });
        }
    }
    Ok(())
}

/// Split `games` into the records that uphold the store invariants (original
/// order preserved) and the violations that were dropped.
pub fn sanitize_catalog(games: Vec<Game>) -> (Vec<Game>, Vec<ShelfError>) {
    let mut kept = Vec::with_capacity(games.len());
    let mut rejected = Vec::new();
    let mut seen = HashSet::new();

    for game in games {
        if game.category.is_filter_only() {
            rejected.push(ShelfError::FilterOnlyCategory {
                id: game.id,
                title: game.title,
            });
        } else if !seen.insert(game.id) {
            rejected.push(ShelfError::DuplicateId {
                id: game.id,
                title: game.title,
            });
        } else {
            kept.push(game);
        }
    }

    (kept, rejected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GameCategory;

    fn record(id: u32, title: &str, category: GameCategory) -> Game {
        Game {
            id,
            title: title.to_string(),
            category,
            image_url: String::new(),
            game_url: String::new(),
            rating: 4.0,
            popularity: 0,
            release_date: "2022-01-01".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn validate_accepts_a_clean_catalog() {
        let games = vec![
            record(1, "A", GameCategory::Racing),
            record(2, "B", GameCategory::Puzzle),
        ];
        assert!(validate_catalog(&games).is_ok());
    }

    #[test]
    fn validate_rejects_the_sentinel_category() {
        let games = vec![record(1, "A", GameCategory::All)];
        assert_eq!(
            validate_catalog(&games),
            Err(ShelfError::FilterOnlyCategory {
                id: 1,
                title: "A".to_string()
            })
        );
    }

    #[test]
    fn sanitize_drops_violations_and_preserves_order() {
        let games = vec![
            record(1, "A", GameCategory::Racing),
            record(2, "B", GameCategory::All),
            record(1, "C", GameCategory::Puzzle),
            record(3, "D", GameCategory::Arcade),
        ];

        let (kept, rejected) = sanitize_catalog(games);
        let titles: Vec<&str> = kept.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "D"]);
        assert_eq!(rejected.len(), 2);
    }

    #[test]
    fn sanitize_of_empty_list_is_empty() {
        let (kept, rejected) = sanitize_catalog(Vec::new());
        assert!(kept.is_empty());
        assert!(rejected.is_empty());
    }
}
