//! User-controlled browse parameters.
//!
//! Four independent resources with no cross-validation: mutating one never
//! touches the others. Each is a plain replace-the-value store; UI widget
//! systems write them directly and the derivation pipeline reads them.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::catalog::GameCategory;

/// Active category filter. Defaults to the `All` sentinel (no filter).
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectedCategory(pub GameCategory);

/// Ordering applied to the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOption {
    /// Descending release date, later dates first.
    Newest,
    /// Descending play count. The default, and the documented fallback for
    /// any unrecognized option key.
    #[default]
    Popular,
    /// Descending rating.
    Rating,
    /// Ascending case-folded title.
    Alphabetical,
}

impl SortOption {
    /// Every ordering the sort bar offers, in display order.
    pub const ALL: [SortOption; 4] = [
        SortOption::Popular,
        SortOption::Newest,
        SortOption::Rating,
        SortOption::Alphabetical,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            SortOption::Newest => "Newest",
            SortOption::Popular => "Popular",
            SortOption::Rating => "Top Rated",
            SortOption::Alphabetical => "A–Z",
        }
    }

    /// Stable key form, the inverse of [`SortOption::from_key`].
    pub fn key(self) -> &'static str {
        match self {
            SortOption::Newest => "newest",
            SortOption::Popular => "popular",
            SortOption::Rating => "rating",
            SortOption::Alphabetical => "alphabetical",
        }
    }

    /// Parse an option key. Unrecognized keys silently fall back to
    /// [`SortOption::Popular`] — a documented policy, not an error.
    pub fn from_key(key: &str) -> SortOption {
        match key {
            "newest" => SortOption::Newest,
            "rating" => SortOption::Rating,
            "alphabetical" => SortOption::Alphabetical,
            _ => SortOption::Popular,
        }
    }
}

/// Active sort option. Defaults to [`SortOption::Popular`].
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectedSort(pub SortOption);

/// How the derived view is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Card wall, several columns.
    #[default]
    Grid,
    /// One full-width row per game.
    List,
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Grid => "Grid",
            ViewMode::List => "List",
        }
    }
}

/// Active view mode. Defaults to [`ViewMode::Grid`].
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectedViewMode(pub ViewMode);

/// Free-text title search. Empty means no search filter.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery(pub String);

/// Startup system: apply the configured starting sort.
///
/// Goes through [`SortOption::from_key`], so a typo in `shelf.toml` lands on
/// Popular rather than failing. Must be ordered after
/// `config::load_shelf_config`.
pub fn apply_configured_sort(
    config: Res<crate::config::ShelfConfig>,
    mut sort: ResMut<SelectedSort>,
) {
    let configured = SortOption::from_key(&config.default_sort);
    if sort.0 != configured {
        sort.0 = configured;
    }
}
