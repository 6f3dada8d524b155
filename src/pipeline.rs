//! The derivation pipeline: catalog + selection → the displayed list.
//!
//! [`filter_and_sort`] is the pure core: category filter, case-insensitive
//! title search, then a stable sort of a fresh copy. [`refresh_derived_view`]
//! wraps it in an explicit memoization keyed on (catalog version, category,
//! search, sort) so downstream UI only rebuilds when the inputs actually
//! changed. The cache is a performance contract only; correctness never
//! depends on it.

use std::cmp::Ordering;

use bevy::prelude::*;

use crate::catalog::{AppState, Game, GameCategory};
use crate::selection::{
    SearchQuery, SelectedCategory, SelectedSort, SelectedViewMode, SortOption,
};

// ── Pure core ─────────────────────────────────────────────────────────────────

/// Produce the ordered, filtered view list.
///
/// 1. Category filter: `All` keeps everything; otherwise exact equality.
/// 2. Search filter: case-insensitive substring match on the title; an empty
///    search term keeps everything.
/// 3. Sort: a fresh copy is ordered per `sort`. All orderings are stable —
///    ties retain their relative catalog order.
pub fn filter_and_sort(
    games: &[Game],
    category: GameCategory,
    search: &str,
    sort: SortOption,
) -> Vec<Game> {
    let needle = search.to_lowercase();

    let mut shown: Vec<Game> = games
        .iter()
        .filter(|g| category == GameCategory::All || g.category == category)
        .filter(|g| needle.is_empty() || g.title.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    // Vec::sort_by is stable, which the tie-order contract relies on.
    match sort {
        SortOption::Newest => shown.sort_by(compare_newest),
        SortOption::Rating => shown.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortOption::Alphabetical => {
            shown.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
        // Popular is also the ordering any future option falls back to.
        _ => shown.sort_by(|a, b| b.popularity.cmp(&a.popularity)),
    }

    shown
}

/// Descending release date; records with unparseable dates order last.
fn compare_newest(a: &Game, b: &Game) -> Ordering {
    match (a.release_day(), b.release_day()) {
        (Some(a_day), Some(b_day)) => b_day.cmp(&a_day),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// ── Memoized view ─────────────────────────────────────────────────────────────

/// The full input tuple a derived view was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewKey {
    pub catalog_version: u64,
    pub category: GameCategory,
    pub search: String,
    pub sort: SortOption,
}

/// The filtered-and-sorted list currently shown, plus the key it was
/// computed for.
///
/// Recomputed from scratch whenever the key goes stale; never mutated in
/// place.
#[derive(Resource, Debug, Default)]
pub struct DerivedView {
    games: Vec<Game>,
    key: Option<ViewKey>,
}

impl DerivedView {
    /// The displayed list, in final order.
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// Number of games matching the current filters, reported by the UI.
    pub fn matching_count(&self) -> usize {
        self.games.len()
    }

    /// True when the cached list was computed for exactly `key`.
    pub fn is_fresh_for(&self, key: &ViewKey) -> bool {
        self.key.as_ref() == Some(key)
    }

    /// Install a freshly computed list.
    pub fn replace(&mut self, key: ViewKey, games: Vec<Game>) {
        self.key = Some(key);
        self.games = games;
    }
}

/// Recompute [`DerivedView`] when catalog or selection changed.
///
/// The key comparison is the whole memoization: identical inputs leave the
/// resource untouched, so `Res<DerivedView>` change detection stays quiet and
/// downstream rebuild systems skip their work.
pub fn refresh_derived_view(
    catalog: Res<crate::catalog::GameCatalog>,
    category: Res<SelectedCategory>,
    search: Res<SearchQuery>,
    sort: Res<SelectedSort>,
    mut view: ResMut<DerivedView>,
) {
    let key = ViewKey {
        catalog_version: catalog.version(),
        category: category.0,
        search: search.0.clone(),
        sort: sort.0,
    };

    if view.is_fresh_for(&key) {
        return;
    }

    let games = filter_and_sort(catalog.games(), key.category, &key.search, key.sort);
    view.replace(key, games);
}

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers the selection resources and the derived-view refresh.
pub struct BrowsePlugin;

impl Plugin for BrowsePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectedCategory>()
            .init_resource::<SelectedSort>()
            .init_resource::<SelectedViewMode>()
            .init_resource::<SearchQuery>()
            .init_resource::<DerivedView>()
            .add_systems(
                Update,
                refresh_derived_view.run_if(in_state(AppState::Browsing)),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GameCatalog;

    fn game(
        id: u32,
        title: &str,
        category: GameCategory,
        rating: f32,
        popularity: u32,
        release_date: &str,
    ) -> Game {
        Game {
            id,
            title: title.to_string(),
            category,
            image_url: String::new(),
            game_url: String::new(),
            rating,
            popularity,
            release_date: release_date.to_string(),
            description: String::new(),
        }
    }

    /// The two-game worked example: every ordering, both filters off.
    fn two_racers() -> Vec<Game> {
        vec![
            game(1, "Zed Run", GameCategory::Racing, 4.0, 100, "2023-01-01"),
            game(2, "Apex Dash", GameCategory::Racing, 4.5, 50, "2024-01-01"),
        ]
    }

    fn titles(games: &[Game]) -> Vec<&str> {
        games.iter().map(|g| g.title.as_str()).collect()
    }

    #[test]
    fn each_sort_orders_the_worked_example() {
        let catalog = two_racers();
        let run = |sort| {
            titles(&filter_and_sort(
                &catalog,
                GameCategory::All,
                "",
                sort,
            ))
            .join(",")
        };

        assert_eq!(run(SortOption::Newest), "Apex Dash,Zed Run");
        assert_eq!(run(SortOption::Alphabetical), "Apex Dash,Zed Run");
        assert_eq!(run(SortOption::Rating), "Apex Dash,Zed Run");
        assert_eq!(run(SortOption::Popular), "Zed Run,Apex Dash");
    }

    #[test]
    fn category_filter_is_exact() {
        let catalog = vec![
            game(1, "Zed Run", GameCategory::Racing, 4.0, 100, "2023-01-01"),
            game(2, "Lumen Loops", GameCategory::Puzzle, 4.8, 60, "2024-02-14"),
            game(3, "Comet Juggler", GameCategory::Arcade, 4.0, 80, "2020-09-18"),
        ];

        let shown = filter_and_sort(&catalog, GameCategory::Puzzle, "", SortOption::Popular);
        assert!(shown.iter().all(|g| g.category == GameCategory::Puzzle));
        assert_eq!(shown.len(), 1);

        let all = filter_and_sort(&catalog, GameCategory::All, "", SortOption::Popular);
        assert_eq!(all.len(), catalog.len());
    }

    #[test]
    fn search_is_case_insensitive_both_ways() {
        let catalog = vec![
            game(1, "Super Racer", GameCategory::Racing, 4.0, 10, "2021-01-01"),
            game(2, "RACING STAR", GameCategory::Racing, 4.0, 20, "2021-01-01"),
            game(3, "Mosswood Post", GameCategory::Adventure, 4.3, 30, "2021-04-12"),
        ];

        let lower = filter_and_sort(&catalog, GameCategory::All, "rac", SortOption::Popular);
        let upper = filter_and_sort(&catalog, GameCategory::All, "RAC", SortOption::Popular);
        assert_eq!(titles(&lower), vec!["RACING STAR", "Super Racer"]);
        assert_eq!(lower, upper);
    }

    #[test]
    fn empty_search_keeps_everything() {
        let catalog = two_racers();
        let shown = filter_and_sort(&catalog, GameCategory::All, "", SortOption::Popular);
        assert_eq!(shown.len(), catalog.len());
    }

    #[test]
    fn equal_sort_keys_retain_catalog_order() {
        let catalog = vec![
            game(1, "First", GameCategory::Arcade, 4.0, 500, "2022-05-05"),
            game(2, "Second", GameCategory::Arcade, 4.0, 500, "2022-05-05"),
            game(3, "Third", GameCategory::Arcade, 4.0, 500, "2022-05-05"),
        ];

        for sort in [SortOption::Newest, SortOption::Rating, SortOption::Popular] {
            let shown = filter_and_sort(&catalog, GameCategory::All, "", sort);
            assert_eq!(
                titles(&shown),
                vec!["First", "Second", "Third"],
                "ties under {:?} must keep catalog order",
                sort
            );
        }
    }

    #[test]
    fn unparseable_dates_order_last_under_newest() {
        let catalog = vec![
            game(1, "Undated", GameCategory::Arcade, 4.0, 10, "sometime"),
            game(2, "Dated", GameCategory::Arcade, 4.0, 10, "2020-01-01"),
        ];
        let shown = filter_and_sort(&catalog, GameCategory::All, "", SortOption::Newest);
        assert_eq!(titles(&shown), vec!["Dated", "Undated"]);
    }

    #[test]
    fn pipeline_is_idempotent() {
        let catalog = two_racers();
        let once = filter_and_sort(&catalog, GameCategory::Racing, "a", SortOption::Rating);
        let twice = filter_and_sort(&catalog, GameCategory::Racing, "a", SortOption::Rating);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_catalog_yields_empty_view() {
        let shown = filter_and_sort(&[], GameCategory::Racing, "rac", SortOption::Newest);
        assert!(shown.is_empty());
    }

    #[test]
    fn refresh_recomputes_only_on_stale_key() {
        let mut world = World::new();
        let mut catalog = GameCatalog::default();
        catalog.install(two_racers());
        world.insert_resource(catalog);
        world.init_resource::<SelectedCategory>();
        world.init_resource::<SearchQuery>();
        world.init_resource::<SelectedSort>();
        world.init_resource::<DerivedView>();

        let mut schedule = Schedule::default();
        schedule.add_systems(refresh_derived_view);

        schedule.run(&mut world);
        let first_key = world.resource::<DerivedView>().key.clone();
        assert!(first_key.is_some());
        assert_eq!(world.resource::<DerivedView>().matching_count(), 2);

        // Unchanged inputs: the cached key survives verbatim.
        schedule.run(&mut world);
        assert_eq!(world.resource::<DerivedView>().key, first_key);

        // Changing one selection field invalidates the cache.
        world.resource_mut::<SelectedSort>().0 = SortOption::Newest;
        schedule.run(&mut world);
        let view = world.resource::<DerivedView>();
        assert_ne!(view.key, first_key);
        assert_eq!(titles(view.games()), vec!["Apex Dash", "Zed Run"]);
    }

    #[test]
    fn refresh_over_empty_catalog_reports_zero() {
        let mut world = World::new();
        let mut catalog = GameCatalog::default();
        catalog.install(Vec::new());
        world.insert_resource(catalog);
        world.insert_resource(SelectedCategory(GameCategory::Puzzle));
        world.insert_resource(SearchQuery("zzz".to_string()));
        world.insert_resource(SelectedSort(SortOption::Alphabetical));
        world.init_resource::<DerivedView>();

        let mut schedule = Schedule::default();
        schedule.add_systems(refresh_derived_view);
        schedule.run(&mut world);

        assert_eq!(world.resource::<DerivedView>().matching_count(), 0);
    }
}
