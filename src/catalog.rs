//! Game records and the catalog store — `AppState` definition and
//! `CatalogPlugin`.
//!
//! ## States
//!
//! | State      | Description                                   |
//! |------------|-----------------------------------------------|
//! | `Loading`  | Initial state; simulated fetch in progress    |
//! | `Browsing` | Catalog installed; browse systems active      |
//!
//! ## Systems (registered by `CatalogPlugin`)
//!
//! | System            | Schedule              | Purpose                      |
//! |-------------------|-----------------------|------------------------------|
//! | `deliver_catalog` | `Update / in Loading` | Install records on timer end |

use bevy::prelude::*;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{builtin_games, CATALOG_LOAD_SECS};
use crate::error::sanitize_catalog;

// ── Records ───────────────────────────────────────────────────────────────────

/// Category of a game, plus the `All` filter sentinel.
///
/// `All` exists only so the category filter can express "no filter"; a record
/// in the catalog never carries it (enforced at install time by
/// [`crate::error::sanitize_catalog`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameCategory {
    /// Filter-only sentinel: keep every category.
    #[default]
    All,
    Racing,
    Shooting,
    Puzzle,
    Adventure,
    Arcade,
    Hypercasual,
}

impl GameCategory {
    /// Every category filter the nav bar offers, in display order.
    pub const FILTERS: [GameCategory; 7] = [
        GameCategory::All,
        GameCategory::Racing,
        GameCategory::Shooting,
        GameCategory::Puzzle,
        GameCategory::Adventure,
        GameCategory::Arcade,
        GameCategory::Hypercasual,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            GameCategory::All => "All",
            GameCategory::Racing => "Racing",
            GameCategory::Shooting => "Shooting",
            GameCategory::Puzzle => "Puzzle",
            GameCategory::Adventure => "Adventure",
            GameCategory::Arcade => "Arcade",
            GameCategory::Hypercasual => "Hypercasual",
        }
    }

    /// True for the `All` sentinel, which may parameterize a filter but never
    /// appear on a record.
    pub fn is_filter_only(self) -> bool {
        matches!(self, GameCategory::All)
    }
}

/// One immutable catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// Unique numeric identifier.
    pub id: u32,
    pub title: String,
    pub category: GameCategory,
    /// Opaque cover-art reference; never dereferenced by the core.
    pub image_url: String,
    /// Opaque play location; logged when the user hits PLAY.
    pub game_url: String,
    pub rating: f32,
    /// Play counter used by the default Popular ordering.
    pub popularity: u32,
    /// ISO-8601 calendar date, `YYYY-MM-DD`.
    pub release_date: String,
    pub description: String,
}

impl Game {
    /// Parsed release date, or `None` when the string is not `YYYY-MM-DD`.
    pub fn release_day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.release_date, "%Y-%m-%d").ok()
    }
}

// ── Store ─────────────────────────────────────────────────────────────────────

/// The catalog store: the full ordered record list plus the loading flag.
///
/// Replaced wholesale by [`deliver_catalog`] exactly once per session; never
/// mutated element-wise. `version` increments on each wholesale replace and
/// keys the derived-view memoization in [`crate::pipeline`].
#[derive(Resource, Debug, Clone)]
pub struct GameCatalog {
    games: Vec<Game>,
    version: u64,
    is_loading: bool,
}

impl Default for GameCatalog {
    fn default() -> Self {
        Self {
            games: Vec::new(),
            version: 0,
            is_loading: true,
        }
    }
}

impl GameCatalog {
    /// The full unfiltered record list, in catalog order.
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// Monotonic install counter; 0 until the first install.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// True until the simulated fetch delivers. Consumers must treat this as
    /// "no data available yet", not as an empty result.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Replace the record list wholesale and clear the loading flag.
    pub fn install(&mut self, games: Vec<Game>) {
        self.games = games;
        self.version += 1;
        self.is_loading = false;
    }

    /// Case-insensitive exact title lookup over the full catalog.
    ///
    /// Titles are not guaranteed unique; the first match in catalog order
    /// wins.
    pub fn find_by_title(&self, title: &str) -> Option<&Game> {
        let needle = title.to_lowercase();
        self.games.iter().find(|g| g.title.to_lowercase() == needle)
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Injected source of catalog records.
///
/// The store never reaches for the compiled-in library itself; whatever list
/// this resource holds is what [`deliver_catalog`] installs. Tests substitute
/// their own fixtures here.
#[derive(Resource, Debug, Clone)]
pub struct CatalogLoader {
    games: Vec<Game>,
}

impl CatalogLoader {
    pub fn new(games: Vec<Game>) -> Self {
        Self { games }
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new(builtin_games())
    }
}

/// One-shot timer standing in for backend fetch latency.
///
/// Duration starts at [`CATALOG_LOAD_SECS`]; [`configure_load_timer`] rebuilds
/// it from `ShelfConfig` during `Startup`.
#[derive(Resource, Debug)]
pub struct CatalogLoadTimer(pub Timer);

impl Default for CatalogLoadTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(CATALOG_LOAD_SECS, TimerMode::Once))
    }
}

// ── App state ─────────────────────────────────────────────────────────────────

/// Top-level application state machine.
///
/// Every browse system runs under `.run_if(in_state(AppState::Browsing))`, so
/// nothing downstream ever observes a half-loaded catalog.
#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    /// Simulated fetch in progress; loading screen shown.
    #[default]
    Loading,
    /// Catalog installed; browse UI active.
    Browsing,
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Startup system: rebuild the load timer from the runtime config.
///
/// Must be ordered after `config::load_shelf_config` so file overrides win.
pub fn configure_load_timer(
    config: Res<crate::config::ShelfConfig>,
    mut timer: ResMut<CatalogLoadTimer>,
) {
    timer.0 = Timer::from_seconds(config.load_delay_secs.max(0.0), TimerMode::Once);
}

/// Tick the load timer; on completion install the loader's records and
/// transition to `Browsing`.
///
/// Records that violate catalog invariants (sentinel category, duplicate id)
/// are dropped with a warning rather than aborting the install. There is no
/// retry and no error path: the simulated fetch always delivers.
pub fn deliver_catalog(
    time: Res<Time>,
    mut timer: ResMut<CatalogLoadTimer>,
    loader: Res<CatalogLoader>,
    mut catalog: ResMut<GameCatalog>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if !timer.0.tick(time.delta()).finished() {
        return;
    }

    let (games, rejected) = sanitize_catalog(loader.games().to_vec());
    for err in &rejected {
        warn!("Dropping catalog record: {err}");
    }
    info!("Catalog installed: {} games", games.len());

    catalog.install(games);
    next_state.set(AppState::Browsing);
}

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers `AppState`, the store, the default loader, and the timed
/// delivery system.
///
/// Must be added before any plugin that calls
/// `.run_if(in_state(AppState::Browsing))`, so the state is always registered
/// first.
pub struct CatalogPlugin;

impl Plugin for CatalogPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_resource::<GameCatalog>()
            .init_resource::<CatalogLoader>()
            .init_resource::<CatalogLoadTimer>()
            .add_systems(
                Update,
                deliver_catalog.run_if(in_state(AppState::Loading)),
            );
    }
}
