//! Headless unit tests for the [`AppState`] state machine.
//!
//! These tests use [`MinimalPlugins`] — no window, no rendering — so they run
//! fast and deterministically in CI.
//!
//! Covered scenarios:
//! 1. Default initial state is `Loading`.
//! 2. A zero-delay load timer transitions `Loading` → `Browsing`.
//! 3. The default 1.5 s timer keeps the app in `Loading` across early frames.
//! 4. `Browsing` persists across frames with no new transition request.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use gameshelf::catalog::{
    AppState, CatalogLoadTimer, CatalogLoader, CatalogPlugin, Game, GameCatalog, GameCategory,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn sample_game(id: u32, title: &str) -> Game {
    Game {
        id,
        title: title.to_string(),
        category: GameCategory::Arcade,
        image_url: String::new(),
        game_url: String::new(),
        rating: 4.0,
        popularity: 25,
        release_date: "2022-03-03".to_string(),
        description: String::new(),
    }
}

/// Build a minimal headless app with the full catalog machinery registered.
///
/// `MinimalPlugins` provides the required scheduling infrastructure.
/// `StatesPlugin` adds the `StateTransition` schedule needed by `init_state`.
/// No window or rendering is created.
fn app_with_catalog() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.add_plugins(CatalogPlugin);
    app.insert_resource(CatalogLoader::new(vec![
        sample_game(1, "Comet Juggler"),
        sample_game(2, "Lumen Loops"),
    ]));
    app
}

/// Same app with the load delay collapsed to zero, so the very first frame
/// delivers the catalog.
fn app_with_instant_load() -> App {
    let mut app = app_with_catalog();
    app.insert_resource(CatalogLoadTimer(Timer::from_seconds(0.0, TimerMode::Once)));
    app
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// The default variant of `AppState` is `Loading`.
#[test]
fn default_state_is_loading() {
    let mut app = app_with_catalog();
    app.update(); // run one frame so StateTransition fires

    let state = app.world().resource::<State<AppState>>();
    assert_eq!(*state.get(), AppState::Loading, "initial state must be Loading");
    assert!(
        app.world().resource::<GameCatalog>().is_loading(),
        "the store must report loading before delivery"
    );
}

/// A zero-delay timer delivers on the first `Update`; the state machine lands
/// in `Browsing` on the following `StateTransition` pass.
#[test]
fn instant_load_transitions_to_browsing() {
    let mut app = app_with_instant_load();
    app.update(); // timer fires, delivery requests Browsing
    app.update(); // StateTransition applies the request

    let state = app.world().resource::<State<AppState>>();
    assert_eq!(*state.get(), AppState::Browsing);

    let catalog = app.world().resource::<GameCatalog>();
    assert!(!catalog.is_loading());
    assert_eq!(catalog.games().len(), 2);
    assert_eq!(catalog.version(), 1);
}

/// With the default 1.5 s delay, a handful of immediate frames must not
/// deliver anything.
#[test]
fn default_delay_keeps_loading_across_early_frames() {
    let mut app = app_with_catalog();
    for _ in 0..5 {
        app.update();
    }

    let state = app.world().resource::<State<AppState>>();
    assert_eq!(*state.get(), AppState::Loading);
    assert!(app.world().resource::<GameCatalog>().games().is_empty());
}

/// `Browsing` persists across additional frames — no accidental reversion,
/// and no second install.
#[test]
fn browsing_state_persists_across_frames() {
    let mut app = app_with_instant_load();
    app.update();
    app.update();

    for _ in 0..5 {
        app.update();
    }

    let state = app.world().resource::<State<AppState>>();
    assert_eq!(
        *state.get(),
        AppState::Browsing,
        "Browsing must remain stable without a new transition"
    );
    assert_eq!(
        app.world().resource::<GameCatalog>().version(),
        1,
        "the catalog must be installed exactly once per session"
    );
}
