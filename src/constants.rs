//! Centralised tunables and the compiled-in game library.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! Runtime overrides come from `assets/shelf.toml` via [`crate::config`];
//! this module remains the authoritative default source.

use crate::catalog::{Game, GameCategory};

// ── Catalog Load ──────────────────────────────────────────────────────────────

/// Simulated catalog fetch latency in seconds.
///
/// The store installs the library exactly once, after this delay has elapsed
/// on a non-blocking timer. Set to 0.0 to skip the loading screen entirely
/// (useful when iterating on browse UI).
pub const CATALOG_LOAD_SECS: f32 = 1.5;

// ── Window ────────────────────────────────────────────────────────────────────

/// Initial window width in logical pixels.
pub const WINDOW_WIDTH: u32 = 1280;

/// Initial window height in logical pixels.
pub const WINDOW_HEIGHT: u32 = 760;

// ── Browse Panel ──────────────────────────────────────────────────────────────

/// Number of card columns in grid view.
///
/// Card width is derived from this; values above 6 make titles unreadable at
/// the default window width.
pub const GRID_COLUMNS: u32 = 4;

/// Maximum characters accepted by the search box.
pub const SEARCH_MAX_LEN: usize = 40;

/// Starting sort key; parsed with `SortOption::from_key`, so anything
/// unrecognized degrades to "popular".
pub const DEFAULT_SORT_KEY: &str = "popular";

// ── Suggester ─────────────────────────────────────────────────────────────────

/// Size of the top-rated candidate pool the suggester draws from.
///
/// 1 always yields the single highest-rated game; larger pools trade
/// predictability for variety.
pub const SUGGESTION_POOL: usize = 5;

// ── Game Library ──────────────────────────────────────────────────────────────

/// The compiled-in game library.
///
/// This is the default payload handed to [`crate::catalog::CatalogLoader`];
/// the store itself never reads it directly, so tests can substitute any
/// list they like.
pub fn builtin_games() -> Vec<Game> {
    fn game(
        id: u32,
        title: &str,
        category: GameCategory,
        rating: f32,
        popularity: u32,
        release_date: &str,
        description: &str,
    ) -> Game {
        Game {
            id,
            title: title.to_string(),
            category,
            image_url: format!("covers/{id:03}.png"),
            game_url: format!("shelf://play/{id}"),
            rating,
            popularity,
            release_date: release_date.to_string(),
            description: description.to_string(),
        }
    }

    vec![
        game(
            1,
            "Neon Drift Grand Prix",
            GameCategory::Racing,
            4.6,
            18240,
            "2023-03-17",
            "Slide through rain-slick city circuits where every corner charges \
             your boost meter. Twelve tracks, mirror mode, and a merciless \
             rubber-band rival named Vex.",
        ),
        game(
            2,
            "Gravel Kings",
            GameCategory::Racing,
            4.1,
            9310,
            "2021-08-02",
            "Rally across mud, dust, and scree with a co-driver who never \
             stops talking. Tune suspension per stage or pay for it in the \
             ditch.",
        ),
        game(
            3,
            "Starlight Salvo",
            GameCategory::Shooting,
            4.4,
            15875,
            "2022-11-09",
            "A vertical bullet-curtain shooter about a tow ship with a \
             salvaged railgun. Graze enemy fire to bank salvage and spend it \
             mid-run on hull mods.",
        ),
        game(
            4,
            "Tin Can Alley Forever",
            GameCategory::Shooting,
            3.8,
            6402,
            "2020-05-21",
            "The county-fair classic, except the cans shoot back. Short \
             rounds, daft hats, and a shotgun that reloads one shell at a \
             time.",
        ),
        game(
            5,
            "Lumen Loops",
            GameCategory::Puzzle,
            4.8,
            22109,
            "2024-02-14",
            "Rotate light conduits to close circuits before the battery \
             drains. Starts gentle, ends with prisms, mirrors, and a level \
             editor the community has gone feral over.",
        ),
        game(
            6,
            "Crate Expectations",
            GameCategory::Puzzle,
            4.2,
            11986,
            "2022-06-30",
            "A warehouse sokoban with a forklift that can only turn left. \
             Two hundred hand-built floors and a daily shuffle mode.",
        ),
        game(
            7,
            "The Cartographer's Debt",
            GameCategory::Adventure,
            4.7,
            13554,
            "2023-10-05",
            "Chart an archipelago to pay off a map-maker's guild that owns \
             your name. Every island you survey redraws the world map other \
             players sail by.",
        ),
        game(
            8,
            "Mosswood Post",
            GameCategory::Adventure,
            4.3,
            8077,
            "2021-04-12",
            "Deliver letters through a forest that rearranges itself at \
             dusk. No combat, one bicycle, many regrets.",
        ),
        game(
            9,
            "Comet Juggler",
            GameCategory::Arcade,
            4.0,
            19762,
            "2020-09-18",
            "Keep three comets aloft with a paddle bolted to a lighthouse. \
             One-button play, leaderboard decay every Sunday at midnight.",
        ),
        game(
            10,
            "Pixel Pit Fighter",
            GameCategory::Arcade,
            3.9,
            14630,
            "2019-12-03",
            "Six-button brawling with a roster of disgruntled vending \
             machines. Infinite continues, zero mercy.",
        ),
        game(
            11,
            "Tap Tap Meteor",
            GameCategory::Hypercasual,
            3.6,
            30518,
            "2024-01-22",
            "Tap to split meteors before they land on your very small, very \
             flammable town. Runs last about forty seconds. So will your \
             battery.",
        ),
        game(
            12,
            "Idle Orchard",
            GameCategory::Hypercasual,
            3.7,
            25341,
            "2023-07-08",
            "Trees grow while you are away; fruit compounds while you \
             pretend not to check. A prestige system dressed up as autumn.",
        ),
    ]
}
