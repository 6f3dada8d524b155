//! The suggestion collaborator.
//!
//! Receives the full unfiltered catalog and produces one pick for the
//! suggester dialog. The pick is drawn from a small pool of the highest-rated
//! games so repeat visits vary without ever recommending shovelware. The only
//! way back into the core is the title handed to
//! [`crate::dialog::PlaySuggestedTitle`], which the dialog resolves itself.

use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{AppState, Game, GameCatalog};
use crate::config::ShelfConfig;
use crate::dialog::SuggesterDialog;

/// One suggestion: a catalog title plus a short pitch for the dialog body.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub title: String,
    pub pitch: String,
}

/// The suggestion currently shown in the dialog, if any.
#[derive(Resource, Debug, Clone, Default)]
pub struct CurrentSuggestion(pub Option<Suggestion>);

/// Pick a suggestion from `games`.
///
/// The candidate pool is the `pool` highest-rated games (minimum 1); the pick
/// within the pool is uniform. Returns `None` only for an empty catalog.
pub fn suggest_from<R: Rng>(games: &[Game], pool: usize, rng: &mut R) -> Option<Suggestion> {
    if games.is_empty() {
        return None;
    }

    let mut by_rating: Vec<&Game> = games.iter().collect();
    by_rating.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    by_rating.truncate(pool.max(1));

    let pick = by_rating.choose(rng)?;
    Some(Suggestion {
        title: pick.title.clone(),
        pitch: pitch_for(pick),
    })
}

/// A one-line pitch built from the record itself.
fn pitch_for(game: &Game) -> String {
    format!(
        "A {} pick rated {:.1}. {}",
        game.category.label().to_lowercase(),
        game.rating,
        first_sentence(&game.description),
    )
}

/// The description up to and including its first period, or all of it.
fn first_sentence(text: &str) -> &str {
    match text.find('.') {
        Some(end) => &text[..=end],
        None => text,
    }
}

/// Draw a fresh suggestion whenever the dialog opens.
///
/// Keyed on change detection of the dialog flag, so reopening redraws but an
/// open dialog keeps its pick stable across frames.
pub fn draw_suggestion(
    dialog: Res<SuggesterDialog>,
    catalog: Res<GameCatalog>,
    config: Res<ShelfConfig>,
    mut current: ResMut<CurrentSuggestion>,
) {
    if !dialog.is_changed() || !dialog.open {
        return;
    }

    current.0 = suggest_from(catalog.games(), config.suggestion_pool, &mut rand::thread_rng());
    if let Some(suggestion) = &current.0 {
        info!("Suggesting '{}'", suggestion.title);
    }
}

/// Registers the suggestion state and the draw system.
pub struct SuggesterPlugin;

impl Plugin for SuggesterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentSuggestion>().add_systems(
            Update,
            draw_suggestion
                .after(crate::dialog::suggester_message_system)
                .run_if(in_state(AppState::Browsing)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GameCategory;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn game(id: u32, title: &str, rating: f32) -> Game {
        Game {
            id,
            title: title.to_string(),
            category: GameCategory::Arcade,
            image_url: String::new(),
            game_url: String::new(),
            rating,
            popularity: 0,
            release_date: "2021-01-01".to_string(),
            description: "Short. Long tail that never shows.".to_string(),
        }
    }

    #[test]
    fn empty_catalog_yields_no_suggestion() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(suggest_from(&[], 5, &mut rng).is_none());
    }

    #[test]
    fn pool_of_one_always_picks_the_top_rated_game() {
        let games = vec![
            game(1, "Mid", 3.0),
            game(2, "Best", 4.9),
            game(3, "Low", 2.1),
        ];
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            let suggestion = suggest_from(&games, 1, &mut rng).unwrap();
            assert_eq!(suggestion.title, "Best");
        }
    }

    #[test]
    fn suggestion_title_always_comes_from_the_catalog() {
        let games = vec![game(1, "A", 4.0), game(2, "B", 3.5), game(3, "C", 4.5)];
        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let suggestion = suggest_from(&games, 5, &mut rng).unwrap();
            assert!(games.iter().any(|g| g.title == suggestion.title));
        }
    }

    #[test]
    fn pitch_uses_only_the_first_sentence() {
        let games = vec![game(1, "A", 4.0)];
        let mut rng = StdRng::seed_from_u64(1);
        let suggestion = suggest_from(&games, 1, &mut rng).unwrap();
        assert!(suggestion.pitch.contains("Short."));
        assert!(!suggestion.pitch.contains("Long tail"));
    }

    #[test]
    fn zero_pool_is_clamped_to_one() {
        let games = vec![game(1, "Only", 4.0)];
        let mut rng = StdRng::seed_from_u64(2);
        assert!(suggest_from(&games, 0, &mut rng).is_some());
    }
}
