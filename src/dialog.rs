//! Selected-game and suggester-dialog state, plus the messages that drive
//! them.
//!
//! At most one game is "open" for the detail overlay at a time; the suggester
//! flag toggles independently. Both live here, owned by nothing but their
//! resources — the UI only reads them and writes messages.

use bevy::prelude::*;

use crate::catalog::{AppState, Game, GameCatalog};

// ── State ─────────────────────────────────────────────────────────────────────

/// The game currently open in the detail overlay, or none.
#[derive(Resource, Debug, Clone, Default)]
pub struct SelectedGame(pub Option<Game>);

/// Whether the suggestion dialog is open.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct SuggesterDialog {
    pub open: bool,
}

// ── Messages ──────────────────────────────────────────────────────────────────

/// Open the detail overlay for this game, overwriting any previous selection.
#[derive(Message, Debug, Clone)]
pub struct OpenGameDetail(pub Game);

/// Close the detail overlay.
#[derive(Message, Debug, Clone, Copy)]
pub struct CloseGameDetail;

/// Open the suggestion dialog.
#[derive(Message, Debug, Clone, Copy)]
pub struct OpenSuggester;

/// Close the suggestion dialog.
#[derive(Message, Debug, Clone, Copy)]
pub struct CloseSuggester;

/// Play a game the suggester named. The title is looked up case-insensitively
/// against the **full** catalog, not the filtered view.
#[derive(Message, Debug, Clone)]
pub struct PlaySuggestedTitle(pub String);

// ── Systems ───────────────────────────────────────────────────────────────────

/// Apply open/close requests to [`SelectedGame`].
///
/// An open arriving in the same frame as a close wins: `OpenGameDetail`
/// overwrites unconditionally. The resource is only written when a request
/// actually arrived, keeping change detection quiet otherwise.
pub fn game_detail_message_system(
    mut closes: MessageReader<CloseGameDetail>,
    mut opens: MessageReader<OpenGameDetail>,
    mut selected: ResMut<SelectedGame>,
) {
    let mut next = None;
    if closes.read().next().is_some() {
        next = Some(None);
    }
    for OpenGameDetail(game) in opens.read() {
        next = Some(Some(game.clone()));
    }
    if let Some(value) = next {
        selected.0 = value;
    }
}

/// Apply open/close requests to [`SuggesterDialog`].
pub fn suggester_message_system(
    mut closes: MessageReader<CloseSuggester>,
    mut opens: MessageReader<OpenSuggester>,
    mut dialog: ResMut<SuggesterDialog>,
) {
    let mut next = None;
    if closes.read().next().is_some() {
        next = Some(false);
    }
    if opens.read().next().is_some() {
        next = Some(true);
    }
    if let Some(open) = next {
        dialog.open = open;
    }
}

/// Resolve [`PlaySuggestedTitle`] requests.
///
/// On a hit: close the suggester and open that game's detail overlay. On a
/// miss: warn and change nothing; neither the current selection nor the
/// dialog flag moves.
pub fn play_suggested_system(
    mut requests: MessageReader<PlaySuggestedTitle>,
    catalog: Res<GameCatalog>,
    mut selected: ResMut<SelectedGame>,
    mut dialog: ResMut<SuggesterDialog>,
) {
    for PlaySuggestedTitle(title) in requests.read() {
        match catalog.find_by_title(title) {
            Some(game) => {
                info!("Opening suggested game '{}'", game.title);
                dialog.open = false;
                selected.0 = Some(game.clone());
            }
            None => {
                warn!("Suggested title '{title}' is not in the catalog; ignoring");
            }
        }
    }
}

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers dialog state, messages, and their apply systems.
pub struct DialogPlugin;

impl Plugin for DialogPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectedGame>()
            .init_resource::<SuggesterDialog>()
            .add_message::<OpenGameDetail>()
            .add_message::<CloseGameDetail>()
            .add_message::<OpenSuggester>()
            .add_message::<CloseSuggester>()
            .add_message::<PlaySuggestedTitle>()
            .add_systems(
                Update,
                (
                    game_detail_message_system,
                    suggester_message_system,
                    play_suggested_system.after(suggester_message_system),
                )
                    .run_if(in_state(AppState::Browsing)),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GameCategory;
    use bevy::state::app::StatesPlugin;

    fn record(id: u32, title: &str) -> Game {
        Game {
            id,
            title: title.to_string(),
            category: GameCategory::Racing,
            image_url: String::new(),
            game_url: String::new(),
            rating: 4.0,
            popularity: 10,
            release_date: "2022-01-01".to_string(),
            description: String::new(),
        }
    }

    /// Headless app with the dialog machinery registered without state
    /// gating, so tests can drive messages frame by frame.
    fn dialog_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin));
        app.init_resource::<SelectedGame>()
            .init_resource::<SuggesterDialog>()
            .add_message::<OpenGameDetail>()
            .add_message::<CloseGameDetail>()
            .add_message::<OpenSuggester>()
            .add_message::<CloseSuggester>()
            .add_message::<PlaySuggestedTitle>()
            .add_systems(
                Update,
                (
                    game_detail_message_system,
                    suggester_message_system,
                    play_suggested_system.after(suggester_message_system),
                ),
            );

        let mut catalog = GameCatalog::default();
        catalog.install(vec![record(1, "Racer X"), record(2, "Lumen Loops")]);
        app.insert_resource(catalog);
        app
    }

    #[test]
    fn open_overwrites_previous_selection_and_close_clears() {
        let mut app = dialog_app();

        app.world_mut().write_message(OpenGameDetail(record(1, "Racer X")));
        app.update();
        assert_eq!(
            app.world().resource::<SelectedGame>().0.as_ref().map(|g| g.id),
            Some(1)
        );

        app.world_mut()
            .write_message(OpenGameDetail(record(2, "Lumen Loops")));
        app.update();
        assert_eq!(
            app.world().resource::<SelectedGame>().0.as_ref().map(|g| g.id),
            Some(2)
        );

        app.world_mut().write_message(CloseGameDetail);
        app.update();
        assert!(app.world().resource::<SelectedGame>().0.is_none());
    }

    #[test]
    fn suggester_toggles_independently_of_selection() {
        let mut app = dialog_app();

        app.world_mut().write_message(OpenGameDetail(record(1, "Racer X")));
        app.world_mut().write_message(OpenSuggester);
        app.update();
        assert!(app.world().resource::<SuggesterDialog>().open);
        assert!(app.world().resource::<SelectedGame>().0.is_some());

        app.world_mut().write_message(CloseSuggester);
        app.update();
        assert!(!app.world().resource::<SuggesterDialog>().open);
        assert!(
            app.world().resource::<SelectedGame>().0.is_some(),
            "closing the suggester must not clear the detail selection"
        );
    }

    #[test]
    fn play_suggested_hit_closes_suggester_and_opens_detail() {
        let mut app = dialog_app();

        app.world_mut().write_message(OpenSuggester);
        app.update();

        app.world_mut()
            .write_message(PlaySuggestedTitle("racer x".to_string()));
        app.update();

        assert!(!app.world().resource::<SuggesterDialog>().open);
        let selected = app.world().resource::<SelectedGame>();
        assert_eq!(selected.0.as_ref().map(|g| g.title.as_str()), Some("Racer X"));
    }

    #[test]
    fn play_suggested_miss_changes_nothing() {
        let mut app = dialog_app();

        app.world_mut().write_message(OpenSuggester);
        app.update();

        app.world_mut()
            .write_message(PlaySuggestedTitle("nonexistent".to_string()));
        app.update();

        assert!(
            app.world().resource::<SuggesterDialog>().open,
            "a miss must leave the suggester open"
        );
        assert!(app.world().resource::<SelectedGame>().0.is_none());
    }
}
