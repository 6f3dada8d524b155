//! Presentation layer — `ShelfUiPlugin` and the screen modules.
//!
//! ## Systems (registered by `ShelfUiPlugin`)
//!
//! | Area         | Schedule                 | Purpose                         |
//! |--------------|--------------------------|---------------------------------|
//! | loading      | `OnEnter/OnExit(Loading)`| Loading splash                  |
//! | browse shell | `OnEnter(Browsing)`      | Header, nav, filter bar, panel  |
//! | widgets      | `Update / in Browsing`   | Button handling, text mirroring |
//! | overlays     | `Update / in Browsing`   | Detail modal, suggester dialog  |
//!
//! The layer only reads the core's outbound resources and writes selection
//! resources or dialog messages; nothing here owns browse state.

use bevy::prelude::*;

mod common;

pub mod category_nav;
pub mod detail_modal;
pub mod filter_bar;
pub mod game_panel;
pub mod header;
pub mod loading;
pub mod suggester_ui;

use crate::catalog::AppState;
use crate::dialog::{CloseGameDetail, CloseSuggester, SelectedGame, SuggesterDialog};

/// Root node of the browse shell; despawned on `OnExit(Browsing)`.
#[derive(Component)]
pub struct BrowseRoot;

/// Spawn the 2D camera the UI renders through.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Spawn the browse shell: header, category nav, filter bar, game panel.
pub fn setup_browse_screen(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BrowseRoot,
        ))
        .with_children(|root| {
            header::spawn_header(root);
            category_nav::spawn_category_nav(root);
            filter_bar::spawn_filter_bar(root);
            game_panel::spawn_game_panel(root);
        });
}

/// Recursively despawn the browse shell.
pub fn cleanup_browse_screen(mut commands: Commands, query: Query<Entity, With<BrowseRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// ESC closes the topmost overlay: suggester first, then the detail modal.
pub fn dismiss_overlay_system(
    keys: Res<ButtonInput<KeyCode>>,
    selected: Res<SelectedGame>,
    suggester: Res<SuggesterDialog>,
    mut close_detail: MessageWriter<CloseGameDetail>,
    mut close_suggester: MessageWriter<CloseSuggester>,
) {
    if !keys.just_pressed(KeyCode::Escape) {
        return;
    }
    if suggester.open {
        close_suggester.write(CloseSuggester);
    } else if selected.0.is_some() {
        close_detail.write(CloseGameDetail);
    }
}

/// Registers the camera, both screens, and every widget system.
pub struct ShelfUiPlugin;

impl Plugin for ShelfUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(OnEnter(AppState::Loading), loading::setup_loading_screen)
            .add_systems(OnExit(AppState::Loading), loading::cleanup_loading_screen)
            .add_systems(OnEnter(AppState::Browsing), setup_browse_screen)
            .add_systems(OnExit(AppState::Browsing), cleanup_browse_screen)
            .add_systems(
                Update,
                (
                    header::search_input_system,
                    header::search_display_system,
                    header::suggest_button_system,
                    category_nav::category_button_system,
                    category_nav::category_highlight_system,
                    filter_bar::sort_button_system,
                    filter_bar::sort_highlight_system,
                    filter_bar::view_button_system,
                    filter_bar::view_highlight_system,
                )
                    .run_if(in_state(AppState::Browsing)),
            )
            .add_systems(
                Update,
                (
                    filter_bar::match_count_system
                        .after(crate::pipeline::refresh_derived_view),
                    game_panel::rebuild_game_panel
                        .after(crate::pipeline::refresh_derived_view),
                    game_panel::game_card_system,
                    dismiss_overlay_system,
                    detail_modal::sync_detail_modal
                        .after(crate::dialog::game_detail_message_system)
                        .after(crate::dialog::play_suggested_system),
                    detail_modal::modal_button_system,
                    suggester_ui::sync_suggester_dialog
                        .after(crate::suggester::draw_suggestion)
                        .after(crate::dialog::suggester_message_system)
                        .after(crate::dialog::play_suggested_system),
                    suggester_ui::suggester_button_system,
                )
                    .run_if(in_state(AppState::Browsing)),
            );
    }
}
