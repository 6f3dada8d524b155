//! The suggestion dialog overlay.
//!
//! Presents whatever [`CurrentSuggestion`] holds, with PLAY handing the title
//! back to the core through [`PlaySuggestedTitle`] — the dialog never opens a
//! game itself.

use bevy::prelude::*;

use super::common::*;
use crate::catalog::GameCatalog;
use crate::config::ShelfConfig;
use crate::dialog::{CloseSuggester, PlaySuggestedTitle, SuggesterDialog};
use crate::suggester::{suggest_from, CurrentSuggestion};

/// Root node of the suggester overlay; despawned when the dialog closes.
#[derive(Component)]
pub struct SuggesterRoot;

/// Tags the "PLAY IT" button.
#[derive(Component)]
pub struct SuggesterPlayButton;

/// Tags the "ANOTHER" reroll button.
#[derive(Component)]
pub struct SuggesterAnotherButton;

/// Tags the "CLOSE" button.
#[derive(Component)]
pub struct SuggesterCloseButton;

/// Keep the overlay in step with the dialog flag and the current pick.
pub fn sync_suggester_dialog(
    mut commands: Commands,
    dialog: Res<SuggesterDialog>,
    suggestion: Res<CurrentSuggestion>,
    existing: Query<Entity, With<SuggesterRoot>>,
) {
    if !dialog.is_changed() && !suggestion.is_changed() {
        return;
    }
    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }
    if !dialog.open {
        return;
    }

    let (headline, pitch) = match suggestion.0.as_ref() {
        Some(s) => (s.title.clone(), s.pitch.clone()),
        None => (
            "The shelf is empty".to_string(),
            "Nothing to suggest yet.".to_string(),
        ),
    };

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                ..default()
            },
            BackgroundColor(overlay_dim()),
            SuggesterRoot,
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        width: Val::Px(460.0),
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(26.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(panel_bg()),
                    BorderColor::all(play_border()),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::new("NEED A PICK?"),
                        TextFont {
                            font_size: 20.0,
                            ..default()
                        },
                        TextColor(subtitle_color()),
                    ));

                    spacer(panel, 10.0);

                    panel.spawn((
                        Text::new(headline),
                        TextFont {
                            font_size: 26.0,
                            ..default()
                        },
                        TextColor(title_color()),
                    ));

                    spacer(panel, 10.0);

                    panel.spawn((
                        Text::new(pitch),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(meta_color()),
                    ));

                    spacer(panel, 20.0);

                    panel
                        .spawn(Node {
                            align_items: AlignItems::Center,
                            ..default()
                        })
                        .with_children(|buttons| {
                            text_button(
                                buttons,
                                "PLAY IT",
                                15.0,
                                Val::Px(120.0),
                                Val::Px(40.0),
                                play_bg(),
                                play_border(),
                                play_text(),
                                SuggesterPlayButton,
                            );
                            text_button(
                                buttons,
                                "ANOTHER",
                                15.0,
                                Val::Px(120.0),
                                Val::Px(40.0),
                                nav_bg(),
                                nav_border(),
                                nav_text(),
                                SuggesterAnotherButton,
                            );
                            text_button(
                                buttons,
                                "CLOSE",
                                15.0,
                                Val::Px(100.0),
                                Val::Px(40.0),
                                dismiss_bg(),
                                dismiss_border(),
                                dismiss_text(),
                                SuggesterCloseButton,
                            );
                        });
                });
        });
}

/// Handle PLAY IT / ANOTHER / CLOSE presses.
#[allow(clippy::too_many_arguments)]
pub fn suggester_button_system(
    play_query: Query<&Interaction, (Changed<Interaction>, With<SuggesterPlayButton>)>,
    another_query: Query<&Interaction, (Changed<Interaction>, With<SuggesterAnotherButton>)>,
    close_query: Query<&Interaction, (Changed<Interaction>, With<SuggesterCloseButton>)>,
    catalog: Res<GameCatalog>,
    config: Res<ShelfConfig>,
    mut current: ResMut<CurrentSuggestion>,
    mut plays: MessageWriter<PlaySuggestedTitle>,
    mut closes: MessageWriter<CloseSuggester>,
) {
    for interaction in play_query.iter() {
        if *interaction == Interaction::Pressed {
            if let Some(s) = current.0.as_ref() {
                plays.write(PlaySuggestedTitle(s.title.clone()));
            }
        }
    }

    for interaction in another_query.iter() {
        if *interaction == Interaction::Pressed {
            current.0 = suggest_from(
                catalog.games(),
                config.suggestion_pool,
                &mut rand::thread_rng(),
            );
        }
    }

    for interaction in close_query.iter() {
        if *interaction == Interaction::Pressed {
            closes.write(CloseSuggester);
        }
    }
}
