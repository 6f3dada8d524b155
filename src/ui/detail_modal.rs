//! The game detail overlay.
//!
//! Layout (appears centred over the dimmed shelf):
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ ░░░░░░░░░ semi-transparent overlay ░░░░░░░░ │
//! │ ░░░░   ┌─────────────────────────────┐  ░░░ │
//! │ ░░░░   │  NEON DRIFT GRAND PRIX      │  ░░░ │
//! │ ░░░░   │  Racing · ★ 4.6 · 2023-03-17│  ░░░ │
//! │ ░░░░   │  Slide through rain-slick…  │  ░░░ │
//! │ ░░░░   │   [ PLAY NOW ]  [ CLOSE ]   │  ░░░ │
//! │ ░░░░   └─────────────────────────────┘  ░░░ │
//! └─────────────────────────────────────────────┘
//! ```

use bevy::prelude::*;

use super::common::*;
use crate::catalog::Game;
use crate::dialog::{CloseGameDetail, SelectedGame};

/// Root node of the detail overlay; despawned whenever the selection clears.
#[derive(Component)]
pub struct DetailModalRoot;

/// Tags the "PLAY NOW" button.
#[derive(Component)]
pub struct ModalPlayButton;

/// Tags the "CLOSE" button.
#[derive(Component)]
pub struct ModalCloseButton;

/// Keep the overlay in step with [`SelectedGame`]: despawn on clear, respawn
/// on every change of the open game.
pub fn sync_detail_modal(
    mut commands: Commands,
    selected: Res<SelectedGame>,
    existing: Query<Entity, With<DetailModalRoot>>,
) {
    if !selected.is_changed() {
        return;
    }
    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }
    if let Some(game) = selected.0.as_ref() {
        spawn_detail_modal(&mut commands, game);
    }
}

fn spawn_detail_modal(commands: &mut Commands, game: &Game) {
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
            DetailModalRoot,
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        width: Val::Px(520.0),
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(26.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(panel_bg()),
                    BorderColor::all(nav_active_border()),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::new(game.title.clone()),
                        TextFont {
                            font_size: 28.0,
                            ..default()
                        },
                        TextColor(title_color()),
                    ));

                    spacer(panel, 6.0);

                    panel.spawn((
                        Text::new(format!(
                            "{}  ·  ★ {:.1}  ·  {} plays  ·  released {}",
                            game.category.label(),
                            game.rating,
                            game.popularity,
                            game.release_date
                        )),
                        TextFont {
                            font_size: 13.0,
                            ..default()
                        },
                        TextColor(rating_color()),
                    ));

                    spacer(panel, 16.0);

                    panel.spawn((
                        Text::new(game.description.clone()),
                        TextFont {
                            font_size: 15.0,
                            ..default()
                        },
                        TextColor(subtitle_color()),
                    ));

                    spacer(panel, 22.0);

                    panel
                        .spawn(Node {
                            align_items: AlignItems::Center,
                            ..default()
                        })
                        .with_children(|buttons| {
                            text_button(
                                buttons,
                                "PLAY NOW",
                                16.0,
                                Val::Px(150.0),
                                Val::Px(44.0),
                                play_bg(),
                                play_border(),
                                play_text(),
                                ModalPlayButton,
                            );
                            text_button(
                                buttons,
                                "CLOSE",
                                16.0,
                                Val::Px(110.0),
                                Val::Px(44.0),
                                dismiss_bg(),
                                dismiss_border(),
                                dismiss_text(),
                                ModalCloseButton,
                            );
                        });
                });
        });
}

/// Handle PLAY NOW and CLOSE presses inside the overlay.
///
/// PLAY is where a launcher integration would hook in; for now the play
/// location is logged and the overlay stays up.
pub fn modal_button_system(
    play_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<ModalPlayButton>)>,
    close_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<ModalCloseButton>)>,
    mut btn_text: Query<&mut TextColor>,
    selected: Res<SelectedGame>,
    mut closes: MessageWriter<CloseGameDetail>,
) {
    for (interaction, children) in play_query.iter() {
        match interaction {
            Interaction::Pressed => {
                if let Some(game) = selected.0.as_ref() {
                    info!("Launching '{}' ({})", game.title, game.game_url);
                }
            }
            Interaction::Hovered => {
                for child in children.iter() {
                    if let Ok(mut color) = btn_text.get_mut(child) {
                        *color = TextColor(Color::WHITE);
                    }
                }
            }
            Interaction::None => {
                for child in children.iter() {
                    if let Ok(mut color) = btn_text.get_mut(child) {
                        *color = TextColor(play_text());
                    }
                }
            }
        }
    }

    for (interaction, children) in close_query.iter() {
        match interaction {
            Interaction::Pressed => {
                closes.write(CloseGameDetail);
            }
            Interaction::Hovered => {
                for child in children.iter() {
                    if let Ok(mut color) = btn_text.get_mut(child) {
                        *color = TextColor(Color::WHITE);
                    }
                }
            }
            Interaction::None => {
                for child in children.iter() {
                    if let Ok(mut color) = btn_text.get_mut(child) {
                        *color = TextColor(dismiss_text());
                    }
                }
            }
        }
    }
}
