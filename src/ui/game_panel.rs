//! The shelf itself: the derived view rendered as a card wall or a row list.
//!
//! Cards are rebuilt from scratch whenever the derived view or the view mode
//! changes; the memoized pipeline keeps that from firing on frames where
//! nothing moved.

use bevy::prelude::*;

use super::common::*;
use crate::catalog::Game;
use crate::config::ShelfConfig;
use crate::dialog::OpenGameDetail;
use crate::pipeline::DerivedView;
use crate::selection::{SelectedViewMode, ViewMode};

/// Container all cards are spawned under.
#[derive(Component)]
pub struct GamePanelRoot;

/// Tags every rebuilt child of the panel (cards and the empty notice).
#[derive(Component)]
pub struct GamePanelEntry;

/// Tags a clickable card with its index into the derived view.
#[derive(Component)]
pub struct GameCard(pub usize);

/// Spawn the (initially empty) scrolling panel area.
pub fn spawn_game_panel(parent: &mut ChildSpawnerCommands<'_>) {
    parent.spawn((
        Node {
            width: Val::Percent(100.0),
            flex_grow: 1.0,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            align_content: AlignContent::FlexStart,
            padding: UiRect::all(Val::Px(10.0)),
            ..default()
        },
        GamePanelRoot,
    ));
}

/// Tear down and respawn the card entities from the current derived view.
pub fn rebuild_game_panel(
    mut commands: Commands,
    view: Res<DerivedView>,
    mode: Res<SelectedViewMode>,
    config: Res<ShelfConfig>,
    panel: Query<Entity, With<GamePanelRoot>>,
    entries: Query<Entity, With<GamePanelEntry>>,
) {
    if !view.is_changed() && !mode.is_changed() {
        return;
    }
    let Ok(panel) = panel.single() else {
        return;
    };

    for entity in entries.iter() {
        commands.entity(entity).despawn();
    }

    commands.entity(panel).with_children(|panel| {
        if view.games().is_empty() {
            panel
                .spawn((
                    Node {
                        width: Val::Percent(100.0),
                        justify_content: JustifyContent::Center,
                        padding: UiRect::all(Val::Px(40.0)),
                        ..default()
                    },
                    GamePanelEntry,
                ))
                .with_children(|notice| {
                    notice.spawn((
                        Text::new("No games match your filters"),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(subtitle_color()),
                    ));
                });
            return;
        }

        for (index, game) in view.games().iter().enumerate() {
            match mode.0 {
                ViewMode::Grid => spawn_grid_card(panel, index, game, config.grid_columns),
                ViewMode::List => spawn_list_row(panel, index, game),
            }
        }
    });
}

/// One card in the grid wall.
fn spawn_grid_card(
    parent: &mut ChildSpawnerCommands<'_>,
    index: usize,
    game: &Game,
    columns: u32,
) {
    // Leave ~2% per card for the margins so `columns` cards fit a row.
    let width = Val::Percent(100.0 / columns.max(1) as f32 - 2.0);

    parent
        .spawn((
            Button,
            Node {
                width,
                height: Val::Px(140.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::SpaceBetween,
                padding: UiRect::all(Val::Px(14.0)),
                margin: UiRect::all(Val::Px(8.0)),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(card_bg()),
            BorderColor::all(card_border()),
            GamePanelEntry,
            GameCard(index),
        ))
        .with_children(|card| {
            card.spawn((
                Text::new(game.title.clone()),
                TextFont {
                    font_size: 17.0,
                    ..default()
                },
                TextColor(card_title_color()),
            ));
            card.spawn((
                Text::new(format!("{}  ·  ★ {:.1}", game.category.label(), game.rating)),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(rating_color()),
            ));
            card.spawn((
                Text::new(format!("{} plays  ·  {}", game.popularity, game.release_date)),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(meta_color()),
            ));
        });
}

/// One full-width row in list mode.
fn spawn_list_row(parent: &mut ChildSpawnerCommands<'_>, index: usize, game: &Game) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Percent(100.0),
                height: Val::Px(52.0),
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::Center,
                padding: UiRect {
                    left: Val::Px(16.0),
                    right: Val::Px(16.0),
                    ..default()
                },
                margin: UiRect {
                    bottom: Val::Px(6.0),
                    ..default()
                },
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(card_bg()),
            BorderColor::all(card_border()),
            GamePanelEntry,
            GameCard(index),
        ))
        .with_children(|row| {
            row.spawn((
                Text::new(game.title.clone()),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(card_title_color()),
            ));
            row.spawn((
                Text::new(format!(
                    "{}  ·  ★ {:.1}  ·  {} plays  ·  {}",
                    game.category.label(),
                    game.rating,
                    game.popularity,
                    game.release_date
                )),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(meta_color()),
            ));
        });
}

/// Open the detail overlay for a clicked card; tint borders on hover.
pub fn game_card_system(
    mut cards: Query<(&Interaction, &GameCard, &mut BorderColor), Changed<Interaction>>,
    view: Res<DerivedView>,
    mut opens: MessageWriter<OpenGameDetail>,
) {
    for (interaction, card, mut border) in cards.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                if let Some(game) = view.games().get(card.0) {
                    opens.write(OpenGameDetail(game.clone()));
                }
            }
            Interaction::Hovered => {
                *border = BorderColor::all(card_hover_border());
            }
            Interaction::None => {
                *border = BorderColor::all(card_border());
            }
        }
    }
}
