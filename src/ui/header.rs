//! Top bar: wordmark, search box, and the suggester entry point.
//!
//! The search box is keyboard-driven: printable keys append to
//! [`SearchQuery`], Backspace deletes. Keystrokes are ignored while either
//! overlay is open so typing in a dialog never filters the shelf underneath.

use bevy::prelude::*;

use super::common::*;
use crate::config::ShelfConfig;
use crate::dialog::{OpenSuggester, SelectedGame, SuggesterDialog};
use crate::selection::SearchQuery;

/// Dynamic text inside the search box.
#[derive(Component)]
pub struct SearchValueText;

/// Tags the "SUGGEST A GAME" button.
#[derive(Component)]
pub struct SuggestButton;

/// Printable keys the search box accepts.
const KEY_CHARS: &[(KeyCode, char)] = &[
    (KeyCode::KeyA, 'a'),
    (KeyCode::KeyB, 'b'),
    (KeyCode::KeyC, 'c'),
    (KeyCode::KeyD, 'd'),
    (KeyCode::KeyE, 'e'),
    (KeyCode::KeyF, 'f'),
    (KeyCode::KeyG, 'g'),
    (KeyCode::KeyH, 'h'),
    (KeyCode::KeyI, 'i'),
    (KeyCode::KeyJ, 'j'),
    (KeyCode::KeyK, 'k'),
    (KeyCode::KeyL, 'l'),
    (KeyCode::KeyM, 'm'),
    (KeyCode::KeyN, 'n'),
    (KeyCode::KeyO, 'o'),
    (KeyCode::KeyP, 'p'),
    (KeyCode::KeyQ, 'q'),
    (KeyCode::KeyR, 'r'),
    (KeyCode::KeyS, 's'),
    (KeyCode::KeyT, 't'),
    (KeyCode::KeyU, 'u'),
    (KeyCode::KeyV, 'v'),
    (KeyCode::KeyW, 'w'),
    (KeyCode::KeyX, 'x'),
    (KeyCode::KeyY, 'y'),
    (KeyCode::KeyZ, 'z'),
    (KeyCode::Digit0, '0'),
    (KeyCode::Digit1, '1'),
    (KeyCode::Digit2, '2'),
    (KeyCode::Digit3, '3'),
    (KeyCode::Digit4, '4'),
    (KeyCode::Digit5, '5'),
    (KeyCode::Digit6, '6'),
    (KeyCode::Digit7, '7'),
    (KeyCode::Digit8, '8'),
    (KeyCode::Digit9, '9'),
    (KeyCode::Space, ' '),
    (KeyCode::Minus, '-'),
];

/// Spawn the header row.
pub fn spawn_header(parent: &mut ChildSpawnerCommands<'_>) {
    parent
        .spawn(Node {
            width: Val::Percent(100.0),
            justify_content: JustifyContent::SpaceBetween,
            align_items: AlignItems::Center,
            padding: UiRect::all(Val::Px(14.0)),
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                Text::new("GAMESHELF"),
                TextFont {
                    font_size: 30.0,
                    ..default()
                },
                TextColor(title_color()),
            ));

            // ── Search box ───────────────────────────────────────────────────
            row.spawn((
                Node {
                    width: Val::Px(340.0),
                    height: Val::Px(40.0),
                    align_items: AlignItems::Center,
                    padding: UiRect {
                        left: Val::Px(12.0),
                        right: Val::Px(12.0),
                        ..default()
                    },
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BackgroundColor(search_bg()),
                BorderColor::all(search_border()),
            ))
            .with_children(|field| {
                field.spawn((
                    Text::new("type to search"),
                    TextFont {
                        font_size: 15.0,
                        ..default()
                    },
                    TextColor(search_placeholder_color()),
                    SearchValueText,
                ));
            });

            text_button(
                row,
                "SUGGEST A GAME",
                15.0,
                Val::Px(190.0),
                Val::Px(40.0),
                play_bg(),
                play_border(),
                play_text(),
                SuggestButton,
            );
        });
}

/// Append/delete search characters from the keyboard.
pub fn search_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    selected: Res<SelectedGame>,
    suggester: Res<SuggesterDialog>,
    config: Res<ShelfConfig>,
    mut query: ResMut<SearchQuery>,
) {
    // Keystrokes belong to the overlay while one is open.
    if selected.0.is_some() || suggester.open {
        return;
    }

    let mut buffer = query.0.clone();
    if keys.just_pressed(KeyCode::Backspace) {
        buffer.pop();
    }
    for (key, ch) in KEY_CHARS {
        if keys.just_pressed(*key) {
            buffer.push(*ch);
        }
    }
    buffer.truncate(config.search_max_len);

    if buffer != query.0 {
        query.0 = buffer;
    }
}

/// Mirror [`SearchQuery`] into the search box, with a dim placeholder when
/// empty.
pub fn search_display_system(
    query: Res<SearchQuery>,
    mut value: Query<(&mut Text, &mut TextColor), With<SearchValueText>>,
) {
    if !query.is_changed() {
        return;
    }
    let Ok((mut text, mut color)) = value.single_mut() else {
        return;
    };

    if query.0.is_empty() {
        *text = Text::new("type to search");
        *color = TextColor(search_placeholder_color());
    } else {
        *text = Text::new(query.0.clone());
        *color = TextColor(search_text_color());
    }
}

/// Handle the "SUGGEST A GAME" button.
pub fn suggest_button_system(
    buttons: Query<(&Interaction, &Children), (Changed<Interaction>, With<SuggestButton>)>,
    mut btn_text: Query<&mut TextColor>,
    mut opens: MessageWriter<OpenSuggester>,
) {
    for (interaction, children) in buttons.iter() {
        match interaction {
            Interaction::Pressed => {
                opens.write(OpenSuggester);
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
}
