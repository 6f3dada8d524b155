use bevy::prelude::*;

use super::common::*;

/// Root node of the loading screen; despawned on `OnExit(Loading)`.
#[derive(Component)]
pub struct LoadingRoot;

/// Spawn the full-screen loading indicator.
///
/// Shown while the simulated catalog fetch runs; consumers must never render
/// an empty shelf during this window.
pub fn setup_loading_screen(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::BLACK),
            LoadingRoot,
        ))
        .with_children(|root| {
            root.spawn((
                Text::new("GAMESHELF"),
                TextFont {
                    font_size: 56.0,
                    ..default()
                },
                TextColor(title_color()),
            ));

            spacer(root, 12.0);

            root.spawn((
                Text::new("Stocking the shelf..."),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(subtitle_color()),
            ));
        });
}

/// Recursively despawn the loading screen.
pub fn cleanup_loading_screen(mut commands: Commands, query: Query<Entity, With<LoadingRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
