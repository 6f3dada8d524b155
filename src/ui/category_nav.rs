//! Category filter row, one button per [`GameCategory::FILTERS`] entry.

use bevy::prelude::*;

use super::common::*;
use crate::catalog::GameCategory;
use crate::selection::SelectedCategory;

/// Tags a category filter button with the category it selects.
#[derive(Component)]
pub struct CategoryButton(pub GameCategory);

/// Spawn the category nav row.
pub fn spawn_category_nav(parent: &mut ChildSpawnerCommands<'_>) {
    parent
        .spawn(Node {
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: UiRect {
                left: Val::Px(14.0),
                right: Val::Px(14.0),
                ..default()
            },
            ..default()
        })
        .with_children(|row| {
            for category in GameCategory::FILTERS {
                text_button(
                    row,
                    category.label(),
                    14.0,
                    Val::Px(128.0),
                    Val::Px(36.0),
                    nav_bg(),
                    nav_border(),
                    nav_text(),
                    CategoryButton(category),
                );
            }
        });
}

/// Handle category button presses and hover tinting.
pub fn category_button_system(
    mut buttons: Query<
        (&Interaction, &CategoryButton, &mut BorderColor),
        Changed<Interaction>,
    >,
    mut selected: ResMut<SelectedCategory>,
) {
    for (interaction, button, mut border) in buttons.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                if selected.0 != button.0 {
                    selected.0 = button.0;
                }
            }
            Interaction::Hovered => {
                *border = BorderColor::all(nav_hover_border());
            }
            Interaction::None => {
                *border = BorderColor::all(if selected.0 == button.0 {
                    nav_active_border()
                } else {
                    nav_border()
                });
            }
        }
    }
}

/// Repaint every category button when the selection changes.
pub fn category_highlight_system(
    selected: Res<SelectedCategory>,
    mut buttons: Query<(&CategoryButton, &mut BackgroundColor, &mut BorderColor)>,
) {
    if !selected.is_changed() {
        return;
    }
    for (button, mut bg, mut border) in buttons.iter_mut() {
        let active = selected.0 == button.0;
        *bg = BackgroundColor(if active { nav_active_bg() } else { nav_bg() });
        *border = BorderColor::all(if active {
            nav_active_border()
        } else {
            nav_border()
        });
    }
}
