//! Sort controls, grid/list toggle, and the match counter.

use bevy::prelude::*;

use super::common::*;
use crate::pipeline::DerivedView;
use crate::selection::{SelectedCategory, SelectedSort, SelectedViewMode, SortOption, ViewMode};

/// Tags a sort button with the ordering it selects.
#[derive(Component)]
pub struct SortButton(pub SortOption);

/// Tags a view toggle button with the mode it selects.
#[derive(Component)]
pub struct ViewModeButton(pub ViewMode);

/// Dynamic "N games · Category" counter.
#[derive(Component)]
pub struct MatchCountText;

/// Spawn the filter/sort bar.
pub fn spawn_filter_bar(parent: &mut ChildSpawnerCommands<'_>) {
    parent
        .spawn(Node {
            width: Val::Percent(100.0),
            justify_content: JustifyContent::SpaceBetween,
            align_items: AlignItems::Center,
            padding: UiRect {
                left: Val::Px(18.0),
                right: Val::Px(18.0),
                top: Val::Px(4.0),
                bottom: Val::Px(4.0),
            },
            ..default()
        })
        .with_children(|bar| {
            bar.spawn((
                Text::new("0 games"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(meta_color()),
                MatchCountText,
            ));

            // ── Sort buttons ─────────────────────────────────────────────────
            bar.spawn(Node {
                align_items: AlignItems::Center,
                ..default()
            })
            .with_children(|sorts| {
                for option in SortOption::ALL {
                    text_button(
                        sorts,
                        option.label(),
                        13.0,
                        Val::Px(104.0),
                        Val::Px(32.0),
                        nav_bg(),
                        nav_border(),
                        nav_text(),
                        SortButton(option),
                    );
                }
            });

            // ── View toggle ──────────────────────────────────────────────────
            bar.spawn(Node {
                align_items: AlignItems::Center,
                ..default()
            })
            .with_children(|toggle| {
                for mode in [ViewMode::Grid, ViewMode::List] {
                    text_button(
                        toggle,
                        mode.label(),
                        13.0,
                        Val::Px(72.0),
                        Val::Px(32.0),
                        nav_bg(),
                        nav_border(),
                        nav_text(),
                        ViewModeButton(mode),
                    );
                }
            });
        });
}

/// Handle sort button presses and hover tinting.
pub fn sort_button_system(
    mut buttons: Query<(&Interaction, &SortButton, &mut BorderColor), Changed<Interaction>>,
    mut selected: ResMut<SelectedSort>,
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

/// Repaint every sort button when the selection changes.
pub fn sort_highlight_system(
    selected: Res<SelectedSort>,
    mut buttons: Query<(&SortButton, &mut BackgroundColor, &mut BorderColor)>,
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

/// Handle view toggle presses.
pub fn view_button_system(
    mut buttons: Query<(&Interaction, &ViewModeButton, &mut BorderColor), Changed<Interaction>>,
    mut selected: ResMut<SelectedViewMode>,
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

/// Repaint the view toggle when the mode changes.
pub fn view_highlight_system(
    selected: Res<SelectedViewMode>,
    mut buttons: Query<(&ViewModeButton, &mut BackgroundColor, &mut BorderColor)>,
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

/// Keep the match counter in step with the derived view.
pub fn match_count_system(
    view: Res<DerivedView>,
    category: Res<SelectedCategory>,
    mut counter: Query<&mut Text, With<MatchCountText>>,
) {
    if !view.is_changed() && !category.is_changed() {
        return;
    }
    let Ok(mut text) = counter.single_mut() else {
        return;
    };
    let noun = if view.matching_count() == 1 {
        "game"
    } else {
        "games"
    };
    *text = Text::new(format!(
        "{} {} · {}",
        view.matching_count(),
        noun,
        category.0.label()
    ));
}
