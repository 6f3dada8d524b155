use bevy::prelude::*;

// ── Palette ───────────────────────────────────────────────────────────────────

pub(super) fn title_color() -> Color {
    Color::srgb(0.70, 0.55, 1.0)
}
pub(super) fn subtitle_color() -> Color {
    Color::srgb(0.55, 0.55, 0.65)
}
pub(super) fn meta_color() -> Color {
    Color::srgb(0.45, 0.50, 0.65)
}
pub(super) fn rating_color() -> Color {
    Color::srgb(0.95, 0.88, 0.45)
}

pub(super) fn nav_bg() -> Color {
    Color::srgb(0.09, 0.09, 0.16)
}
pub(super) fn nav_border() -> Color {
    Color::srgb(0.24, 0.24, 0.38)
}
pub(super) fn nav_hover_border() -> Color {
    Color::srgb(0.50, 0.50, 0.75)
}
pub(super) fn nav_active_bg() -> Color {
    Color::srgb(0.22, 0.15, 0.42)
}
pub(super) fn nav_active_border() -> Color {
    Color::srgb(0.70, 0.55, 1.0)
}
pub(super) fn nav_text() -> Color {
    Color::srgb(0.85, 0.85, 0.95)
}

pub(super) fn card_bg() -> Color {
    Color::srgb(0.07, 0.08, 0.14)
}
pub(super) fn card_border() -> Color {
    Color::srgb(0.16, 0.18, 0.30)
}
pub(super) fn card_hover_border() -> Color {
    Color::srgb(0.45, 0.55, 0.95)
}
pub(super) fn card_title_color() -> Color {
    Color::srgb(0.92, 0.92, 1.0)
}

pub(super) fn search_bg() -> Color {
    Color::srgb(0.10, 0.10, 0.16)
}
pub(super) fn search_border() -> Color {
    Color::srgb(0.30, 0.30, 0.46)
}
pub(super) fn search_text_color() -> Color {
    Color::srgb(0.90, 0.90, 1.0)
}
pub(super) fn search_placeholder_color() -> Color {
    Color::srgb(0.38, 0.38, 0.50)
}

pub(super) fn play_bg() -> Color {
    Color::srgb(0.08, 0.36, 0.14)
}
pub(super) fn play_border() -> Color {
    Color::srgb(0.18, 0.72, 0.28)
}
pub(super) fn play_text() -> Color {
    Color::srgb(0.75, 1.0, 0.80)
}

pub(super) fn dismiss_bg() -> Color {
    Color::srgb(0.12, 0.12, 0.18)
}
pub(super) fn dismiss_border() -> Color {
    Color::srgb(0.30, 0.30, 0.46)
}
pub(super) fn dismiss_text() -> Color {
    Color::srgb(0.55, 0.55, 0.70)
}

pub(super) fn overlay_dim() -> Color {
    Color::srgba(0.0, 0.0, 0.0, 0.78)
}
pub(super) fn panel_bg() -> Color {
    Color::srgb(0.09, 0.10, 0.16)
}

// ── Spawn helpers ─────────────────────────────────────────────────────────────

/// Spawn a fixed-height invisible spacer node.
pub(super) fn spacer(parent: &mut ChildSpawnerCommands<'_>, px: f32) {
    parent.spawn(Node {
        height: Val::Px(px),
        ..default()
    });
}

/// Spawn a bordered, centred text button carrying `marker`.
#[allow(clippy::too_many_arguments)]
pub(super) fn text_button(
    parent: &mut ChildSpawnerCommands<'_>,
    label: &str,
    font_size: f32,
    width: Val,
    height: Val,
    bg: Color,
    border: Color,
    text_color: Color,
    marker: impl Bundle,
) {
    parent
        .spawn((
            Button,
            Node {
                width,
                height,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(2.0)),
                margin: UiRect::all(Val::Px(4.0)),
                ..default()
            },
            BackgroundColor(bg),
            BorderColor::all(border),
            marker,
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new(label),
                TextFont {
                    font_size,
                    ..default()
                },
                TextColor(text_color),
            ));
        });
}
