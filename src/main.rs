use bevy::prelude::*;
use bevy::window::WindowResolution;

use gameshelf::catalog::{self, CatalogPlugin};
use gameshelf::config::{self, ShelfConfig};
use gameshelf::constants::{WINDOW_HEIGHT, WINDOW_WIDTH};
use gameshelf::dialog::DialogPlugin;
use gameshelf::pipeline::BrowsePlugin;
use gameshelf::selection;
use gameshelf::suggester::SuggesterPlugin;
use gameshelf::ui::ShelfUiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Gameshelf".into(),
                resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.03, 0.03, 0.06)))
        .init_resource::<ShelfConfig>()
        .add_plugins((
            CatalogPlugin,
            BrowsePlugin,
            DialogPlugin,
            SuggesterPlugin,
            ShelfUiPlugin,
        ))
        .add_systems(
            Startup,
            (
                // Load config first so the other startup systems see the
                // final values.
                config::load_shelf_config,
                catalog::configure_load_timer.after(config::load_shelf_config),
                selection::apply_configured_sort.after(config::load_shelf_config),
            ),
        )
        .run();
}
