mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod movement;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Ladder Yard".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        movement::MovementPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
