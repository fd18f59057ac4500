use avian2d::prelude::*;
use bevy::prelude::*;

use hero_motion::{content, movement, scene};

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Hero Motion".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        scene::ScenePlugin,
        content::ContentPlugin,
        movement::MovementPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(hero_motion::debug::DebugPlugin);

    app.run();
}
