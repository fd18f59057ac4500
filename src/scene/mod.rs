//! Scene domain: camera consuming the hero's follow target.

use bevy::prelude::*;

use crate::movement::{CameraFollowable, MovementSet, Player};

#[derive(Component, Debug)]
pub struct MainCamera;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, follow_hero.after(MovementSet::Orchestrate));
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((MainCamera, Camera2d));
}

/// Snap to the published follow target. Damping and bounds belong to a
/// dedicated camera system.
fn follow_hero(
    hero: Query<&CameraFollowable, With<Player>>,
    mut camera: Query<&mut Transform, With<MainCamera>>,
) {
    let (Ok(target), Ok(mut transform)) = (hero.single(), camera.single_mut()) else {
        return;
    };
    transform.translation.x = target.follow_position_x;
    transform.translation.y = target.follow_position_y;
}
