//! Movement domain: hero bootstrap from the loaded tuning.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    CameraFollowable, ContactProbes, GameLayer, InputOrchestrator, MotionModel, MovementTuning,
    Player, SimulationSettings,
};

const HERO_SIZE: Vec2 = Vec2::new(24.0, 48.0);
const HERO_SPAWN: Vec2 = Vec2::new(0.0, 100.0);
const PROBE_LENGTH: f32 = 4.0;

/// Match the engine's fixed clock to the configured simulation rate.
pub(crate) fn configure_fixed_clock(
    settings: Res<SimulationSettings>,
    mut fixed_time: ResMut<Time<Fixed>>,
    mut virtual_time: ResMut<Time<Virtual>>,
) {
    if let Err(err) = settings.validate() {
        error!("Invalid simulation settings, keeping engine defaults: {}", err);
        return;
    }
    fixed_time.set_timestep_hz(settings.fixed_hz);
    virtual_time.set_max_delta(Duration::from_secs_f32(settings.max_frame_delta));
    info!(
        "Fixed clock: {} Hz, max frame delta {}s",
        settings.fixed_hz, settings.max_frame_delta
    );
}

/// Spawn the hero. Invalid tuning is fatal: the app exits instead of running
/// a hero with undefined motion.
pub(crate) fn spawn_hero(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    existing_player: Query<Entity, With<Player>>,
    mut exit: MessageWriter<AppExit>,
) {
    if !existing_player.is_empty() {
        info!("Hero already exists, skipping spawn");
        return;
    }

    let model = match MotionModel::new(tuning.clone()) {
        Ok(model) => model,
        Err(err) => {
            error!("Cannot spawn hero: {}", err);
            exit.write(AppExit::error());
            return;
        }
    };

    info!(
        "Spawning hero: jump levels={}, ground max speed={}, air max speed={}",
        tuning.multi_jump_count_max(),
        tuning.ground.max_speed,
        tuning.air.max_speed
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            model,
            InputOrchestrator::new(&tuning),
            ContactProbes::for_box(HERO_SIZE / 2.0, PROBE_LENGTH),
            CameraFollowable::at(HERO_SPAWN),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(HERO_SIZE),
            ..default()
        },
        Transform::from_translation(HERO_SPAWN.extend(0.0)),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(HERO_SIZE.x, HERO_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // The motion model owns gravity
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}
