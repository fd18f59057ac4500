//! Movement domain: motion model and input orchestrator systems.

use avian2d::prelude::*;
use bevy::ecs::message::{Message, MessageWriter};
use bevy::prelude::*;

use super::collisions::{ProbeFilters, ray_detectors};
use crate::movement::{
    AnimationError, AnimationEvent, AnimationSink, CameraFollowable, ContactProbes,
    InputOrchestrator, MotionModel, MovementInput, PhysicsBody, Player,
};

/// Animation event emitted by a hero's motion model, for whatever drives the
/// hero's animator. The dev-tools overlay also reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroAnimation {
    pub entity: Entity,
    pub event: AnimationEvent,
}

impl Message for HeroAnimation {}

struct AvianBody<'a> {
    position: Vec2,
    velocity: &'a mut LinearVelocity,
}

impl PhysicsBody for AvianBody<'_> {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }
}

struct MessageAnimationSink<'a, 'w> {
    entity: Entity,
    writer: &'a mut MessageWriter<'w, HeroAnimation>,
}

impl AnimationSink for MessageAnimationSink<'_, '_> {
    fn set_running(&mut self, running: bool) -> Result<(), AnimationError> {
        self.writer.write(HeroAnimation {
            entity: self.entity,
            event: AnimationEvent::Running(running),
        });
        Ok(())
    }

    fn trigger_jump(&mut self) -> Result<(), AnimationError> {
        self.writer.write(HeroAnimation {
            entity: self.entity,
            event: AnimationEvent::Jump,
        });
        Ok(())
    }
}

/// Fixed clock: one motion model step per hero.
pub(crate) fn step_motion(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    mut animations: MessageWriter<HeroAnimation>,
    mut query: Query<
        (
            Entity,
            &mut MotionModel,
            &ContactProbes,
            &Position,
            &mut LinearVelocity,
            &mut CameraFollowable,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let filters = ProbeFilters::new();

    for (entity, mut model, probes, position, mut velocity, mut camera) in &mut query {
        let detectors = ray_detectors(&spatial_query, &filters, probes, position.0);
        let mut body = AvianBody {
            position: position.0,
            velocity: &mut *velocity,
        };
        let mut sink = MessageAnimationSink {
            entity,
            writer: &mut animations,
        };
        model.fixed_step(dt, &detectors, &mut body, &mut *camera, &mut sink);
    }
}

/// Variable clock: timers and jump arbitration, once per rendered frame.
pub(crate) fn orchestrate_input(
    time: Res<Time>,
    input: Res<MovementInput>,
    mut query: Query<(&mut InputOrchestrator, &mut MotionModel), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut orchestrator, mut model) in &mut query {
        orchestrator.frame(dt, &input, &mut *model);
    }
}

/// Mirror the sprite to the facing direction while there is move input.
pub(crate) fn update_orient_visual(
    mut query: Query<(&MotionModel, &mut Sprite), With<Player>>,
) {
    for (model, mut sprite) in &mut query {
        let state = model.state();
        if state.move_dir_x == 0.0 {
            continue;
        }
        sprite.flip_x = state.orient_x < 0.0;
    }
}
