//! Movement domain: hero locomotion on a fixed physics clock, driven by a
//! per-frame input orchestrator.

mod bootstrap;
mod clock;
mod collaborators;
mod components;
#[cfg(feature = "dev-tools")]
mod dev;
mod errors;
mod hero;
mod model;
mod orchestrator;
mod resources;
mod systems;

pub use clock::DualClock;
pub use collaborators::{
    AnimationEvent, AnimationSink, ContactDetector, ContactDetectors, KinematicBody,
    NullAnimation, PhysicsBody, RecordedAnimation, SharedContact,
};
pub use components::{
    CameraFollowable, ContactFlags, ContactProbes, GameLayer, JumpPhase, MotionState, Player,
};
pub use errors::{AnimationError, Collaborator, HeroError, TuningError};
pub use hero::{Hero, HeroBuilder, HeroSimulation};
pub use model::MotionModel;
pub use orchestrator::{
    CoyoteState, InputOrchestrator, JumpAction, JumpBufferState, JumpContext, JumpDecision,
    MotionControl, decide_jump,
};
pub use resources::{
    DashSettings, FallSettings, HorizontalMovementSettings, JumpLevelSettings, MovementInput,
    MovementTuning, SimulationSettings,
};
pub use systems::motion::HeroAnimation;

use bevy::prelude::*;

use crate::movement::bootstrap::{configure_fixed_clock, spawn_hero};
use crate::movement::systems::{
    orchestrate_input, read_input, step_motion, update_orient_visual,
};

/// System ordering for the frame-clock side of movement.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MovementSet {
    Input,
    Orchestrate,
    Visual,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<SimulationSettings>()
            .init_resource::<MovementInput>()
            .add_message::<HeroAnimation>()
            .configure_sets(
                Update,
                (
                    MovementSet::Input,
                    MovementSet::Orchestrate,
                    MovementSet::Visual,
                )
                    .chain(),
            )
            .add_systems(Startup, (configure_fixed_clock, spawn_hero))
            .add_systems(Update, read_input.in_set(MovementSet::Input))
            .add_systems(Update, orchestrate_input.in_set(MovementSet::Orchestrate))
            .add_systems(Update, update_orient_visual.in_set(MovementSet::Visual))
            .add_systems(FixedUpdate, step_motion);

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room);
    }
}
