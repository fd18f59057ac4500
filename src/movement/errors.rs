//! Movement domain: error types.

use std::fmt;

use thiserror::Error;

/// A tuning value the motion model cannot run with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    #[error("{group}.{field} must be finite and non-negative (got {value})")]
    InvalidValue {
        group: &'static str,
        field: &'static str,
        value: f32,
    },
    #[error("at least one jump level is required")]
    NoJumpLevels,
    #[error("jump level {index}: min duration {min} exceeds max duration {max}")]
    JumpDurationOrder { index: usize, min: f32, max: f32 },
    #[error("fixed rate must be a positive number of ticks per second (got {0})")]
    FixedRate(f64),
    #[error("max_steps_per_frame must allow at least one fixed step")]
    NoCatchUpSteps,
}

/// Collaborators a hero cannot run without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    GroundDetector,
    LeftWallDetector,
    RightWallDetector,
    PhysicsBody,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Collaborator::GroundDetector => "ground detector",
            Collaborator::LeftWallDetector => "left wall detector",
            Collaborator::RightWallDetector => "right wall detector",
            Collaborator::PhysicsBody => "physics body",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HeroError {
    #[error("hero is missing its {0}")]
    MissingCollaborator(Collaborator),
    #[error(transparent)]
    Tuning(#[from] TuningError),
}

/// Raised by an animation sink. Never affects the simulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimationError {
    #[error("animation target is unavailable")]
    Unavailable,
    #[error("animation parameter `{0}` was rejected")]
    Rejected(&'static str),
}
