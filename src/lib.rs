//! Hero motion for a 2D platformer: a fixed-step motion model (horizontal
//! acceleration and turn-back, multi-level jumps, dash, wall blocking) driven
//! by a per-frame input orchestrator (jump buffer, coyote time, multi-jump
//! arbitration), with a Bevy + avian2d integration.

pub mod content;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod movement;
pub mod scene;
