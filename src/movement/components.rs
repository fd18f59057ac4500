//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpPhase {
    #[default]
    NotJumping,
    JumpImpulsion,
    Falling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactFlags {
    pub ground: bool,
    pub left_wall: bool,
    pub right_wall: bool,
}

/// Per-hero motion state, mutated once per fixed step by the motion model.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionState {
    /// Unsigned; direction comes from `orient_x`.
    pub horizontal_speed: f32,
    /// +1 facing right, -1 facing left.
    pub orient_x: f32,
    pub move_dir_x: f32,
    pub vertical_speed: f32,
    pub jump_phase: JumpPhase,
    pub jump_timer: f32,
    pub multi_jump_index: usize,
    pub is_dashing: bool,
    pub dash_timer: f32,
    pub contacts: ContactFlags,
    pub previous_contacts: ContactFlags,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            horizontal_speed: 0.0,
            orient_x: 1.0,
            move_dir_x: 0.0,
            vertical_speed: 0.0,
            jump_phase: JumpPhase::NotJumping,
            jump_timer: 0.0,
            multi_jump_index: 0,
            is_dashing: false,
            dash_timer: 0.0,
            contacts: ContactFlags::default(),
            previous_contacts: ContactFlags::default(),
        }
    }
}

/// Follow target published for the camera.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CameraFollowable {
    pub follow_position_x: f32,
    pub follow_position_y: f32,
    pub orient_x: f32,
}

impl CameraFollowable {
    pub fn at(position: Vec2) -> Self {
        Self {
            follow_position_x: position.x,
            follow_position_y: position.y,
            orient_x: 1.0,
        }
    }
}

impl Default for CameraFollowable {
    fn default() -> Self {
        Self::at(Vec2::ZERO)
    }
}

/// Ray origins (relative to the body center) for the three contact probes.
#[derive(Component, Debug, Clone)]
pub struct ContactProbes {
    pub ground: Vec<Vec2>,
    pub left_wall: Vec<Vec2>,
    pub right_wall: Vec<Vec2>,
    pub detection_length: f32,
}

impl ContactProbes {
    /// Three rays per side of an axis-aligned box, inset slightly so a wall
    /// probe never grazes the floor and vice versa.
    pub fn for_box(half_extents: Vec2, detection_length: f32) -> Self {
        let inset_x = (half_extents.x - 2.0).max(0.0);
        let inset_y = (half_extents.y - 2.0).max(0.0);
        Self {
            ground: vec![
                Vec2::new(-inset_x, -half_extents.y),
                Vec2::new(0.0, -half_extents.y),
                Vec2::new(inset_x, -half_extents.y),
            ],
            left_wall: vec![
                Vec2::new(-half_extents.x, -inset_y),
                Vec2::new(-half_extents.x, 0.0),
                Vec2::new(-half_extents.x, inset_y),
            ],
            right_wall: vec![
                Vec2::new(half_extents.x, -inset_y),
                Vec2::new(half_extents.x, 0.0),
                Vec2::new(half_extents.x, inset_y),
            ],
            detection_length,
        }
    }
}
