//! Movement domain: boundaries between the motion model and the outside world.

use std::cell::Cell;
use std::rc::Rc;

use bevy::prelude::*;

use crate::movement::{AnimationError, ContactFlags};

/// Short-range proximity query against the level geometry.
pub trait ContactDetector {
    fn detect_contact(&self) -> bool;
}

/// The single body the motion model drives.
pub trait PhysicsBody {
    fn position(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
}

/// Typed animation surface. Errors are reported, never acted on.
pub trait AnimationSink {
    fn set_running(&mut self, running: bool) -> Result<(), AnimationError>;
    fn trigger_jump(&mut self) -> Result<(), AnimationError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEvent {
    Running(bool),
    Jump,
}

/// The ground, left wall and right wall detectors of one hero.
#[derive(Debug, Clone)]
pub struct ContactDetectors<G, L, R> {
    pub ground: G,
    pub left_wall: L,
    pub right_wall: R,
}

impl<G, L, R> ContactDetectors<G, L, R>
where
    G: ContactDetector,
    L: ContactDetector,
    R: ContactDetector,
{
    pub fn sample(&self) -> ContactFlags {
        ContactFlags {
            ground: self.ground.detect_contact(),
            left_wall: self.left_wall.detect_contact(),
            right_wall: self.right_wall.detect_contact(),
        }
    }
}

/// Contact flag shared between a detector and whoever scripts it.
#[derive(Debug, Clone, Default)]
pub struct SharedContact(Rc<Cell<bool>>);

impl SharedContact {
    pub fn new(touching: bool) -> Self {
        Self(Rc::new(Cell::new(touching)))
    }

    pub fn set(&self, touching: bool) {
        self.0.set(touching);
    }
}

impl ContactDetector for SharedContact {
    fn detect_contact(&self) -> bool {
        self.0.get()
    }
}

/// Minimal body for headless runs: it stores the last velocity and moves
/// only when `integrate` is called.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KinematicBody {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl KinematicBody {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
        }
    }

    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }
}

impl PhysicsBody for KinematicBody {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullAnimation;

impl AnimationSink for NullAnimation {
    fn set_running(&mut self, _running: bool) -> Result<(), AnimationError> {
        Ok(())
    }

    fn trigger_jump(&mut self) -> Result<(), AnimationError> {
        Ok(())
    }
}

/// Keeps every event it receives, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordedAnimation {
    pub events: Vec<AnimationEvent>,
}

impl AnimationSink for RecordedAnimation {
    fn set_running(&mut self, running: bool) -> Result<(), AnimationError> {
        self.events.push(AnimationEvent::Running(running));
        Ok(())
    }

    fn trigger_jump(&mut self) -> Result<(), AnimationError> {
        self.events.push(AnimationEvent::Jump);
        Ok(())
    }
}
