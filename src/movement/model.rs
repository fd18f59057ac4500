//! Movement domain: fixed-step motion model.
//!
//! One call to [`MotionModel::fixed_step`] runs the phases in a fixed order:
//! contact refresh, horizontal speed and orientation, jump state machine,
//! dash, velocity write, camera sync. The dash phase must come after the jump
//! phase so that it overrides jump gravity.

use bevy::prelude::*;

use crate::movement::{
    AnimationError, AnimationSink, CameraFollowable, ContactDetector, ContactDetectors,
    FallSettings, HorizontalMovementSettings, JumpLevelSettings, JumpPhase, MotionControl,
    MotionState, MovementTuning, PhysicsBody, TuningError,
};

#[derive(Component, Debug, Clone)]
pub struct MotionModel {
    tuning: MovementTuning,
    state: MotionState,
    jump_trigger_pending: bool,
    reported_running: Option<bool>,
}

impl MotionModel {
    pub fn new(tuning: MovementTuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            tuning,
            state: MotionState::default(),
            jump_trigger_pending: false,
            reported_running: None,
        })
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    /// Back to the spawn state: idle, facing right, every timer inactive.
    pub fn reset(&mut self) {
        self.state = MotionState::default();
        self.jump_trigger_pending = false;
        self.reported_running = None;
    }

    pub fn set_move_direction(&mut self, x: f32) {
        self.state.move_dir_x = if x.is_nan() { 0.0 } else { x.clamp(-1.0, 1.0) };
    }

    /// Enter jump impulsion at `level`. The caller owns the multi-jump count.
    pub fn jump_start(&mut self, level: usize) {
        let max = self.tuning.multi_jump_count_max();
        debug_assert!(level < max, "jump level {level} out of range ({max} levels)");
        self.state.multi_jump_index = level.min(max.saturating_sub(1));
        self.state.jump_phase = JumpPhase::JumpImpulsion;
        self.state.jump_timer = 0.0;
        self.jump_trigger_pending = true;
        debug!(
            "Jump start: level={}, grounded={}",
            self.state.multi_jump_index, self.state.contacts.ground
        );
    }

    pub fn stop_jump_impulsion(&mut self) {
        if self.state.jump_phase == JumpPhase::JumpImpulsion {
            self.state.jump_phase = JumpPhase::Falling;
        }
    }

    /// Start (or restart) a dash in the facing direction, using the ground or
    /// air profile depending on current contact.
    pub fn dash(&mut self) {
        let settings = *self.tuning.dash(self.state.contacts.ground);
        self.state.horizontal_speed = settings.dash_speed;
        self.state.dash_timer = settings.dash_duration;
        self.state.is_dashing = true;
        debug!(
            "Dash start: speed={}, duration={}, orient_x={}",
            settings.dash_speed, settings.dash_duration, self.state.orient_x
        );
    }

    pub fn is_touching_ground(&self) -> bool {
        self.state.contacts.ground
    }

    pub fn is_touching_left_wall(&self) -> bool {
        self.state.contacts.left_wall
    }

    pub fn is_touching_right_wall(&self) -> bool {
        self.state.contacts.right_wall
    }

    pub fn is_jumping(&self) -> bool {
        self.state.jump_phase != JumpPhase::NotJumping
    }

    pub fn is_jump_impulsing(&self) -> bool {
        self.state.jump_phase == JumpPhase::JumpImpulsion
    }

    pub fn is_jump_min_duration_reached(&self) -> bool {
        self.state.jump_timer >= self.current_jump_level().jump_min_duration
    }

    pub fn multi_jump_count_max(&self) -> usize {
        self.tuning.multi_jump_count_max()
    }

    pub fn fixed_step<G, L, R>(
        &mut self,
        dt: f32,
        detectors: &ContactDetectors<G, L, R>,
        body: &mut impl PhysicsBody,
        camera: &mut CameraFollowable,
        animation: &mut impl AnimationSink,
    ) where
        G: ContactDetector,
        L: ContactDetector,
        R: ContactDetector,
    {
        self.refresh_contacts(detectors);

        let settings = *self.tuning.horizontal(self.state.contacts.ground);
        if let Some(running) = self.update_horizontal(&settings, dt, camera) {
            if self.reported_running != Some(running) {
                self.reported_running = Some(running);
                report(animation.set_running(running));
            }
        }

        self.update_jump(dt);
        if std::mem::take(&mut self.jump_trigger_pending) {
            report(animation.trigger_jump());
        }

        self.update_dash(dt);
        self.apply_velocity(body);
        self.sync_camera(body, camera);
    }

    fn refresh_contacts<G, L, R>(&mut self, detectors: &ContactDetectors<G, L, R>)
    where
        G: ContactDetector,
        L: ContactDetector,
        R: ContactDetector,
    {
        self.state.previous_contacts = self.state.contacts;
        self.state.contacts = detectors.sample();

        let (was, is) = (self.state.previous_contacts, self.state.contacts);
        if is.ground && !was.ground {
            debug!("Touched ground: phase={:?}", self.state.jump_phase);
        } else if !is.ground && was.ground {
            debug!("Left ground: phase={:?}", self.state.jump_phase);
        }
    }

    /// Returns the running flag when the regular (non turn-back) branch ran.
    fn update_horizontal(
        &mut self,
        settings: &HorizontalMovementSettings,
        dt: f32,
        camera: &mut CameraFollowable,
    ) -> Option<bool> {
        // A dash owns the horizontal speed until it expires.
        if self.state.is_dashing {
            return None;
        }

        if self.state.move_dir_x * self.state.orient_x < 0.0 {
            self.state.horizontal_speed -= settings.turn_back_friction * dt;
            if self.state.horizontal_speed <= 0.0 {
                self.state.horizontal_speed = 0.0;
                self.change_orient_from_movement(camera);
            }
            return None;
        }

        let running = self.state.move_dir_x != 0.0;
        if running {
            self.state.horizontal_speed =
                (self.state.horizontal_speed + settings.acceleration * dt).min(settings.max_speed);
        } else {
            self.state.horizontal_speed =
                (self.state.horizontal_speed - settings.deceleration * dt).max(0.0);
        }
        self.change_orient_from_movement(camera);
        Some(running)
    }

    fn change_orient_from_movement(&mut self, camera: &mut CameraFollowable) {
        if self.state.move_dir_x == 0.0 {
            return;
        }
        self.state.orient_x = self.state.move_dir_x.signum();
        camera.orient_x = self.state.orient_x;
    }

    fn update_jump(&mut self, dt: f32) {
        match self.state.jump_phase {
            JumpPhase::JumpImpulsion => {
                self.state.jump_timer += dt;
                let level = *self.current_jump_level();
                if self.state.jump_timer < level.jump_max_duration {
                    self.state.vertical_speed = level.jump_speed;
                } else {
                    self.state.jump_phase = JumpPhase::Falling;
                }
            }
            JumpPhase::Falling => {
                if self.state.contacts.ground {
                    self.state.vertical_speed = 0.0;
                    self.state.jump_phase = JumpPhase::NotJumping;
                    debug!("Landed: multi_jump_index={}", self.state.multi_jump_index);
                } else {
                    let settings = self.tuning.jump_fall;
                    self.apply_fall_gravity(&settings, dt);
                }
            }
            JumpPhase::NotJumping => {
                if self.state.contacts.ground {
                    self.state.vertical_speed = 0.0;
                } else {
                    let settings = self.tuning.fall;
                    self.apply_fall_gravity(&settings, dt);
                }
            }
        }
    }

    fn apply_fall_gravity(&mut self, settings: &FallSettings, dt: f32) {
        if self.state.is_dashing {
            self.state.vertical_speed = 0.0;
            return;
        }
        self.state.vertical_speed = (self.state.vertical_speed - settings.fall_gravity * dt)
            .max(-settings.max_fall_speed);
    }

    fn update_dash(&mut self, dt: f32) {
        if !self.state.is_dashing {
            return;
        }
        self.state.dash_timer -= dt;
        if self.state.dash_timer <= 0.0 {
            self.state.dash_timer = 0.0;
            self.state.is_dashing = false;
            self.state.horizontal_speed = 0.0;
            debug!("Dash end");
        }
    }

    fn apply_velocity(&mut self, body: &mut impl PhysicsBody) {
        let mut velocity_x = self.state.horizontal_speed * self.state.orient_x;
        let contacts = self.state.contacts;
        if (contacts.left_wall && velocity_x < 0.0) || (contacts.right_wall && velocity_x > 0.0) {
            velocity_x = 0.0;
            self.state.horizontal_speed = 0.0;
        }

        let velocity_y = if self.state.is_dashing {
            0.0
        } else {
            self.state.vertical_speed
        };
        body.set_velocity(Vec2::new(velocity_x, velocity_y));
    }

    /// Vertical follow only on the ground so small hops don't bob the camera.
    fn sync_camera(&self, body: &impl PhysicsBody, camera: &mut CameraFollowable) {
        let position = body.position();
        camera.follow_position_x = position.x;
        if self.state.contacts.ground && !self.is_jumping() {
            camera.follow_position_y = position.y;
        }
    }

    fn current_jump_level(&self) -> &JumpLevelSettings {
        self.tuning.jump_level(self.state.multi_jump_index)
    }
}

fn report(result: Result<(), AnimationError>) {
    if let Err(err) = result {
        warn!("Animation sink error ignored: {}", err);
    }
}

impl MotionControl for MotionModel {
    fn set_move_direction(&mut self, x: f32) {
        MotionModel::set_move_direction(self, x);
    }

    fn jump_start(&mut self, level: usize) {
        MotionModel::jump_start(self, level);
    }

    fn stop_jump_impulsion(&mut self) {
        MotionModel::stop_jump_impulsion(self);
    }

    fn dash(&mut self) {
        MotionModel::dash(self);
    }

    fn is_touching_ground(&self) -> bool {
        MotionModel::is_touching_ground(self)
    }

    fn is_jumping(&self) -> bool {
        MotionModel::is_jumping(self)
    }

    fn is_jump_impulsing(&self) -> bool {
        MotionModel::is_jump_impulsing(self)
    }

    fn is_jump_min_duration_reached(&self) -> bool {
        MotionModel::is_jump_min_duration_reached(self)
    }

    fn multi_jump_count_max(&self) -> usize {
        MotionModel::multi_jump_count_max(self)
    }
}
