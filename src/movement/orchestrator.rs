//! Movement domain: per-frame input orchestration (jump buffer, coyote time,
//! multi-jump arbitration).

use bevy::prelude::*;

use crate::movement::{MovementInput, MovementTuning};

/// The operations the orchestrator may use to drive a motion model.
pub trait MotionControl {
    fn set_move_direction(&mut self, x: f32);
    fn jump_start(&mut self, level: usize);
    fn stop_jump_impulsion(&mut self);
    fn dash(&mut self);
    fn is_touching_ground(&self) -> bool;
    fn is_jumping(&self) -> bool;
    fn is_jump_impulsing(&self) -> bool;
    fn is_jump_min_duration_reached(&self) -> bool;
    fn multi_jump_count_max(&self) -> usize;
}

/// Early-press window. Active while `timer < duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpBufferState {
    pub timer: f32,
    pub duration: f32,
}

impl JumpBufferState {
    /// Starts inactive.
    pub fn new(duration: f32) -> Self {
        Self {
            timer: duration,
            duration,
        }
    }

    pub fn is_active(&self) -> bool {
        self.timer < self.duration
    }

    pub fn update(&mut self, dt: f32) {
        if self.is_active() {
            self.timer += dt;
        }
    }

    /// Open a fresh window.
    pub fn restart(&mut self) {
        self.timer = 0.0;
    }

    pub fn cancel(&mut self) {
        self.timer = self.duration;
    }
}

/// Grace window after leaving the ground. Active while `countdown > 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoyoteState {
    pub countdown: f32,
    pub duration: f32,
}

impl CoyoteState {
    /// Starts inactive.
    pub fn new(duration: f32) -> Self {
        Self {
            countdown: 0.0,
            duration,
        }
    }

    pub fn is_active(&self) -> bool {
        self.countdown > 0.0
    }

    pub fn update(&mut self, dt: f32, is_grounded: bool, was_grounded: bool) {
        if was_grounded && !is_grounded {
            self.countdown = self.duration;
        } else if self.is_active() {
            self.countdown -= dt;
        }
    }

    pub fn cancel(&mut self) {
        self.countdown = 0.0;
    }
}

/// Everything the jump arbitration looks at for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JumpContext {
    pub down_edge: bool,
    pub held: bool,
    pub is_grounded: bool,
    pub coyote_active: bool,
    pub buffer_active: bool,
    pub is_jumping: bool,
    pub is_impulsing: bool,
    pub min_duration_reached: bool,
    pub multi_jump_index: usize,
    pub max_jumps: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpAction {
    None,
    /// Ground or coyote jump at level 0.
    Primary,
    /// Air jump at the given level.
    MultiJump(usize),
    /// Level 0 jump fired by a press remembered in the buffer.
    Buffered,
    /// Press could not be used now; reopen the buffer window.
    RestartBuffer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpDecision {
    pub action: JumpAction,
    pub stop_impulsion: bool,
}

pub fn decide_jump(ctx: &JumpContext) -> JumpDecision {
    let action = if ctx.down_edge {
        if ctx.is_grounded || ctx.coyote_active {
            JumpAction::Primary
        } else if !ctx.is_impulsing && ctx.multi_jump_index + 1 < ctx.max_jumps {
            JumpAction::MultiJump(ctx.multi_jump_index + 1)
        } else {
            JumpAction::RestartBuffer
        }
    } else if ctx.buffer_active && ctx.is_grounded && !ctx.is_jumping {
        JumpAction::Buffered
    } else {
        JumpAction::None
    };

    let started = matches!(
        action,
        JumpAction::Primary | JumpAction::MultiJump(_) | JumpAction::Buffered
    );
    JumpDecision {
        action,
        stop_impulsion: !started && ctx.is_impulsing && !ctx.held && ctx.min_duration_reached,
    }
}

#[derive(Component, Debug, Clone)]
pub struct InputOrchestrator {
    jump_buffer: JumpBufferState,
    coyote: CoyoteState,
    multi_jump_index: usize,
    was_grounded: bool,
}

impl InputOrchestrator {
    pub fn new(tuning: &MovementTuning) -> Self {
        Self {
            jump_buffer: JumpBufferState::new(tuning.jump_buffer_duration),
            coyote: CoyoteState::new(tuning.coyote_duration),
            multi_jump_index: 0,
            was_grounded: false,
        }
    }

    pub fn jump_buffer(&self) -> &JumpBufferState {
        &self.jump_buffer
    }

    pub fn coyote(&self) -> &CoyoteState {
        &self.coyote
    }

    pub fn multi_jump_index(&self) -> usize {
        self.multi_jump_index
    }

    /// Drop every pending timer, as on respawn.
    pub fn reset(&mut self) {
        self.jump_buffer.cancel();
        self.coyote.cancel();
        self.multi_jump_index = 0;
        self.was_grounded = false;
    }

    pub fn update_jump_buffer(&mut self, dt: f32) {
        self.jump_buffer.update(dt);
    }

    pub fn update_coyote(&mut self, dt: f32, is_grounded: bool, was_grounded: bool) {
        self.coyote.update(dt, is_grounded, was_grounded);
    }

    /// Run one rendered frame.
    pub fn frame(&mut self, dt: f32, input: &MovementInput, motion: &mut impl MotionControl) {
        self.update_jump_buffer(dt);
        motion.set_move_direction(input.move_x);

        let grounded = motion.is_touching_ground();
        self.update_coyote(dt, grounded, self.was_grounded);

        if input.dash_just_pressed {
            motion.dash();
        }

        let max_jumps = motion.multi_jump_count_max();
        let ctx = JumpContext {
            down_edge: input.jump_just_pressed,
            held: input.jump_held,
            is_grounded: grounded,
            coyote_active: self.coyote.is_active(),
            buffer_active: self.jump_buffer.is_active(),
            is_jumping: motion.is_jumping(),
            is_impulsing: motion.is_jump_impulsing(),
            min_duration_reached: motion.is_jump_min_duration_reached(),
            multi_jump_index: self.multi_jump_index.min(max_jumps.saturating_sub(1)),
            max_jumps,
        };

        let decision = decide_jump(&ctx);
        match decision.action {
            JumpAction::Primary => {
                if !grounded {
                    debug!("Coyote jump: countdown={:.3}", self.coyote.countdown);
                }
                motion.jump_start(0);
            }
            JumpAction::MultiJump(level) => {
                self.multi_jump_index = level;
                motion.jump_start(level);
            }
            JumpAction::Buffered => {
                debug!("Buffered jump: timer={:.3}", self.jump_buffer.timer);
                self.jump_buffer.cancel();
                motion.jump_start(0);
            }
            JumpAction::RestartBuffer => {
                debug!(
                    "Jump press not consumed: multi_jump_index={}, impulsing={}",
                    self.multi_jump_index, ctx.is_impulsing
                );
                self.jump_buffer.restart();
            }
            JumpAction::None => {}
        }

        // Uses last frame's flag: the reset lands one frame after touchdown.
        if self.was_grounded {
            self.multi_jump_index = 0;
        }

        if decision.stop_impulsion {
            motion.stop_jump_impulsion();
        }

        self.was_grounded = grounded;
    }
}
