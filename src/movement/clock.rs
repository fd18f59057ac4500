//! Movement domain: fixed-step accumulator for the physics clock.

use bevy::prelude::*;

use crate::movement::{SimulationSettings, TuningError};

/// Converts variable frame times into a whole number of fixed steps.
#[derive(Debug, Clone, PartialEq)]
pub struct DualClock {
    fixed_dt: f32,
    accumulator: f32,
    max_frame_delta: f32,
    max_steps_per_frame: u32,
}

impl DualClock {
    pub fn new(settings: &SimulationSettings) -> Result<Self, TuningError> {
        settings.validate()?;
        Ok(Self {
            fixed_dt: (1.0 / settings.fixed_hz) as f32,
            accumulator: 0.0,
            max_frame_delta: settings.max_frame_delta,
            max_steps_per_frame: settings.max_steps_per_frame,
        })
    }

    pub fn fixed_dt(&self) -> f32 {
        self.fixed_dt
    }

    /// Time banked toward the next fixed step.
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    /// Bank `frame_dt` and return how many fixed steps are now due.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return 0;
        }
        self.accumulator += frame_dt.min(self.max_frame_delta);

        let mut steps = 0;
        while self.accumulator >= self.fixed_dt && steps < self.max_steps_per_frame {
            self.accumulator -= self.fixed_dt;
            steps += 1;
        }

        if self.accumulator >= self.fixed_dt {
            debug!(
                "Dropping {:.3}s of simulation backlog after {} steps",
                self.accumulator, steps
            );
            self.accumulator %= self.fixed_dt;
        }
        steps
    }
}
