//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::TuningError;

/// Acceleration profile for one horizontal context (ground or air).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HorizontalMovementSettings {
    pub acceleration: f32,
    pub deceleration: f32,
    pub turn_back_friction: f32,
    pub max_speed: f32,
}

impl Default for HorizontalMovementSettings {
    fn default() -> Self {
        Self {
            acceleration: 1200.0,
            deceleration: 900.0,
            turn_back_friction: 1500.0,
            max_speed: 320.0,
        }
    }
}

/// One entry of the jump ladder. Index 0 is the ground jump, the rest are air jumps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpLevelSettings {
    pub jump_speed: f32,
    pub jump_min_duration: f32,
    pub jump_max_duration: f32,
}

impl Default for JumpLevelSettings {
    fn default() -> Self {
        Self {
            jump_speed: 620.0,
            jump_min_duration: 0.08,
            jump_max_duration: 0.22,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallSettings {
    pub fall_gravity: f32,
    pub max_fall_speed: f32,
}

impl Default for FallSettings {
    fn default() -> Self {
        Self {
            fall_gravity: 1800.0,
            max_fall_speed: 900.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashSettings {
    pub dash_speed: f32,
    pub dash_duration: f32,
}

impl Default for DashSettings {
    fn default() -> Self {
        Self {
            dash_speed: 900.0,
            dash_duration: 0.16,
        }
    }
}

/// Every tunable of the hero motion model.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub ground: HorizontalMovementSettings,
    pub air: HorizontalMovementSettings,
    pub ground_dash: DashSettings,
    pub air_dash: DashSettings,
    /// Gravity while falling without having jumped (walked off a ledge).
    pub fall: FallSettings,
    /// Gravity once a jump impulsion is over.
    pub jump_fall: FallSettings,
    pub jump_levels: Vec<JumpLevelSettings>,
    pub jump_buffer_duration: f32,
    pub coyote_duration: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            ground: HorizontalMovementSettings::default(),
            air: HorizontalMovementSettings {
                acceleration: 900.0,
                deceleration: 500.0,
                turn_back_friction: 1100.0,
                max_speed: 300.0,
            },
            ground_dash: DashSettings::default(),
            air_dash: DashSettings {
                dash_speed: 800.0,
                dash_duration: 0.14,
            },
            fall: FallSettings::default(),
            jump_fall: FallSettings {
                fall_gravity: 2400.0,
                max_fall_speed: 900.0,
            },
            jump_levels: vec![
                JumpLevelSettings::default(),
                JumpLevelSettings {
                    jump_speed: 520.0,
                    jump_min_duration: 0.06,
                    jump_max_duration: 0.16,
                },
            ],
            jump_buffer_duration: 0.2,
            coyote_duration: 0.2,
        }
    }
}

impl MovementTuning {
    /// Number of jumps available before landing, ground jump included.
    pub fn multi_jump_count_max(&self) -> usize {
        self.jump_levels.len()
    }

    pub fn horizontal(&self, grounded: bool) -> &HorizontalMovementSettings {
        if grounded { &self.ground } else { &self.air }
    }

    pub fn dash(&self, grounded: bool) -> &DashSettings {
        if grounded {
            &self.ground_dash
        } else {
            &self.air_dash
        }
    }

    /// Jump level for `index`, clamped into the ladder.
    ///
    /// An out-of-range index is a caller bug; debug builds stop here.
    pub fn jump_level(&self, index: usize) -> &JumpLevelSettings {
        debug_assert!(
            index < self.jump_levels.len(),
            "jump level {index} out of range (ladder has {})",
            self.jump_levels.len()
        );
        let last = self.jump_levels.len().saturating_sub(1);
        &self.jump_levels[index.min(last)]
    }

    /// Check every value the motion model relies on.
    pub fn validate(&self) -> Result<(), TuningError> {
        for (name, settings) in [("ground", &self.ground), ("air", &self.air)] {
            non_negative(name, "acceleration", settings.acceleration)?;
            non_negative(name, "deceleration", settings.deceleration)?;
            non_negative(name, "turn_back_friction", settings.turn_back_friction)?;
            non_negative(name, "max_speed", settings.max_speed)?;
        }
        for (name, settings) in [("ground_dash", &self.ground_dash), ("air_dash", &self.air_dash)] {
            non_negative(name, "dash_speed", settings.dash_speed)?;
            non_negative(name, "dash_duration", settings.dash_duration)?;
        }
        for (name, settings) in [("fall", &self.fall), ("jump_fall", &self.jump_fall)] {
            non_negative(name, "fall_gravity", settings.fall_gravity)?;
            non_negative(name, "max_fall_speed", settings.max_fall_speed)?;
        }

        if self.jump_levels.is_empty() {
            return Err(TuningError::NoJumpLevels);
        }
        for (index, level) in self.jump_levels.iter().enumerate() {
            non_negative("jump_levels", "jump_speed", level.jump_speed)?;
            non_negative("jump_levels", "jump_min_duration", level.jump_min_duration)?;
            non_negative("jump_levels", "jump_max_duration", level.jump_max_duration)?;
            if level.jump_min_duration > level.jump_max_duration {
                return Err(TuningError::JumpDurationOrder {
                    index,
                    min: level.jump_min_duration,
                    max: level.jump_max_duration,
                });
            }
        }

        non_negative("timers", "jump_buffer_duration", self.jump_buffer_duration)?;
        non_negative("timers", "coyote_duration", self.coyote_duration)?;
        Ok(())
    }
}

fn non_negative(group: &'static str, field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TuningError::InvalidValue {
            group,
            field,
            value,
        })
    }
}

/// Settings for the fixed simulation clock.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Physics ticks per second.
    pub fixed_hz: f64,
    /// Longest frame the clock will account for, in seconds.
    pub max_frame_delta: f32,
    /// Catch-up cap: fixed steps run for a single frame at most.
    pub max_steps_per_frame: u32,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            fixed_hz: 50.0,
            max_frame_delta: 0.25,
            max_steps_per_frame: 5,
        }
    }
}

impl SimulationSettings {
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.fixed_hz.is_finite() && self.fixed_hz > 0.0) {
            return Err(TuningError::FixedRate(self.fixed_hz));
        }
        non_negative("simulation", "max_frame_delta", self.max_frame_delta)?;
        if self.max_steps_per_frame == 0 {
            return Err(TuningError::NoCatchUpSteps);
        }
        Ok(())
    }
}

/// Input sampled once per rendered frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementInput {
    /// Horizontal axis in [-1, 1].
    pub move_x: f32,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
    pub dash_just_pressed: bool,
}
