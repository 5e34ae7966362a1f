//! Trigger timers and held control voltages.

use crate::constants::{TRIGGER_DURATION, TRIGGER_HIGH, TRIGGER_LOW};

/// Index of each value in the per-tick output vector.
pub const OUT_GROUND_PITCH: usize = 0;
pub const OUT_GROUND_TRIGGER: usize = 1;
pub const OUT_COLLISION_CV: usize = 2;
pub const OUT_COLLISION_TRIGGER: usize = 3;
pub const OUTPUT_COUNT: usize = 4;

/// Output vector: ground pitch CV, ground trigger, collision CV, collision
/// trigger.
pub type Outputs = [f32; OUTPUT_COUNT];

/// Countdown that holds a trigger high until it runs out.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TriggerTimer {
    remaining: f32,
}

impl TriggerTimer {
    pub fn arm(&mut self) {
        self.remaining = TRIGGER_DURATION;
    }

    /// Count down by `dt`, never going below zero.
    pub fn decay(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt).max(0.0);
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn is_high(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn level(&self) -> f32 {
        if self.is_high() {
            TRIGGER_HIGH
        } else {
            TRIGGER_LOW
        }
    }
}

/// Everything the engine reports to the outside world.
///
/// CVs are level-held: they keep their last value until the next event of the
/// same kind overwrites them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OutputState {
    pub ground_pitch_voltage: f32,
    pub collision_voltage: f32,
    pub ground_trigger: TriggerTimer,
    pub collision_trigger: TriggerTimer,
}

impl OutputState {
    pub fn decay(&mut self, dt: f32) {
        self.ground_trigger.decay(dt);
        self.collision_trigger.decay(dt);
    }

    pub fn on_ground(&mut self, voltage: f32) {
        self.ground_pitch_voltage = voltage;
        self.ground_trigger.arm();
    }

    pub fn on_collision(&mut self, voltage: f32) {
        self.collision_voltage = voltage;
        self.collision_trigger.arm();
    }

    pub fn outputs(&self) -> Outputs {
        let mut out = [0.0; OUTPUT_COUNT];
        out[OUT_GROUND_PITCH] = self.ground_pitch_voltage;
        out[OUT_GROUND_TRIGGER] = self.ground_trigger.level();
        out[OUT_COLLISION_CV] = self.collision_voltage;
        out[OUT_COLLISION_TRIGGER] = self.collision_trigger.level();
        out
    }
}
