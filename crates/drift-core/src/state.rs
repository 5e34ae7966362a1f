//! Visual-side state types shared with host renderers.
//!
//! These types avoid referencing platform-specific APIs. A renderer reads
//! them once per frame to draw particles and flash trigger indicators; the
//! engine never depends on them for correctness.

use crate::constants::TRIGGER_DURATION;
use crate::output::TriggerTimer;
use glam::Vec2;

/// Read-only view of one live particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleView {
    pub slot: usize,
    pub position: Vec2,
    pub radius: u8,
}

/// Small value container used by the renderer to represent a trigger flash.
///
/// `amount` is in the \[0, 1\] range: 1 right after the trigger fires,
/// falling linearly to 0 as the trigger timer runs out.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TriggerPulse {
    pub amount: f32,
}

impl From<&TriggerTimer> for TriggerPulse {
    fn from(timer: &TriggerTimer) -> Self {
        Self {
            amount: (timer.remaining() / TRIGGER_DURATION).clamp(0.0, 1.0),
        }
    }
}
