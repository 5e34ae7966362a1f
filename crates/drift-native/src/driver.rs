use crate::constants::VOLTS_FULL_SCALE;
use crate::status::HostStatus;
use drift_core::{Outputs, ParamSnapshot, ParticleEngine};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Owns the engine on whichever thread ticks it and publishes each tick's
/// result to the shared status.
pub struct CvDriver {
    engine: ParticleEngine,
    params: ParamSnapshot,
    status: Arc<Mutex<HostStatus>>,
}

impl CvDriver {
    pub fn new(engine: ParticleEngine, params: ParamSnapshot, status: Arc<Mutex<HostStatus>>) -> Self {
        Self {
            engine,
            params,
            status,
        }
    }

    pub fn step(&mut self, dt: Duration) -> Outputs {
        let outputs = self.engine.tick(dt, &self.params);
        // Never block the ticking thread on the logger; a contended tick only
        // loses its log lines.
        if let Ok(mut status) = self.status.try_lock() {
            status.record(outputs, self.engine.active_count(), self.engine.events());
        }
        outputs
    }
}

/// Map volts onto a DC-coupled interface sample.
pub fn volts_to_sample(volts: f32) -> f32 {
    (volts / VOLTS_FULL_SCALE).clamp(-1.0, 1.0)
}
