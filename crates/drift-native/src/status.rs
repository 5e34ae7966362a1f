use drift_core::{midi_to_hz, EngineEvent, Outputs};

// Events beyond this are counted but not queued for logging.
const MAX_PENDING_EVENTS: usize = 256;

/// State shared between whatever ticks the engine and the logging loop.
#[derive(Debug, Default)]
pub struct HostStatus {
    pub outputs: Outputs,
    pub active: usize,
    pub ground_total: u64,
    pub collision_total: u64,
    pub dropped_events: u64,
    pending: Vec<EngineEvent>,
}

impl HostStatus {
    pub fn record(&mut self, outputs: Outputs, active: usize, events: &[EngineEvent]) {
        self.outputs = outputs;
        self.active = active;
        for ev in events {
            match ev {
                EngineEvent::Ground { .. } => self.ground_total += 1,
                EngineEvent::Collision { .. } => self.collision_total += 1,
            }
            if self.pending.len() < MAX_PENDING_EVENTS {
                self.pending.push(*ev);
            } else {
                self.dropped_events += 1;
            }
        }
    }

    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.pending)
    }
}

pub fn log_event(ev: &EngineEvent) {
    match *ev {
        EngineEvent::Ground {
            slot,
            note,
            voltage,
        } => log::info!(
            "[ground] slot {} note {} ({:.1} Hz) -> {:.3} V",
            slot,
            note,
            midi_to_hz(note as f32),
            voltage
        ),
        EngineEvent::Collision {
            first,
            second,
            voltage,
        } => log::info!(
            "[collision] slots {}/{} -> {:+.1} V",
            first,
            second,
            voltage
        ),
    }
}

pub fn log_summary(status: &HostStatus) {
    let [pitch, gate, cv, cgate] = status.outputs;
    log::info!(
        "[engine] live={} landed={} collided={} out=[{:.3} V, {}, {:+.1} V, {}]",
        status.active,
        status.ground_total,
        status.collision_total,
        pitch,
        gate,
        cv,
        cgate
    );
    if status.dropped_events > 0 {
        log::warn!(
            "[engine] {} events not logged (logger fell behind)",
            status.dropped_events
        );
    }
}
