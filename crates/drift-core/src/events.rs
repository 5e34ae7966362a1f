use smallvec::SmallVec;

/// Something observable that happened during a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EngineEvent {
    /// A particle reached the ground and was removed from `slot`.
    Ground { slot: usize, note: i32, voltage: f32 },
    /// Two particles overlapped outside their cooldown windows.
    Collision {
        first: usize,
        second: usize,
        voltage: f32,
    },
}

/// Per-tick event log. A tick can land at most every live particle and each
/// collision consumes two, so the inline capacity is never exceeded.
pub type EventLog = SmallVec<[EngineEvent; 16]>;
