// Host-side scaling and pacing constants.

// DC-coupled interfaces map a full-scale sample (1.0) to 10 V.
pub const VOLTS_FULL_SCALE: f32 = 10.0;

// How often the status line is refreshed
pub const STATUS_INTERVAL_MS: u64 = 1000;

// Lower bound for headless pacing so a tiny --control-rate cannot stall
pub const MIN_CONTROL_RATE_HZ: f64 = 1.0;
