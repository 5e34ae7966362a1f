use clap::Parser;
use drift_core::{ParamSnapshot, ScaleId};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Root note, 0 (C) to 11 (B)
    #[arg(long, default_value_t = 0)]
    pub root: i32,

    /// Octave added to landed notes, 0 to 8
    #[arg(long, default_value_t = 3)]
    pub octave: i32,

    /// Scale name (minor, major, dorian, phrygian, lydian, mixolydian,
    /// locrian, harmonic_minor, melodic_minor)
    #[arg(long, default_value = "minor")]
    pub scale: ScaleId,

    /// Global fall speed multiplier, 0.1 to 25
    #[arg(long, default_value_t = 5.0)]
    pub fall_speed: f32,

    /// Gravity multiplier for new particles, 0.1 to 5
    #[arg(long, default_value_t = 1.0)]
    pub gravity: f32,

    /// Maximum live particles, 1 to 12
    #[arg(long, default_value_t = 6)]
    pub max_particles: usize,

    /// Wind strength, 0 to 1
    #[arg(long, default_value_t = 0.1)]
    pub wind: f32,

    /// Seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many seconds (runs until interrupted otherwise)
    #[arg(long)]
    pub seconds: Option<f64>,

    /// Tick on a timer instead of an audio device
    #[arg(long, default_value_t = false)]
    pub headless: bool,

    /// Ticks per second in headless mode
    #[arg(long, default_value_t = 100.0)]
    pub control_rate: f64,
}

impl Args {
    pub fn params(&self) -> ParamSnapshot {
        ParamSnapshot {
            root_note: self.root,
            octave: self.octave,
            scale: self.scale,
            global_fall_speed: self.fall_speed,
            gravity: self.gravity,
            max_particles: self.max_particles,
            wind: self.wind,
        }
        .sanitized()
    }
}
