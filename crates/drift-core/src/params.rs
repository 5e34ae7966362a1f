use crate::constants::POOL_CAPACITY;
use crate::scale::ScaleId;

/// Live-tunable parameters supplied by the host on every tick.
///
/// - `root_note` semitone of the key, 0 (C) ..= 11 (B)
/// - `octave` octave added to landed notes, 0 ..= 8
/// - `scale` scale used to quantize landed particles
/// - `global_fall_speed` multiplier on every particle's fall rate, 0.1 ..= 25
/// - `gravity` multiplier baked into new particles' fall rate, 0.1 ..= 5
/// - `max_particles` population ceiling, 1 ..= pool capacity
/// - `wind` horizontal sway amplitude, 0 ..= 1
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamSnapshot {
    pub root_note: i32,
    pub octave: i32,
    pub scale: ScaleId,
    pub global_fall_speed: f32,
    pub gravity: f32,
    pub max_particles: usize,
    pub wind: f32,
}

pub const ROOT_NOTE_RANGE: (i32, i32) = (0, 11);
pub const OCTAVE_RANGE: (i32, i32) = (0, 8);
pub const FALL_SPEED_RANGE: (f32, f32) = (0.1, 25.0);
pub const GRAVITY_RANGE: (f32, f32) = (0.1, 5.0);
pub const WIND_RANGE: (f32, f32) = (0.0, 1.0);

impl Default for ParamSnapshot {
    fn default() -> Self {
        Self {
            root_note: 0,
            octave: 3,
            scale: ScaleId::Minor,
            global_fall_speed: 5.0,
            gravity: 1.0,
            max_particles: 6,
            wind: 0.1,
        }
    }
}

impl ParamSnapshot {
    /// Copy with every field forced into its documented range. Non-finite
    /// floats take the default value.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        Self {
            root_note: self.root_note.clamp(ROOT_NOTE_RANGE.0, ROOT_NOTE_RANGE.1),
            octave: self.octave.clamp(OCTAVE_RANGE.0, OCTAVE_RANGE.1),
            scale: self.scale,
            global_fall_speed: clamp_finite(
                self.global_fall_speed,
                FALL_SPEED_RANGE,
                defaults.global_fall_speed,
            ),
            gravity: clamp_finite(self.gravity, GRAVITY_RANGE, defaults.gravity),
            max_particles: self.max_particles.clamp(1, POOL_CAPACITY),
            wind: clamp_finite(self.wind, WIND_RANGE, defaults.wind),
        }
    }

    pub fn with_scale_index(mut self, index: usize) -> Self {
        self.scale = ScaleId::from_index(index);
        self
    }
}

#[inline]
fn clamp_finite(value: f32, (lo, hi): (f32, f32), fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(lo, hi)
    } else {
        fallback
    }
}
