use crate::constants::SEMITONES_PER_OCTAVE;
use crate::scale::ScaleId;

/// Semitone offset for a 1-based scale degree.
///
/// Degrees wrap around the scale length, so a degree chosen under a longer
/// scale still resolves after the host switches to a shorter one. Degree 0
/// and negative degrees wrap the same way.
pub fn degree_offset(scale: ScaleId, degree: i32) -> i32 {
    let degrees = scale.degrees();
    // i64 so that i32::MIN - 1 cannot overflow
    let index = (degree as i64 - 1).rem_euclid(degrees.len() as i64) as usize;
    degrees[index]
}

/// MIDI-style note number for a scale degree in the given key and octave.
pub fn scale_note(scale: ScaleId, degree: i32, root_note: i32, octave: i32) -> i32 {
    octave * SEMITONES_PER_OCTAVE + root_note + degree_offset(scale, degree)
}

/// Convert a note number to a 1 V/octave control voltage (note 0 = 0 V).
pub fn note_to_voltage(note: i32) -> f32 {
    note as f32 / SEMITONES_PER_OCTAVE as f32
}

/// Quantize a scale degree straight to its pitch CV.
pub fn quantize_pitch(scale: ScaleId, degree: i32, root_note: i32, octave: i32) -> f32 {
    note_to_voltage(scale_note(scale, degree, root_note, octave))
}

/// Snap a raw voltage onto a `step`-sized grid.
pub fn snap_to_step(volts: f32, step: f32) -> f32 {
    (volts / step).round() * step
}

/// Convert a MIDI note number to Hertz (A4=440 Hz).
///
/// Only used for human-readable logging; the engine itself speaks volts.
pub fn midi_to_hz(midi: f32) -> f32 {
    440.0 * (2.0_f32).powf((midi - 69.0) / 12.0)
}
