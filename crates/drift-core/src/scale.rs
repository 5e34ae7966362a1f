use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Natural minor (aeolian), the fallback scale.
pub const MINOR: &[i32] = &[0, 2, 3, 5, 7, 8, 10];
/// Diatonic modes (relative semitone degrees)
pub const MAJOR: &[i32] = &[0, 2, 4, 5, 7, 9, 11];
pub const DORIAN: &[i32] = &[0, 2, 3, 5, 7, 9, 10];
pub const PHRYGIAN: &[i32] = &[0, 1, 3, 5, 7, 8, 10];
pub const LYDIAN: &[i32] = &[0, 2, 4, 6, 7, 9, 11];
pub const MIXOLYDIAN: &[i32] = &[0, 2, 4, 5, 7, 9, 10];
pub const LOCRIAN: &[i32] = &[0, 1, 3, 5, 6, 8, 10];
pub const HARMONIC_MINOR: &[i32] = &[0, 2, 3, 5, 7, 8, 11];
pub const MELODIC_MINOR: &[i32] = &[0, 2, 3, 5, 7, 9, 11];

/// Identifier of one of the built-in scales.
///
/// The discriminant order is the host-facing table order, so a numeric
/// parameter can be mapped with [`ScaleId::from_index`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScaleId {
    #[default]
    Minor,
    Major,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Locrian,
    HarmonicMinor,
    MelodicMinor,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scale `{0}`")]
pub struct UnknownScale(pub String);

impl ScaleId {
    pub const ALL: [ScaleId; 9] = [
        ScaleId::Minor,
        ScaleId::Major,
        ScaleId::Dorian,
        ScaleId::Phrygian,
        ScaleId::Lydian,
        ScaleId::Mixolydian,
        ScaleId::Locrian,
        ScaleId::HarmonicMinor,
        ScaleId::MelodicMinor,
    ];

    /// Map a table index to a scale. Indices outside the table fall back to
    /// the default scale instead of failing.
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Semitone offsets of the scale degrees, root first.
    pub fn degrees(self) -> &'static [i32] {
        match self {
            ScaleId::Minor => MINOR,
            ScaleId::Major => MAJOR,
            ScaleId::Dorian => DORIAN,
            ScaleId::Phrygian => PHRYGIAN,
            ScaleId::Lydian => LYDIAN,
            ScaleId::Mixolydian => MIXOLYDIAN,
            ScaleId::Locrian => LOCRIAN,
            ScaleId::HarmonicMinor => HARMONIC_MINOR,
            ScaleId::MelodicMinor => MELODIC_MINOR,
        }
    }

    pub fn degree_count(self) -> usize {
        self.degrees().len()
    }

    pub fn name(self) -> &'static str {
        match self {
            ScaleId::Minor => "minor",
            ScaleId::Major => "major",
            ScaleId::Dorian => "dorian",
            ScaleId::Phrygian => "phrygian",
            ScaleId::Lydian => "lydian",
            ScaleId::Mixolydian => "mixolydian",
            ScaleId::Locrian => "locrian",
            ScaleId::HarmonicMinor => "harmonic_minor",
            ScaleId::MelodicMinor => "melodic_minor",
        }
    }
}

impl fmt::Display for ScaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScaleId {
    type Err = UnknownScale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.name() == wanted)
            .ok_or_else(|| UnknownScale(s.to_string()))
    }
}
