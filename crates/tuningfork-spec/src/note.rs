//! The twelve selectable notes of the reference octave.
//!
//! Each note is identified by its signed semitone distance from A4, which is
//! all the frequency calculator needs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SpecError;
use crate::pitch;

/// The octave every selectable note belongs to.
pub const REFERENCE_OCTAVE: i32 = 4;

/// One of the 12 pitch classes of octave 4 (C4 through B4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Note {
    C4,
    CSharp4,
    D4,
    DSharp4,
    E4,
    F4,
    FSharp4,
    G4,
    GSharp4,
    A4,
    ASharp4,
    B4,
}

impl Note {
    /// All notes in keyboard order, C4 first.
    pub const ALL: [Note; 12] = [
        Note::C4,
        Note::CSharp4,
        Note::D4,
        Note::DSharp4,
        Note::E4,
        Note::F4,
        Note::FSharp4,
        Note::G4,
        Note::GSharp4,
        Note::A4,
        Note::ASharp4,
        Note::B4,
    ];

    /// Semitone distance from A4 (C4 = -9, B4 = +2).
    pub fn semitone_offset(self) -> i32 {
        self.chromatic_index() - 9
    }

    /// Position within the octave, counted from C (0..=11).
    pub fn chromatic_index(self) -> i32 {
        self as i32
    }

    /// Canonical name using sharps (e.g., "C#4").
    pub fn name(self) -> &'static str {
        match self {
            Note::C4 => "C4",
            Note::CSharp4 => "C#4",
            Note::D4 => "D4",
            Note::DSharp4 => "D#4",
            Note::E4 => "E4",
            Note::F4 => "F4",
            Note::FSharp4 => "F#4",
            Note::G4 => "G4",
            Note::GSharp4 => "G#4",
            Note::A4 => "A4",
            Note::ASharp4 => "A#4",
            Note::B4 => "B4",
        }
    }

    /// Whether the note sits on a black key.
    pub fn is_accidental(self) -> bool {
        matches!(
            self,
            Note::CSharp4 | Note::DSharp4 | Note::FSharp4 | Note::GSharp4 | Note::ASharp4
        )
    }

    /// Equal-tempered frequency in Hz with no fine-tuning applied.
    pub fn frequency(self) -> f64 {
        pitch::frequency(self.semitone_offset(), 0.0)
    }

    /// Two-decimal frequency as printed on a reference chart.
    ///
    /// Display only; synthesis always goes through [`pitch::frequency`].
    pub fn nominal_frequency(self) -> f64 {
        match self {
            Note::C4 => 261.63,
            Note::CSharp4 => 277.18,
            Note::D4 => 293.66,
            Note::DSharp4 => 311.13,
            Note::E4 => 329.63,
            Note::F4 => 349.23,
            Note::FSharp4 => 369.99,
            Note::G4 => 392.00,
            Note::GSharp4 => 415.30,
            Note::A4 => 440.00,
            Note::ASharp4 => 466.16,
            Note::B4 => 493.88,
        }
    }

    fn from_chromatic_index(index: i32) -> Option<Note> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Note::ALL.get(i).copied())
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a note name such as "A4", "C#4", "Db4", "Cs4", or a bare "G".
///
/// The octave may be omitted but, when present, must be 4.
impl FromStr for Note {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || SpecError::UnknownNote(s.to_string());

        let name = s.trim();
        let mut chars = name.chars();
        let letter = chars.next().ok_or_else(unknown)?.to_ascii_uppercase();

        let base: i32 = match letter {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return Err(unknown()),
        };

        let rest = chars.as_str();
        let (accidental, octave_str) = if let Some(stripped) = rest.strip_prefix('#') {
            (1, stripped)
        } else if let Some(stripped) = rest.strip_prefix('s') {
            (1, stripped)
        } else if let Some(stripped) = rest.strip_prefix('b') {
            (-1, stripped)
        } else {
            (0, rest)
        };

        // Exact match: "A04" and "A+4" are not octave 4.
        if !octave_str.is_empty() && octave_str != REFERENCE_OCTAVE.to_string() {
            return Err(unknown());
        }

        // Cb4 and B#4 fall outside the octave.
        Note::from_chromatic_index(base + accidental).ok_or_else(unknown)
    }
}

impl Serialize for Note {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Note {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
