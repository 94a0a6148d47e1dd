//! Equal-tempered frequency calculation.
//!
//! Frequencies are derived from a semitone offset relative to A4 = 440 Hz and
//! a fine-tuning offset in cents. Every function here is pure and total over
//! finite inputs.

use serde::Serialize;

use crate::note::Note;
use crate::steps::CentSteps;

/// Frequency of A4 in Hz.
pub const REFERENCE_FREQUENCY: f64 = 440.0;

/// Cents in one equal-tempered semitone.
pub const CENTS_PER_SEMITONE: f64 = 100.0;

/// Cents in one octave.
pub const CENTS_PER_OCTAVE: f64 = 1200.0;

/// Computes the frequency `semitone_offset` semitones and `cent_offset` cents
/// away from A4.
///
/// `f = 440 * 2^((semitone_offset + cent_offset / 100) / 12)`
///
/// # Example
/// ```
/// use tuningfork_spec::pitch::frequency;
///
/// assert_eq!(frequency(0, 0.0), 440.0);
/// assert!((frequency(-9, 0.0) - 261.63).abs() < 0.01);
/// ```
pub fn frequency(semitone_offset: i32, cent_offset: f64) -> f64 {
    let semitones = semitone_offset as f64 + cent_offset / CENTS_PER_SEMITONE;
    REFERENCE_FREQUENCY * 2.0_f64.powf(semitones / 12.0)
}

/// Shifts `base_freq` by `cents`.
pub fn apply_cents(base_freq: f64, cents: f64) -> f64 {
    base_freq * 2.0_f64.powf(cents / CENTS_PER_OCTAVE)
}

/// Distance from `reference` to `freq` in cents (positive = sharp).
pub fn cents_between(freq: f64, reference: f64) -> f64 {
    CENTS_PER_OCTAVE * (freq / reference).log2()
}

/// A note shifted by one entry of a cent step set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DetunedPitch {
    /// Cent offset applied to the note.
    pub cents: i32,
    /// Resulting frequency in Hz.
    pub frequency: f64,
}

/// Lists the frequency of `note` at every offset of `steps`, in step order.
pub fn detuned_frequencies(note: Note, steps: &CentSteps) -> Vec<DetunedPitch> {
    steps
        .iter()
        .map(|cents| DetunedPitch {
            cents,
            frequency: frequency(note.semitone_offset(), cents as f64),
        })
        .collect()
}
