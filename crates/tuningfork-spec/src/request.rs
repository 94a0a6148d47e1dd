//! Tone request: the explicit parameters of one playback.
//!
//! A request carries everything needed to render a tone. It replaces any
//! notion of "current selection" kept by a user interface.

use serde::{Deserialize, Serialize};

use crate::error::{
    ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
use crate::note::Note;
use crate::pitch;
use crate::steps::CentSteps;

/// Default tone length in seconds.
pub const DEFAULT_DURATION_SECONDS: f64 = 6.0;

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Default synthesis amplitude before peak normalization.
pub const DEFAULT_AMPLITUDE: f64 = 0.5;

/// Durations above this produce a warning.
pub const LONG_DURATION_SECONDS: f64 = 60.0;

/// Longest accepted duration in seconds.
pub const MAX_DURATION_SECONDS: f64 = 600.0;

/// A request to render one reference tone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToneRequest {
    /// Selected note.
    pub note: Note,
    /// Fine-tuning offset in cents; must be one of `steps`.
    #[serde(default)]
    pub cents: i32,
    /// Allowed cent offsets.
    #[serde(default)]
    pub steps: CentSteps,
    /// Tone length in seconds.
    #[serde(default = "default_duration")]
    pub duration_seconds: f64,
    /// Output sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Synthesis amplitude in [0, 1].
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
}

fn default_duration() -> f64 {
    DEFAULT_DURATION_SECONDS
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

fn default_amplitude() -> f64 {
    DEFAULT_AMPLITUDE
}

impl ToneRequest {
    /// Creates a request for `note` at `cents` with default settings.
    pub fn new(note: Note, cents: i32) -> Self {
        Self {
            note,
            cents,
            steps: CentSteps::default(),
            duration_seconds: DEFAULT_DURATION_SECONDS,
            sample_rate: DEFAULT_SAMPLE_RATE,
            amplitude: DEFAULT_AMPLITUDE,
        }
    }

    /// Sets the allowed step set.
    pub fn with_steps(mut self, steps: CentSteps) -> Self {
        self.steps = steps;
        self
    }

    /// Sets the duration in seconds.
    pub fn with_duration(mut self, duration_seconds: f64) -> Self {
        self.duration_seconds = duration_seconds;
        self
    }

    /// Sets the sample rate in Hz.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Sets the synthesis amplitude.
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Parses a request from JSON.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the request as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Frequency of the selected note shifted by the selected cents.
    pub fn frequency(&self) -> f64 {
        pitch::frequency(self.note.semitone_offset(), self.cents as f64)
    }

    /// Checks every field and collects all problems found.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::success();

        if !self.steps.contains(self.cents) {
            result.add_error(ValidationError::with_path(
                ErrorCode::CentsNotInSteps,
                format!(
                    "{} is not one of the allowed steps [{}]",
                    CentSteps::label(self.cents),
                    self.steps
                ),
                "cents",
            ));
        } else if self.cents.abs() >= 100 {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::OffsetBeyondSemitone,
                format!(
                    "{} reaches past the neighbouring semitone",
                    CentSteps::label(self.cents)
                ),
                "cents",
            ));
        }

        if !self.duration_seconds.is_finite() || self.duration_seconds <= 0.0 {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidDuration,
                format!(
                    "duration must be a positive number of seconds, got {}",
                    self.duration_seconds
                ),
                "duration_seconds",
            ));
        } else if self.duration_seconds > MAX_DURATION_SECONDS {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidDuration,
                format!(
                    "duration of {} s exceeds the {} s limit",
                    self.duration_seconds, MAX_DURATION_SECONDS
                ),
                "duration_seconds",
            ));
        } else if self.duration_seconds > LONG_DURATION_SECONDS {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::LongDuration,
                format!(
                    "duration of {} s is longer than {} s",
                    self.duration_seconds, LONG_DURATION_SECONDS
                ),
                "duration_seconds",
            ));
        }

        if self.sample_rate == 0 {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidSampleRate,
                "sample rate must be positive",
                "sample_rate",
            ));
        }

        if !self.amplitude.is_finite() || !(0.0..=1.0).contains(&self.amplitude) {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidAmplitude,
                format!("amplitude must be in [0, 1], got {}", self.amplitude),
                "amplitude",
            ));
        }

        result
    }
}
