//! Error types for audio backend.

use thiserror::Error;
use tuningfork_spec::BackendError;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during tone rendering.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Frequency is not a positive finite number.
    #[error("invalid synthesis parameters: frequency must be positive, got {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Duration is not a positive finite number.
    #[error("invalid synthesis parameters: duration must be positive, got {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Sample rate is zero.
    #[error("invalid synthesis parameters: sample rate must be positive, got {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Amplitude is outside [0, 1].
    #[error("invalid synthesis parameters: amplitude must be in [0, 1], got {amplitude}")]
    InvalidAmplitude {
        /// The invalid amplitude.
        amplitude: f64,
    },

    /// The sample count does not fit the 32-bit size fields of a WAV header.
    #[error("tone of {num_samples} samples is too long for a WAV file")]
    TooLong {
        /// Requested number of samples.
        num_samples: u64,
    },

    /// Tone request failed validation before rendering.
    #[error("invalid tone request: {message}")]
    InvalidRequest {
        /// Joined validation messages.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Whether this error rejects the synthesis parameters themselves.
    pub fn is_invalid_params(&self) -> bool {
        matches!(
            self,
            AudioError::InvalidFrequency { .. }
                | AudioError::InvalidDuration { .. }
                | AudioError::InvalidSampleRate { .. }
                | AudioError::InvalidAmplitude { .. }
        )
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidFrequency { .. } => "AUDIO_001",
            AudioError::InvalidDuration { .. } => "AUDIO_002",
            AudioError::InvalidSampleRate { .. } => "AUDIO_003",
            AudioError::InvalidAmplitude { .. } => "AUDIO_004",
            AudioError::TooLong { .. } => "AUDIO_005",
            AudioError::InvalidRequest { .. } => "AUDIO_006",
            AudioError::Io(_) => "AUDIO_007",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_params_class() {
        assert!(AudioError::InvalidFrequency { freq: 0.0 }.is_invalid_params());
        assert!(AudioError::InvalidDuration { duration: -1.0 }.is_invalid_params());
        assert!(AudioError::InvalidSampleRate { rate: 0 }.is_invalid_params());
        assert!(!AudioError::TooLong { num_samples: 1 }.is_invalid_params());
    }

    #[test]
    fn test_message_names_parameter() {
        let err = AudioError::InvalidFrequency { freq: -3.0 };
        assert!(err.to_string().contains("frequency"));
        assert!(err.to_string().contains("-3"));
        assert_eq!(err.code(), "AUDIO_001");
        assert_eq!(err.category(), "audio");
    }
}
