//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json`, which replaces colored text with one of
//! the structures below printed to stdout.

use serde::Serialize;
use tuningfork_spec::{BackendError, DetunedPitch, ValidationError, ValidationWarning};

use crate::input::InputError;

/// Error codes for CLI operations.
///
/// Format: CLI_XXX for CLI-level errors; validation and backend errors pass
/// their own codes through.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Unknown file extension
    pub const UNKNOWN_EXTENSION: &str = "CLI_002";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_003";
    /// No note given
    pub const MISSING_NOTE: &str = "CLI_004";
    /// Output file could not be written
    pub const FILE_WRITE: &str = "CLI_005";
    /// Input is not a readable WAV file
    pub const WAV_DECODE: &str = "CLI_006";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E002", "AUDIO_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Request field the error refers to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// Request field the warning refers to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Converts a request validation error.
pub fn validation_error_to_json(error: &ValidationError) -> JsonError {
    JsonError {
        code: error.code.code().to_string(),
        message: error.message.clone(),
        path: error.path.clone(),
    }
}

/// Converts a request validation warning.
pub fn validation_warning_to_json(warning: &ValidationWarning) -> JsonWarning {
    JsonWarning {
        code: warning.code.code().to_string(),
        message: warning.message.clone(),
        path: warning.path.clone(),
    }
}

/// Converts an input loading error.
///
/// Note and step-set failures keep their validation code (E001, E003).
pub fn input_error_to_json(error: &InputError) -> JsonError {
    let code = match error {
        InputError::FileRead { .. } => error_codes::FILE_READ,
        InputError::UnknownExtension { .. } => error_codes::UNKNOWN_EXTENSION,
        InputError::JsonParse { .. } => error_codes::JSON_PARSE,
        InputError::MissingNote => error_codes::MISSING_NOTE,
        InputError::Invalid(err) => return validation_error_to_json(err),
    };
    JsonError::new(code, error.to_string())
}

/// Converts any backend error.
pub fn backend_error_to_json<E: BackendError>(error: &E) -> JsonError {
    JsonError::new(error.code(), error.message())
}

/// One row of the `notes` table.
#[derive(Debug, Clone, Serialize)]
pub struct NoteRow {
    /// Canonical note name.
    pub note: String,
    /// Semitone distance from A4.
    pub semitone_offset: i32,
    /// Frequency at 0 cents.
    pub frequency: f64,
    /// Frequency at each step.
    pub detuned: Vec<DetunedPitch>,
}

/// Output of `notes --json`.
#[derive(Debug, Clone, Serialize)]
pub struct NotesOutput {
    /// Whether the step set was accepted.
    pub success: bool,
    /// Step set used for the table.
    pub steps: Vec<i32>,
    /// One row per note.
    pub notes: Vec<NoteRow>,
    /// Errors.
    pub errors: Vec<JsonError>,
}

/// Output of `frequency --json`.
#[derive(Debug, Clone, Serialize)]
pub struct FrequencyOutput {
    /// Whether the note and offset were accepted.
    pub success: bool,
    /// Note name, if parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Cent offset.
    pub cents: i32,
    /// Frequency in Hz, if computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    /// Errors.
    pub errors: Vec<JsonError>,
}

/// Output of `render --json`.
#[derive(Debug, Clone, Serialize)]
pub struct RenderOutput {
    /// Whether the file was written.
    pub success: bool,
    /// Details of the rendered tone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<RenderDetails>,
    /// Errors.
    pub errors: Vec<JsonError>,
    /// Warnings.
    pub warnings: Vec<JsonWarning>,
}

/// Details of a rendered tone.
#[derive(Debug, Clone, Serialize)]
pub struct RenderDetails {
    /// Output path.
    pub path: String,
    /// Note name.
    pub note: String,
    /// Cent offset.
    pub cents: i32,
    /// Frequency in Hz.
    pub frequency: f64,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
    /// File size in bytes.
    pub bytes: usize,
    /// BLAKE3 hash of the PCM data.
    pub pcm_hash: String,
    /// BLAKE3 hash of the request file, if one was used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

/// Output of `inspect --json`.
#[derive(Debug, Clone, Serialize)]
pub struct InspectOutput {
    /// Whether the file could be read.
    pub success: bool,
    /// WAV properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<InspectDetails>,
    /// Errors.
    pub errors: Vec<JsonError>,
}

/// Properties of a WAV file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectDetails {
    /// Channel count.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Samples per channel.
    pub num_samples: u32,
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// Largest absolute sample value.
    pub peak: u32,
    /// BLAKE3 hash of the PCM data, if the data chunk was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
}
