//! Error types for tone request validation and parsing.

use thiserror::Error;

/// Error codes for tone request validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Note name is not one of the 12 supported pitch classes
    UnknownNote,
    /// E002: Cent offset is not part of the configured step set
    CentsNotInSteps,
    /// E003: Cent step set is empty, duplicated, or out of range
    InvalidSteps,
    /// E004: Duration is not a positive finite number of seconds
    InvalidDuration,
    /// E005: Sample rate is zero
    InvalidSampleRate,
    /// E006: Amplitude is outside [0, 1]
    InvalidAmplitude,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::UnknownNote => "E001",
            ErrorCode::CentsNotInSteps => "E002",
            ErrorCode::InvalidSteps => "E003",
            ErrorCode::InvalidDuration => "E004",
            ErrorCode::InvalidSampleRate => "E005",
            ErrorCode::InvalidAmplitude => "E006",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for tone request validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Duration is unusually long for a reference tone
    LongDuration,
    /// W002: Cent offset reaches a neighbouring semitone
    OffsetBeyondSemitone,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::LongDuration => "W001",
            WarningCode::OffsetBeyondSemitone => "W002",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// JSON field the problem refers to (e.g., "cents").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a JSON path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// JSON field the warning refers to.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning with a JSON path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Top-level error type for spec operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Note name could not be parsed.
    #[error("unknown note '{0}': expected one of C4, C#4, D4, ... B4")]
    UnknownNote(String),

    /// Cent step set is malformed.
    #[error("invalid cent steps: {0}")]
    InvalidSteps(String),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl SpecError {
    /// Maps a note or step-set parse failure onto its validation code.
    ///
    /// `UnknownNote` becomes E001 at `note` and `InvalidSteps` becomes E003 at
    /// `steps`. JSON errors have no validation code.
    pub fn to_validation_error(&self) -> Option<ValidationError> {
        let (code, path) = match self {
            SpecError::UnknownNote(_) => (ErrorCode::UnknownNote, "note"),
            SpecError::InvalidSteps(_) => (ErrorCode::InvalidSteps, "steps"),
            SpecError::JsonParse(_) => return None,
        };
        Some(ValidationError::with_path(code, self.to_string(), path))
    }
}

/// Result of tone request validation.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self::default()
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Converts to a Result, returning Err if there are errors.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, Vec<ValidationError>> {
        if self.is_ok() {
            Ok(self.warnings)
        } else {
            Err(self.errors)
        }
    }
}

/// Common trait for backend errors.
///
/// Backends implement this so the CLI can report a stable code and category
/// without depending on each backend's concrete error enum.
pub trait BackendError: std::error::Error {
    /// Stable code such as "AUDIO_001".
    fn code(&self) -> &'static str;

    /// Human-readable message, by default the `Display` output.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Category used to group related errors (e.g., "audio").
    fn category(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_unique() {
        let codes = [
            ErrorCode::UnknownNote,
            ErrorCode::CentsNotInSteps,
            ErrorCode::InvalidSteps,
            ErrorCode::InvalidDuration,
            ErrorCode::InvalidSampleRate,
            ErrorCode::InvalidAmplitude,
        ];
        let mut seen: Vec<&str> = codes.iter().map(|c| c.code()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), codes.len());
    }

    #[test]
    fn test_validation_error_display_with_path() {
        let err = ValidationError::with_path(ErrorCode::CentsNotInSteps, "bad cents", "cents");
        assert_eq!(err.to_string(), "E002: bad cents (at cents)");
    }

    #[test]
    fn test_parse_errors_map_to_codes() {
        let note = SpecError::UnknownNote("H4".to_string())
            .to_validation_error()
            .unwrap();
        assert_eq!(note.code, ErrorCode::UnknownNote);
        assert_eq!(note.code.code(), "E001");
        assert_eq!(note.path.as_deref(), Some("note"));
        assert!(note.message.contains("H4"));

        let steps: SpecError = "sixteenth".parse::<crate::CentSteps>().unwrap_err();
        let steps = steps.to_validation_error().unwrap();
        assert_eq!(steps.code.code(), "E003");
        assert_eq!(steps.path.as_deref(), Some("steps"));

        let json = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(SpecError::from(json).to_validation_error().is_none());
    }

    #[test]
    fn test_validation_result_into_result() {
        let mut result = ValidationResult::success();
        assert!(result.is_ok());
        result.add_error(ValidationError::new(ErrorCode::InvalidDuration, "nope"));
        assert!(!result.is_ok());
        let errors = result.into_result().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::InvalidDuration);
    }
}
