//! Loading tone requests from JSON files and command-line flags.
//!
//! A JSON request file supplies the base settings. Any flag given on the
//! command line replaces the corresponding field. Without a file, the note
//! flag is required and everything else falls back to request defaults.

use std::path::{Path, PathBuf};

use tuningfork_spec::{CentSteps, Note, SpecError, ToneRequest, ValidationError};

/// Recognized request file extensions.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Tone settings given as individual flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToneOptions {
    /// Note name, e.g. "C#4".
    pub note: Option<String>,
    /// Cent offset.
    pub cents: Option<i32>,
    /// Step set as given on the command line: a preset name or a comma list.
    pub steps: Option<String>,
    /// Duration in seconds.
    pub duration_seconds: Option<f64>,
    /// Sample rate in Hz.
    pub sample_rate: Option<u32>,
    /// Synthesis amplitude.
    pub amplitude: Option<f64>,
}

/// A request together with where it came from.
#[derive(Debug)]
pub struct LoadResult {
    /// The resolved request.
    pub request: ToneRequest,
    /// BLAKE3 hash of the request file, if one was read.
    pub source_hash: Option<String>,
}

/// Errors that can occur while resolving a request.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Unknown file extension.
    UnknownExtension { extension: Option<String> },

    /// JSON parsing failed.
    JsonParse { message: String },

    /// Neither a request file nor a note was given.
    MissingNote,

    /// Note name or step set could not be parsed.
    Invalid(ValidationError),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::UnknownExtension { extension } => match extension {
                Some(ext) => write!(f, "unknown file extension '.{}' (expected .json)", ext),
                None => write!(f, "file has no extension (expected .json)"),
            },
            InputError::JsonParse { message } => write!(f, "JSON parse error: {}", message),
            InputError::MissingNote => write!(f, "a note is required (use --note or --request)"),
            InputError::Invalid(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            InputError::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

/// Loads a request from a JSON file.
pub fn load_request(path: &Path) -> Result<LoadResult, InputError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase());
    if !matches!(extension.as_deref(), Some(ext) if JSON_EXTENSIONS.contains(&ext)) {
        return Err(InputError::UnknownExtension { extension });
    }

    let content = std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let source_hash = blake3::hash(content.as_bytes()).to_hex().to_string();

    let request = ToneRequest::from_json(&content).map_err(|e| match e {
        SpecError::JsonParse(err) => InputError::JsonParse {
            message: err.to_string(),
        },
        other => InputError::JsonParse {
            message: other.to_string(),
        },
    })?;

    Ok(LoadResult {
        request,
        source_hash: Some(source_hash),
    })
}

/// Resolves the request for a command: the file (if any) with flag overrides
/// applied on top.
pub fn resolve_request(
    request_path: Option<&Path>,
    options: &ToneOptions,
) -> Result<LoadResult, InputError> {
    let mut loaded = match request_path {
        Some(path) => load_request(path)?,
        None => {
            let name = options.note.as_deref().ok_or(InputError::MissingNote)?;
            LoadResult {
                request: ToneRequest::new(parse_note(name)?, 0),
                source_hash: None,
            }
        }
    };

    apply_overrides(&mut loaded.request, options)?;
    Ok(loaded)
}

fn apply_overrides(request: &mut ToneRequest, options: &ToneOptions) -> Result<(), InputError> {
    if let Some(name) = options.note.as_deref() {
        request.note = parse_note(name)?;
    }
    if let Some(cents) = options.cents {
        request.cents = cents;
    }
    if let Some(steps) = options.steps.as_deref() {
        request.steps = parse_steps(steps)?;
    }
    if let Some(duration) = options.duration_seconds {
        request.duration_seconds = duration;
    }
    if let Some(rate) = options.sample_rate {
        request.sample_rate = rate;
    }
    if let Some(amplitude) = options.amplitude {
        request.amplitude = amplitude;
    }
    Ok(())
}

/// Parses a note name, reporting failures as E001.
pub fn parse_note(name: &str) -> Result<Note, InputError> {
    name.parse().map_err(invalid)
}

/// Parses a step preset or comma list, reporting failures as E003.
pub fn parse_steps(steps: &str) -> Result<CentSteps, InputError> {
    steps.parse().map_err(invalid)
}

fn invalid(error: SpecError) -> InputError {
    match error.to_validation_error() {
        Some(err) => InputError::Invalid(err),
        None => InputError::JsonParse {
            message: error.to_string(),
        },
    }
}
