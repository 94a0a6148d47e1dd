//! Tuningfork Spec Library
//!
//! This crate holds the musical side of tuningfork: the twelve selectable
//! notes, the cent step sets a singer fine-tunes with, the equal-tempered
//! frequency calculator, and the [`ToneRequest`] that bundles one playback's
//! parameters.
//!
//! # Example
//!
//! ```
//! use tuningfork_spec::{Note, ToneRequest};
//!
//! let request = ToneRequest::new(Note::C4, 25);
//! assert!(request.validate().is_ok());
//! assert!((request.frequency() - 265.43).abs() < 0.01);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for validation
//! - [`note`]: The twelve notes of the reference octave
//! - [`pitch`]: Frequency calculation from semitones and cents
//! - [`request`]: Tone request with defaults and validation
//! - [`steps`]: Configurable cent step sets and presets

pub mod error;
pub mod note;
pub mod pitch;
pub mod request;
pub mod steps;

// Re-export commonly used types at the crate root
pub use error::{
    BackendError, ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use note::Note;
pub use pitch::{frequency, DetunedPitch};
pub use request::ToneRequest;
pub use steps::{CentSteps, StepPreset};
