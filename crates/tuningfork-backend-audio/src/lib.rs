//! Tuningfork Audio Backend
//!
//! This crate renders reference tones for tuningfork: a single sine wave at a
//! note's fine-tuned frequency, peak-normalized to full-scale 16-bit PCM and
//! framed as a mono WAV file ready for any playback sink.
//!
//! # Determinism
//!
//! Rendering is a pure function of its inputs. The same request always yields
//! byte-identical output, and the BLAKE3 hash of the PCM data identifies it.
//!
//! # Example
//!
//! ```
//! use tuningfork_backend_audio::render;
//! use tuningfork_spec::{Note, ToneRequest};
//!
//! let request = ToneRequest::new(Note::A4, 0).with_duration(0.5);
//! let result = render(&request).unwrap();
//! assert_eq!(result.frequency, 440.0);
//! assert_eq!(&result.wav.wav_data[0..4], b"RIFF");
//! ```
//!
//! # Crate Structure
//!
//! - [`render()`] - Main entry point for tone requests
//! - [`tone`] - Sine synthesis, peak normalization, and [`encode_tone`]
//! - [`wav`] - Deterministic WAV file writer

pub mod error;
pub mod generate;
pub mod tone;
pub mod wav;

// Re-export main types at crate root
pub use error::{AudioError, AudioResult};
pub use generate::{render, RenderResult};
pub use tone::{encode_tone, render_tone, ToneParams};
pub use wav::WavResult;
