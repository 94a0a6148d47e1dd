//! Tuningfork End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the full tone flow:
//!
//! - Rendering: request -> WAV file on disk
//! - Decoding: WAV files read back with an independent reader
//! - **Determinism**: byte-identical output across runs
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p tuningfork-tests
//! ```

pub mod determinism;
pub mod harness;
pub mod wav_check;

// Re-export commonly used items
pub use determinism::{verify_determinism, DeterminismResult, DiffInfo};
pub use harness::TestHarness;
pub use wav_check::{read_wav, DecodedWav};
