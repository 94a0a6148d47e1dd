//! Deterministic WAV file writer.
//!
//! This module writes mono 16-bit PCM WAV files with no timestamps or variable
//! metadata, so identical tones produce identical bytes. The hash of the PCM
//! data identifies a rendered tone independently of its header.

mod format;
mod pcm;
mod result;
mod writer;


// Re-export public API
pub use format::{WavFormat, HEADER_SIZE};
pub use pcm::{compute_pcm_hash, decode_pcm16, extract_pcm_data};
pub use result::WavResult;
pub use writer::{pcm16_to_bytes, write_wav, write_wav_to_vec};
