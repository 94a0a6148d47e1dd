//! Reading rendered files back with `hound`, an independent WAV decoder.

use std::io::Cursor;
use std::path::Path;

/// A decoded mono 16-bit WAV file.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedWav {
    /// Header fields as the decoder read them.
    pub spec: hound::WavSpec,
    /// Samples as signed 16-bit integers.
    pub samples: Vec<i16>,
}

impl DecodedWav {
    /// Largest absolute sample value.
    pub fn peak(&self) -> u16 {
        self.samples
            .iter()
            .map(|s| s.unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    /// Length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.spec.sample_rate as f64
    }
}

/// Decodes an in-memory WAV file.
pub fn read_wav(bytes: &[u8]) -> Result<DecodedWav, hound::Error> {
    let reader = hound::WavReader::new(Cursor::new(bytes))?;
    let spec = reader.spec();
    let samples = reader.into_samples::<i16>().collect::<Result<_, _>>()?;
    Ok(DecodedWav { spec, samples })
}

/// Decodes a WAV file on disk.
pub fn read_wav_file(path: &Path) -> Result<DecodedWav, hound::Error> {
    let bytes = std::fs::read(path)?;
    read_wav(&bytes)
}
