//! Pure sine tone synthesis and encoding.
//!
//! A tone is rendered in three steps: sample a sine wave over the half-open
//! interval `[0, duration)`, peak-normalize it to full-scale 16-bit PCM, and
//! frame it as a mono WAV file.

use std::f64::consts::TAU;

use crate::error::{AudioError, AudioResult};
use crate::wav::{WavResult, HEADER_SIZE};

/// Largest 16-bit sample magnitude produced by normalization.
pub const FULL_SCALE: f64 = 32767.0;

/// Peaks at or below this fraction of the synthesis amplitude are treated as
/// silence.
///
/// Keeps rounding residue (e.g. a tone sampled exactly on its zero crossings)
/// from being scaled up to full volume.
pub const SILENCE_FLOOR: f64 = 1e-9;

/// Default synthesis amplitude.
pub const DEFAULT_AMPLITUDE: f64 = 0.5;

/// Most samples whose byte count still fits the 32-bit RIFF size field.
pub const MAX_SAMPLES: u64 = (u32::MAX as u64 - (HEADER_SIZE as u64 - 8)) / 2;

/// Parameters of a single sine tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneParams {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Length in seconds.
    pub duration_seconds: f64,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Amplitude in [0, 1] before normalization.
    pub amplitude: f64,
}

impl ToneParams {
    /// Creates tone parameters with the default amplitude.
    pub fn new(frequency: f64, duration_seconds: f64, sample_rate: u32) -> Self {
        Self {
            frequency,
            duration_seconds,
            sample_rate,
            amplitude: DEFAULT_AMPLITUDE,
        }
    }

    /// Sets the amplitude.
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Rejects non-positive or non-finite frequency and duration, a zero
    /// sample rate, amplitudes outside [0, 1], and tones too long for WAV.
    pub fn validate(&self) -> AudioResult<()> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(AudioError::InvalidFrequency {
                freq: self.frequency,
            });
        }
        if !self.duration_seconds.is_finite() || self.duration_seconds <= 0.0 {
            return Err(AudioError::InvalidDuration {
                duration: self.duration_seconds,
            });
        }
        if self.sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        if !self.amplitude.is_finite() || !(0.0..=1.0).contains(&self.amplitude) {
            return Err(AudioError::InvalidAmplitude {
                amplitude: self.amplitude,
            });
        }

        let num_samples = self.sample_count();
        if num_samples > MAX_SAMPLES {
            return Err(AudioError::TooLong { num_samples });
        }
        Ok(())
    }

    /// `floor(duration_seconds * sample_rate)`.
    pub fn num_samples(&self) -> usize {
        self.sample_count() as usize
    }

    fn sample_count(&self) -> u64 {
        // Saturating float-to-int cast; validate() bounds the result.
        (self.duration_seconds * self.sample_rate as f64).floor() as u64
    }
}

/// Samples `amplitude * sin(2 * pi * frequency * t)` at `n` evenly spaced
/// times over `[0, duration)`.
///
/// The endpoint is excluded so back-to-back renders join without a repeated
/// sample. Parameters are not validated here.
pub fn synthesize_sine(params: &ToneParams) -> Vec<f64> {
    let num_samples = params.num_samples();
    if num_samples == 0 {
        return Vec::new();
    }

    let step = params.duration_seconds / num_samples as f64;
    (0..num_samples)
        .map(|i| {
            let t = i as f64 * step;
            params.amplitude * (TAU * params.frequency * t).sin()
        })
        .collect()
}

/// Scales samples so the largest magnitude maps to [`FULL_SCALE`] and rounds
/// to 16-bit integers.
///
/// `amplitude` is the amplitude the samples were synthesized at. A zero
/// amplitude, or a peak not exceeding `amplitude * SILENCE_FLOOR`, yields all
/// zeros.
pub fn peak_normalize(samples: &[f64], amplitude: f64) -> Vec<i16> {
    let peak = samples.iter().fold(0.0_f64, |max, s| max.max(s.abs()));
    if amplitude == 0.0 || peak <= amplitude.abs() * SILENCE_FLOOR {
        return vec![0; samples.len()];
    }

    let gain = FULL_SCALE / peak;
    samples
        .iter()
        .map(|&s| (s * gain).round().clamp(-FULL_SCALE, FULL_SCALE) as i16)
        .collect()
}

/// Renders a tone into a WAV result with its PCM hash and statistics.
pub fn render_tone(params: &ToneParams) -> AudioResult<WavResult> {
    params.validate()?;
    let samples = synthesize_sine(params);
    let pcm = peak_normalize(&samples, params.amplitude);
    Ok(WavResult::from_pcm16(&pcm, params.sample_rate)?)
}

/// Synthesizes a sine tone and returns it as a complete mono 16-bit WAV file.
///
/// The output is `44 + 2 * floor(duration_seconds * sample_rate)` bytes long.
///
/// # Example
/// ```
/// use tuningfork_backend_audio::encode_tone;
///
/// let wav = encode_tone(440.0, 1.0, 8000, 0.5).unwrap();
/// assert_eq!(wav.len(), 16044);
/// assert!(encode_tone(0.0, 1.0, 8000, 0.5).is_err());
/// ```
pub fn encode_tone(
    frequency: f64,
    duration_seconds: f64,
    sample_rate: u32,
    amplitude: f64,
) -> AudioResult<Vec<u8>> {
    let params = ToneParams::new(frequency, duration_seconds, sample_rate).with_amplitude(amplitude);
    render_tone(&params).map(WavResult::into_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_at(wav: &[u8], index: usize) -> i16 {
        let offset = HEADER_SIZE + index * 2;
        i16::from_le_bytes([wav[offset], wav[offset + 1]])
    }

    #[test]
    fn test_sample_count_truncates() {
        assert_eq!(ToneParams::new(440.0, 1.0, 8000).num_samples(), 8000);
        assert_eq!(ToneParams::new(440.0, 0.00099, 8000).num_samples(), 7);
        assert_eq!(ToneParams::new(440.0, 6.0, 44100).num_samples(), 264600);
    }

    #[test]
    fn test_synthesize_starts_at_zero_and_stays_in_amplitude() {
        let params = ToneParams::new(440.0, 0.1, 8000).with_amplitude(0.5);
        let samples = synthesize_sine(&params);
        assert_eq!(samples.len(), 800);
        assert_eq!(samples[0], 0.0);
        assert!(samples.iter().all(|s| s.abs() <= 0.5));
    }

    #[test]
    fn test_synthesize_empty_when_shorter_than_one_sample() {
        let params = ToneParams::new(440.0, 0.0001, 8000);
        assert!(synthesize_sine(&params).is_empty());
    }

    #[test]
    fn test_peak_normalize_full_scale() {
        let pcm = peak_normalize(&[0.0, 0.25, -0.5, 0.125], 0.5);
        assert_eq!(pcm, vec![0, 16384, -32767, 8192]);
    }

    #[test]
    fn test_peak_normalize_silence() {
        assert_eq!(peak_normalize(&[0.0; 5], 0.5), vec![0; 5]);
        assert_eq!(peak_normalize(&[1e-13, -1e-13], 0.5), vec![0, 0]);
        assert_eq!(peak_normalize(&[1e-13, -1e-13], 0.0), vec![0, 0]);
        assert!(peak_normalize(&[], 0.5).is_empty());
    }

    #[test]
    fn test_amplitude_does_not_change_loudness() {
        let quiet = render_tone(&ToneParams::new(440.0, 0.05, 8000).with_amplitude(0.1)).unwrap();
        let loud = render_tone(&ToneParams::new(440.0, 0.05, 8000).with_amplitude(1.0)).unwrap();
        assert_eq!(quiet.peak, 32767);
        assert_eq!(loud.peak, 32767);
    }

    #[test]
    fn test_peak_normalize_floor_follows_amplitude() {
        let pcm = peak_normalize(&[0.0, 1e-10, -2.5e-11], 1e-10);
        assert_eq!(pcm, vec![0, 32767, -8192]);
    }

    #[test]
    fn test_tiny_amplitude_is_full_scale() {
        let result = render_tone(&ToneParams::new(440.0, 0.01, 8000).with_amplitude(1e-10)).unwrap();
        assert_eq!(result.peak, 32767);

        let wav = encode_tone(440.0, 0.01, 8000, 1e-10).unwrap();
        let peak = (0..80).map(|i| sample_at(&wav, i).unsigned_abs()).max();
        assert_eq!(peak, Some(32767));
    }

    #[test]
    fn test_zero_amplitude_is_silent() {
        let wav = encode_tone(440.0, 0.01, 8000, 0.0).unwrap();
        assert_eq!(wav.len(), HEADER_SIZE + 160);
        assert!(wav[HEADER_SIZE..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_tone_on_zero_crossings_is_silent() {
        // Every sample lands on a multiple of the period.
        let wav = encode_tone(8000.0, 0.01, 8000, 0.5).unwrap();
        assert!(wav[HEADER_SIZE..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_encode_a4_reference_scenario() {
        let wav = encode_tone(440.0, 1.0, 8000, 0.5).unwrap();
        assert_eq!(wav.len(), 16044);
        assert_eq!(sample_at(&wav, 0), 0);

        for index in [1, 5, 50, 2000] {
            let t = index as f64 / 8000.0;
            let expected = (TAU * 440.0 * t).sin() * FULL_SCALE;
            let actual = sample_at(&wav, index) as f64;
            assert!(
                (actual - expected).abs() <= 1.0,
                "sample {}: {} vs {}",
                index,
                actual,
                expected
            );
        }
        // Sample 50 is 2.75 periods in, at the trough.
        assert_eq!(sample_at(&wav, 50), -32767);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(
            encode_tone(0.0, 1.0, 8000, 0.5),
            Err(AudioError::InvalidFrequency { .. })
        ));
        assert!(matches!(
            encode_tone(-440.0, 1.0, 8000, 0.5),
            Err(AudioError::InvalidFrequency { .. })
        ));
        assert!(matches!(
            encode_tone(440.0, -1.0, 8000, 0.5),
            Err(AudioError::InvalidDuration { .. })
        ));
        assert!(matches!(
            encode_tone(440.0, 0.0, 8000, 0.5),
            Err(AudioError::InvalidDuration { .. })
        ));
        assert!(matches!(
            encode_tone(440.0, 1.0, 0, 0.5),
            Err(AudioError::InvalidSampleRate { .. })
        ));
        assert!(matches!(
            encode_tone(440.0, 1.0, 8000, 1.5),
            Err(AudioError::InvalidAmplitude { .. })
        ));
        assert!(matches!(
            encode_tone(f64::NAN, 1.0, 8000, 0.5),
            Err(AudioError::InvalidFrequency { .. })
        ));
    }

    #[test]
    fn test_too_long_rejected() {
        let params = ToneParams::new(440.0, 1.0e6, 192_000);
        assert!(matches!(params.validate(), Err(AudioError::TooLong { .. })));
    }

    #[test]
    fn test_deterministic() {
        let a = encode_tone(261.63, 0.2, 22050, 0.5).unwrap();
        let b = encode_tone(261.63, 0.2, 22050, 0.5).unwrap();
        assert_eq!(a, b);
    }
}
