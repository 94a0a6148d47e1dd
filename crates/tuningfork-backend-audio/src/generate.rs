//! Main entry point for tone generation.
//!
//! This module takes a tone request and renders its WAV file deterministically.

use tuningfork_spec::{Note, ToneRequest};

use crate::error::{AudioError, AudioResult};
use crate::tone::{render_tone, ToneParams};
use crate::wav::WavResult;

/// Result of rendering a tone request.
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// Requested note.
    pub note: Note,
    /// Requested cent offset.
    pub cents: i32,
    /// Synthesized frequency in Hz.
    pub frequency: f64,
    /// WAV file data.
    pub wav: WavResult,
}

/// Renders a tone request.
///
/// # Arguments
/// * `request` - Note, cent offset, and synthesis settings
///
/// # Returns
/// Rendered WAV file and the frequency it was synthesized at
pub fn render(request: &ToneRequest) -> AudioResult<RenderResult> {
    if let Err(errors) = request.validate().into_result() {
        let message = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(AudioError::InvalidRequest { message });
    }

    let frequency = request.frequency();
    let params = params_for(request, frequency);
    let wav = render_tone(&params)?;

    Ok(RenderResult {
        note: request.note,
        cents: request.cents,
        frequency,
        wav,
    })
}

fn params_for(request: &ToneRequest, frequency: f64) -> ToneParams {
    ToneParams::new(frequency, request.duration_seconds, request.sample_rate)
        .with_amplitude(request.amplitude)
}
