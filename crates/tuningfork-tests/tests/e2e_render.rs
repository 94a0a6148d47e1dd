//! End-to-End Render Tests for Tuningfork
//!
//! Tests verify:
//! - Rendered files decode with an independent reader
//! - Sample values follow the sine formula after peak normalization
//! - Request files and flag overrides resolve as documented
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p tuningfork-tests --test e2e_render
//! ```

use std::f64::consts::TAU;
use std::process::ExitCode;

use pretty_assertions::assert_eq;

use tuningfork_backend_audio::{encode_tone, render};
use tuningfork_cli::commands::inspect::inspect_file;
use tuningfork_cli::input::ToneOptions;
use tuningfork_spec::{Note, ToneRequest};
use tuningfork_tests::harness::short_tone;
use tuningfork_tests::wav_check::read_wav_file;
use tuningfork_tests::{read_wav, TestHarness};

// ============================================================================
// Encoder Tests
// ============================================================================

/// The one-second A4 reference tone decodes to a full-scale 440 Hz sine.
#[test]
fn test_a4_reference_tone_decodes() {
    let wav = encode_tone(440.0, 1.0, 8000, 0.5).unwrap();
    assert_eq!(wav.len(), 16044);

    let decoded = read_wav(&wav).unwrap();
    assert_eq!(decoded.spec.channels, 1);
    assert_eq!(decoded.spec.sample_rate, 8000);
    assert_eq!(decoded.spec.bits_per_sample, 16);
    assert_eq!(decoded.spec.sample_format, hound::SampleFormat::Int);
    assert_eq!(decoded.samples.len(), 8000);
    assert_eq!(decoded.samples[0], 0);
    assert_eq!(decoded.peak(), 32767);

    for (i, &sample) in decoded.samples.iter().enumerate() {
        let expected = (TAU * 440.0 * i as f64 / 8000.0).sin() * 32767.0;
        assert!(
            (sample as f64 - expected).abs() <= 1.0,
            "sample {}: {} vs {}",
            i,
            sample,
            expected
        );
    }
}

/// Sub-sample durations produce a header-only file.
#[test]
fn test_duration_below_one_sample() {
    let wav = encode_tone(440.0, 0.0001, 8000, 0.5).unwrap();
    assert_eq!(wav.len(), 44);
    assert!(read_wav(&wav).unwrap().samples.is_empty());
}

/// Every note of the keyboard renders at its own frequency.
#[test]
fn test_every_note_renders() {
    for note in Note::ALL {
        let request = ToneRequest::new(note, 0)
            .with_duration(0.05)
            .with_sample_rate(8000);
        let result = render(&request).unwrap();
        assert_eq!(result.frequency, note.frequency());
        assert!((result.frequency - note.nominal_frequency()).abs() < 0.01);

        let decoded = read_wav(&result.wav.wav_data).unwrap();
        assert_eq!(decoded.samples.len(), 400);
        assert_eq!(decoded.peak(), 32767, "{} should be full scale", note);
    }
}

// ============================================================================
// CLI Render Tests
// ============================================================================

/// `render` writes a file that `inspect` reads back with matching properties.
#[test]
fn test_render_then_inspect() {
    let harness = TestHarness::new();
    let (code, output) = harness.render(None, &short_tone("E4", -25), "e4.wav", false);
    assert_eq!(code, ExitCode::SUCCESS);

    let details = inspect_file(&output).unwrap();
    assert_eq!(details.channels, 1);
    assert_eq!(details.sample_rate, 8000);
    assert_eq!(details.bits_per_sample, 16);
    assert_eq!(details.num_samples, 1600);
    assert_eq!(details.peak, 32767);

    let decoded = read_wav_file(&output).unwrap();
    let pcm: Vec<u8> = decoded
        .samples
        .iter()
        .flat_map(|s| s.to_le_bytes())
        .collect();
    assert_eq!(
        details.pcm_hash,
        Some(blake3::hash(&pcm).to_hex().to_string())
    );
    assert_eq!(harness.inspect(&output), ExitCode::SUCCESS);
}

/// The CLI file matches the library encoder byte for byte.
#[test]
fn test_cli_output_matches_library() {
    let harness = TestHarness::new();
    let (code, output) = harness.render(None, &short_tone("A4", 25), "a4.wav", true);
    assert_eq!(code, ExitCode::SUCCESS);

    let on_disk = std::fs::read(&output).unwrap();
    let frequency = tuningfork_spec::frequency(0, 25.0);
    let expected = encode_tone(frequency, 0.2, 8000, 0.5).unwrap();
    assert_eq!(on_disk, expected);
}

/// A request file supplies the base values; flags replace individual fields.
#[test]
fn test_request_file_with_flag_override() {
    let harness = TestHarness::new();
    let request = harness.write_request(
        "tone.json",
        &serde_json::json!({
            "note": "G#4",
            "cents": 50,
            "steps": [-50, 0, 50],
            "duration_seconds": 0.1,
            "sample_rate": 8000
        }),
    );

    let options = ToneOptions {
        sample_rate: Some(16000),
        ..Default::default()
    };
    let (code, output) = harness.render(Some(&request), &options, "gs4.wav", false);
    assert_eq!(code, ExitCode::SUCCESS);

    let decoded = read_wav_file(&output).unwrap();
    assert_eq!(decoded.spec.sample_rate, 16000);
    assert_eq!(decoded.samples.len(), 1600);
}

/// Offsets outside the step set are rejected before anything is written.
#[test]
fn test_render_rejects_offset_outside_preset() {
    let harness = TestHarness::new();
    let mut options = short_tone("C4", -25);
    options.steps = Some("upward".to_string());

    let (code, output) = harness.render(None, &options, "c4.wav", true);
    assert_eq!(code, ExitCode::from(1));
    assert!(!output.exists());
}

/// A malformed step set is rejected before anything is written.
#[test]
fn test_render_rejects_invalid_steps() {
    let harness = TestHarness::new();
    let mut options = short_tone("A4", 0);
    options.steps = Some("sixteenth".to_string());

    let (code, output) = harness.render(None, &options, "a4.wav", true);
    assert_eq!(code, ExitCode::from(1));
    assert!(!output.exists());
}

/// Invalid request files report failure in JSON mode.
#[test]
fn test_render_rejects_unknown_request_field() {
    let harness = TestHarness::new();
    let request = harness.write_request(
        "bad.json",
        &serde_json::json!({ "note": "A4", "volume": 0.3 }),
    );
    let (code, output) = harness.render(Some(&request), &ToneOptions::default(), "bad.wav", true);
    assert_eq!(code, ExitCode::from(1));
    assert!(!output.exists());
}

/// Inspecting something that is not a WAV file fails cleanly.
#[test]
fn test_inspect_rejects_non_wav() {
    let harness = TestHarness::new();
    let path = harness.path().join("notes.txt");
    std::fs::write(&path, "C4 D4 E4").unwrap();
    assert!(inspect_file(&path).is_err());
    assert_eq!(harness.inspect(&path), ExitCode::from(1));
}
