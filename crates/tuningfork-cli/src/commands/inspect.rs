//! Inspect command implementation
//!
//! Reads a WAV file back with `hound` and reports its format, length, peak,
//! and PCM hash.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::process::ExitCode;

use tuningfork_backend_audio::wav::compute_pcm_hash;

use super::json_output::{error_codes, InspectDetails, InspectOutput, JsonError};
use super::reporting::print_json;

/// Run the inspect command
///
/// # Arguments
/// * `input` - Path to the WAV file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 if the file cannot be read
pub fn run(input: &Path, json_output: bool) -> Result<ExitCode> {
    if json_output {
        let output = match inspect_file(input) {
            Ok(details) => InspectOutput {
                success: true,
                result: Some(details),
                errors: Vec::new(),
            },
            Err(e) => InspectOutput {
                success: false,
                result: None,
                errors: vec![JsonError::new(error_codes::WAV_DECODE, format!("{:#}", e))],
            },
        };
        print_json(&output);
        return Ok(if output.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        });
    }

    let details = inspect_file(input)?;
    println!("{} {}", "WAV:".cyan().bold(), input.display());
    println!("  {} {}", "channels:".dimmed(), details.channels);
    println!("  {} {} Hz", "sample rate:".dimmed(), details.sample_rate);
    println!("  {} {}", "bits:".dimmed(), details.bits_per_sample);
    println!(
        "  {} {} ({:.3} s)",
        "samples:".dimmed(),
        details.num_samples,
        details.duration_seconds
    );
    println!("  {} {}", "peak:".dimmed(), details.peak);
    match &details.pcm_hash {
        Some(hash) => println!("  {} {}", "pcm hash:".dimmed(), hash),
        None => println!("  {} data chunk not found", "!!".yellow()),
    }

    Ok(ExitCode::SUCCESS)
}

/// Reads the file and collects its properties.
pub fn inspect_file(input: &Path) -> Result<InspectDetails> {
    let bytes =
        fs::read(input).with_context(|| format!("Failed to read file: {}", input.display()))?;
    inspect_bytes(&bytes).with_context(|| format!("Failed to decode WAV: {}", input.display()))
}

/// Collects the properties of an in-memory WAV file.
pub fn inspect_bytes(bytes: &[u8]) -> Result<InspectDetails> {
    let reader = hound::WavReader::new(Cursor::new(bytes))?;
    let spec = reader.spec();
    if spec.sample_format != hound::SampleFormat::Int {
        anyhow::bail!(
            "unsupported sample format {:?}: only integer PCM is supported",
            spec.sample_format
        );
    }

    let num_samples = reader.duration();
    let peak = reader
        .into_samples::<i32>()
        .try_fold(0u32, |max, sample| sample.map(|s| max.max(s.unsigned_abs())))?;

    let duration_seconds = if spec.sample_rate == 0 {
        0.0
    } else {
        num_samples as f64 / spec.sample_rate as f64
    };

    Ok(InspectDetails {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_samples,
        duration_seconds,
        peak,
        pcm_hash: compute_pcm_hash(bytes),
    })
}
