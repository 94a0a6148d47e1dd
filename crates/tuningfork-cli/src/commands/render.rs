//! Render command implementation
//!
//! Resolves a tone request from a file and/or flags, renders it, and writes
//! the WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use tuningfork_backend_audio::{render, RenderResult};
use tuningfork_spec::CentSteps;

use crate::input::{resolve_request, ToneOptions};

use super::json_output::{
    backend_error_to_json, error_codes, input_error_to_json, validation_error_to_json,
    validation_warning_to_json, JsonError, JsonWarning, RenderDetails, RenderOutput,
};
use super::reporting::{print_json, print_validation_errors, print_validation_warnings};

/// Run the render command
///
/// # Arguments
/// * `request_path` - Optional JSON request file
/// * `options` - Inline tone flags, applied over the file
/// * `output` - Path of the WAV file to write
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(
    request_path: Option<&Path>,
    options: &ToneOptions,
    output: &Path,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(request_path, options, output)
    } else {
        run_human(request_path, options, output)
    }
}

fn run_human(request_path: Option<&Path>, options: &ToneOptions, output: &Path) -> Result<ExitCode> {
    let loaded = resolve_request(request_path, options)?;
    let request = loaded.request;

    if let Some(path) = request_path {
        println!("{} {}", "Request:".dimmed(), path.display());
    }

    let validation = request.validate();
    print_validation_warnings(&validation.warnings);
    if !validation.is_ok() {
        print_validation_errors(&validation.errors);
        return Ok(ExitCode::from(1));
    }

    let result = render(&request)?;
    write_output(output, &result)?;

    println!(
        "{} {} with {} ({:.2} Hz)",
        "ok".green().bold(),
        result.note,
        CentSteps::label(result.cents),
        result.frequency
    );
    println!("  {} {}", "path:".dimmed(), output.display());
    println!(
        "  {} {} @ {} Hz ({:.2} s)",
        "samples:".dimmed(),
        result.wav.num_samples,
        result.wav.sample_rate,
        result.wav.duration_seconds()
    );
    println!("  {} {}", "bytes:".dimmed(), result.wav.wav_data.len());
    println!("  {} {}", "pcm hash:".dimmed(), result.wav.pcm_hash);

    Ok(ExitCode::SUCCESS)
}

fn run_json(request_path: Option<&Path>, options: &ToneOptions, output: &Path) -> Result<ExitCode> {
    let loaded = match resolve_request(request_path, options) {
        Ok(loaded) => loaded,
        Err(e) => {
            print_json(&failure(vec![input_error_to_json(&e)], Vec::new()));
            return Ok(ExitCode::from(1));
        }
    };
    let request = loaded.request;

    let validation = request.validate();
    let warnings = validation
        .warnings
        .iter()
        .map(validation_warning_to_json)
        .collect::<Vec<_>>();
    if !validation.is_ok() {
        let errors = validation
            .errors
            .iter()
            .map(validation_error_to_json)
            .collect();
        print_json(&failure(errors, warnings));
        return Ok(ExitCode::from(1));
    }

    let result = match render(&request) {
        Ok(result) => result,
        Err(e) => {
            print_json(&failure(vec![backend_error_to_json(&e)], warnings));
            return Ok(ExitCode::from(1));
        }
    };

    if let Err(e) = write_output(output, &result) {
        let error = JsonError::new(error_codes::FILE_WRITE, format!("{:#}", e));
        print_json(&failure(vec![error], warnings));
        return Ok(ExitCode::from(1));
    }

    print_json(&RenderOutput {
        success: true,
        result: Some(RenderDetails {
            path: output.display().to_string(),
            note: result.note.name().to_string(),
            cents: result.cents,
            frequency: result.frequency,
            sample_rate: result.wav.sample_rate,
            num_samples: result.wav.num_samples,
            bytes: result.wav.wav_data.len(),
            pcm_hash: result.wav.pcm_hash.clone(),
            source_hash: loaded.source_hash,
        }),
        errors: Vec::new(),
        warnings,
    });
    Ok(ExitCode::SUCCESS)
}

fn failure(errors: Vec<JsonError>, warnings: Vec<JsonWarning>) -> RenderOutput {
    RenderOutput {
        success: false,
        result: None,
        errors,
        warnings,
    }
}

/// Writes the rendered file, creating parent directories as needed.
fn write_output(output: &Path, result: &RenderResult) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(output, &result.wav.wav_data)
        .with_context(|| format!("Failed to write output file: {}", output.display()))
}
