//! Frequency command implementation
//!
//! Computes the fine-tuned frequency of one note and prints it the way the
//! tuning page shows it.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use tuningfork_spec::{CentSteps, Note, ToneRequest};

use crate::input::{parse_note, parse_steps};

use super::json_output::{input_error_to_json, validation_error_to_json, FrequencyOutput};
use super::reporting::{print_json, print_validation_errors};

/// Run the frequency command
///
/// # Arguments
/// * `note` - Note name, e.g. "F#4"
/// * `cents` - Fine-tuning offset
/// * `steps` - Step preset or comma list the offset must belong to
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 if the note, steps, or offset is rejected
pub fn run(note: &str, cents: i32, steps: &str, json_output: bool) -> Result<ExitCode> {
    let (note, steps) = match (parse_note(note), parse_steps(steps)) {
        (Ok(note), Ok(steps)) => (note, steps),
        (Err(e), _) | (_, Err(e)) if !json_output => return Err(e.into()),
        (note, steps) => {
            let errors = [note.err(), steps.err()]
                .iter()
                .flatten()
                .map(input_error_to_json)
                .collect();
            print_json(&FrequencyOutput {
                success: false,
                note: None,
                cents,
                frequency: None,
                errors,
            });
            return Ok(ExitCode::from(1));
        }
    };

    let request = ToneRequest::new(note, cents).with_steps(steps);
    let validation = request.validate();
    if !validation.is_ok() {
        if json_output {
            print_json(&FrequencyOutput {
                success: false,
                note: Some(note.name().to_string()),
                cents,
                frequency: None,
                errors: validation
                    .errors
                    .iter()
                    .map(validation_error_to_json)
                    .collect(),
            });
        } else {
            print_validation_errors(&validation.errors);
        }
        return Ok(ExitCode::from(1));
    }

    let frequency = request.frequency();
    if json_output {
        print_json(&FrequencyOutput {
            success: true,
            note: Some(note.name().to_string()),
            cents,
            frequency: Some(frequency),
            errors: Vec::new(),
        });
    } else {
        println!("{}", describe(note, cents, frequency).bold());
    }

    Ok(ExitCode::SUCCESS)
}

/// "The frequency for A4 with +25 cents is 446.40 Hz"
pub fn describe(note: Note, cents: i32, frequency: f64) -> String {
    format!(
        "The frequency for {} with {} is {:.2} Hz",
        note,
        CentSteps::label(cents),
        frequency
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let freq = tuningfork_spec::frequency(0, 25.0);
        assert_eq!(
            describe(Note::A4, 25, freq),
            "The frequency for A4 with +25 cents is 446.40 Hz"
        );
        assert_eq!(
            describe(Note::C4, 0, Note::C4.frequency()),
            "The frequency for C4 with 0 cents is 261.63 Hz"
        );
    }

    #[test]
    fn test_rejected_offset_exits_with_failure() {
        let code = run("A4", 10, "eighth", true).unwrap();
        assert_eq!(code, ExitCode::from(1));
        assert_eq!(run("A4", 10, "-10,0,10", true).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_unknown_note_is_an_error() {
        assert!(run("H4", 0, "eighth", false).is_err());
        assert_eq!(run("H4", 0, "eighth", true).unwrap(), ExitCode::from(1));
    }

    #[test]
    fn test_invalid_steps_is_an_error() {
        let err = run("A4", 0, "sixteenth", false).unwrap_err();
        assert!(err.to_string().starts_with("E003"));
        assert_eq!(run("A4", 0, "sixteenth", true).unwrap(), ExitCode::from(1));
        assert_eq!(run("A4", 0, "0,0", true).unwrap(), ExitCode::from(1));
    }
}
