//! Notes command implementation
//!
//! Prints the keyboard: every selectable note with its frequency at each
//! offset of the step set.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use tuningfork_spec::pitch::detuned_frequencies;
use tuningfork_spec::{CentSteps, Note};

use crate::input::parse_steps;

use super::json_output::{input_error_to_json, NoteRow, NotesOutput};
use super::reporting::print_json;

/// Run the notes command
///
/// # Arguments
/// * `steps` - Step preset or comma list to tabulate
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 if the step set is invalid
pub fn run(steps: &str, json_output: bool) -> Result<ExitCode> {
    let steps = match parse_steps(steps) {
        Ok(steps) => steps,
        Err(e) if json_output => {
            print_json(&NotesOutput {
                success: false,
                steps: Vec::new(),
                notes: Vec::new(),
                errors: vec![input_error_to_json(&e)],
            });
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e.into()),
    };
    let output = build_table(&steps);

    if json_output {
        print_json(&output);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Steps:".bold(), steps.to_string().cyan());
    println!();

    let header: Vec<String> = steps
        .iter()
        .map(|c| format!("{:>10}", format_offset(c)))
        .collect();
    println!("  {:<4}{}", "", header.join("").dimmed());

    for row in &output.notes {
        let cells: Vec<String> = row
            .detuned
            .iter()
            .map(|p| format!("{:>10.2}", p.frequency))
            .collect();
        let name = format!("{:<4}", row.note);
        let name = if row.note.contains('#') {
            name.normal()
        } else {
            name.bold()
        };
        println!("  {}{}", name, cells.join(""));
    }

    Ok(ExitCode::SUCCESS)
}

/// Builds one row per note, in keyboard order.
pub fn build_table(steps: &CentSteps) -> NotesOutput {
    let notes = Note::ALL
        .iter()
        .map(|&note| NoteRow {
            note: note.name().to_string(),
            semitone_offset: note.semitone_offset(),
            frequency: note.frequency(),
            detuned: detuned_frequencies(note, steps),
        })
        .collect();

    NotesOutput {
        success: true,
        steps: steps.as_slice().to_vec(),
        notes,
        errors: Vec::new(),
    }
}

fn format_offset(cents: i32) -> String {
    if cents > 0 {
        format!("+{}", cents)
    } else {
        cents.to_string()
    }
}
