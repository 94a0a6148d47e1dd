use colored::Colorize;
use serde::Serialize;
use tuningfork_spec::{ValidationError, ValidationWarning};

/// Prints a JSON document to stdout.
pub(crate) fn print_json<T: Serialize>(output: &T) {
    let json =
        serde_json::to_string_pretty(output).expect("output serialization should not fail");
    println!("{}", json);
}

/// Prints validation errors, one per line.
pub(crate) fn print_validation_errors(errors: &[ValidationError]) {
    eprintln!("{}", "Invalid request:".red().bold());
    for error in errors {
        eprintln!("  {} {}", "x".red(), error);
    }
}

/// Prints validation warnings, one per line.
pub(crate) fn print_validation_warnings(warnings: &[ValidationWarning]) {
    for warning in warnings {
        eprintln!("  {} {}", "!!".yellow(), warning);
    }
}
