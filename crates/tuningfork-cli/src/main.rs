//! Tuningfork CLI - reference tones for singers
//!
//! This binary lists the keyboard frequencies, computes fine-tuned pitches,
//! and renders reference tones to WAV files.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use tuningfork_cli::commands;
use tuningfork_cli::input::ToneOptions;

/// Tuningfork - fine-tuned reference tones
#[derive(Parser)]
#[command(name = "tuningfork")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every note with its frequency at each cent step
    Notes {
        /// Step preset (eighth, quarter, upward) or comma list ("-50,0,50")
        #[arg(long, default_value = "eighth", allow_hyphen_values = true)]
        steps: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the frequency of a note shifted by a cent offset
    Frequency {
        /// Note name (C4 through B4, e.g. "F#4" or "Bb4")
        #[arg(short, long)]
        note: String,

        /// Fine-tuning offset in cents
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        cents: i32,

        /// Step preset or comma list the offset must belong to
        #[arg(long, default_value = "eighth", allow_hyphen_values = true)]
        steps: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render a reference tone to a WAV file
    Render {
        /// Note name (C4 through B4)
        #[arg(short, long, conflicts_with = "request", required_unless_present = "request")]
        note: Option<String>,

        /// JSON request file; other flags override its fields
        #[arg(short, long)]
        request: Option<PathBuf>,

        /// Fine-tuning offset in cents
        #[arg(short, long, allow_hyphen_values = true)]
        cents: Option<i32>,

        /// Step preset or comma list the offset must belong to
        #[arg(long, allow_hyphen_values = true)]
        steps: Option<String>,

        /// Tone length in seconds
        #[arg(short, long)]
        duration: Option<f64>,

        /// Sample rate in Hz
        #[arg(long)]
        sample_rate: Option<u32>,

        /// Synthesis amplitude in [0, 1]
        #[arg(long)]
        amplitude: Option<f64>,

        /// Output WAV file path
        #[arg(short, long)]
        output: PathBuf,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Report the format, length, and PCM hash of a WAV file
    Inspect {
        /// Path to the WAV file
        #[arg(short, long)]
        input: PathBuf,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Notes { steps, json } => commands::notes::run(&steps, json),
        Commands::Frequency {
            note,
            cents,
            steps,
            json,
        } => commands::frequency::run(&note, cents, &steps, json),
        Commands::Render {
            note,
            request,
            cents,
            steps,
            duration,
            sample_rate,
            amplitude,
            output,
            json,
        } => {
            let options = ToneOptions {
                note,
                cents,
                steps,
                duration_seconds: duration,
                sample_rate,
                amplitude,
            };
            commands::render::run(request.as_deref(), &options, &output, json)
        }
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
