//! Test harness for running CLI commands against a scratch directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tempfile::TempDir;

use tuningfork_cli::commands;
use tuningfork_cli::input::ToneOptions;

/// A scratch directory plus helpers that drive the CLI commands in-process.
pub struct TestHarness {
    /// Working directory for test outputs.
    pub work_dir: TempDir,
}

impl TestHarness {
    /// Create a new test harness.
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
        }
    }

    /// Get the working directory path.
    pub fn path(&self) -> &Path {
        self.work_dir.path()
    }

    /// Write a JSON request file and return its path.
    pub fn write_request(&self, name: &str, json: &serde_json::Value) -> PathBuf {
        let path = self.path().join(name);
        let content = serde_json::to_string_pretty(json).expect("Failed to serialize request");
        fs::write(&path, content).expect("Failed to write request file");
        path
    }

    /// Run `render` and return the exit code with the output path.
    pub fn render(
        &self,
        request: Option<&Path>,
        options: &ToneOptions,
        output_name: &str,
        json: bool,
    ) -> (ExitCode, PathBuf) {
        let output = self.path().join(output_name);
        let code = commands::render::run(request, options, &output, json)
            .expect("render command returned an error");
        (code, output)
    }

    /// Run `inspect --json` on a file and return the exit code.
    pub fn inspect(&self, input: &Path) -> ExitCode {
        commands::inspect::run(input, true).expect("inspect command returned an error")
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Inline options for a short tone.
pub fn short_tone(note: &str, cents: i32) -> ToneOptions {
    ToneOptions {
        note: Some(note.to_string()),
        cents: Some(cents),
        duration_seconds: Some(0.2),
        sample_rate: Some(8000),
        ..Default::default()
    }
}
