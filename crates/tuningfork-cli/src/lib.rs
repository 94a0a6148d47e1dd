//! Tuningfork CLI library.
//!
//! This crate provides the command implementations behind the `tuningfork`
//! binary: listing notes and their fine-tuned frequencies, rendering a
//! reference tone to a WAV file, and inspecting rendered files.

pub mod commands;
pub mod input;
