//! CLI command implementations

pub mod frequency;
pub mod inspect;
pub mod json_output;
pub mod notes;
pub mod render;

mod reporting;
