//! CLI command implementations

pub mod json_output;
pub mod rules;
pub mod validate;

mod reporting;
