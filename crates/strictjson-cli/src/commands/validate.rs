//! Validate command implementation
//!
//! Checks each input for comments, trailing commas and strict-parse errors.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use strictjson_lint::{RuleRegistry, SourceFile, ValidationResult};

use super::json_output::{FileReport, ValidateOutput};
use super::reporting;
use crate::config::LintConfig;
use crate::input::{collect_inputs, display_path};

/// Run the validate command
///
/// # Arguments
/// * `paths` - Files, or directories to scan for `.json` files
/// * `json_output` - Whether to output machine-readable JSON
/// * `strict` - Whether warnings also fail the run
/// * `mask_strings` - Ignore string contents in every rule
/// * `disable_rules` - Rule IDs to disable
/// * `config_path` - Optional config file
///
/// # Returns
/// Exit code: 0 if every file passed, 1 otherwise
pub fn run(
    paths: &[String],
    json_output: bool,
    strict: bool,
    mask_strings: bool,
    disable_rules: &[String],
    config_path: Option<&str>,
) -> Result<ExitCode> {
    let config = LintConfig::load(config_path)?.with_overrides(mask_strings, disable_rules);
    let registry = config.build_registry()?;
    let files = collect_inputs(paths)?;

    if files.is_empty() {
        if json_output {
            print_json(&ValidateOutput::new(Vec::new(), strict))?;
        } else {
            println!("No JSON files found in: {}", paths.join(", "));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut reports = Vec::with_capacity(files.len());
    for path in &files {
        if !json_output {
            reporting::print_file_header(&display_path(path));
        }

        let report = check_file(&registry, path);

        if !json_output {
            reporting::print_result(&report.result);
            if strict && report.result.is_valid() && report.result.has_warnings() {
                println!(
                    "\n{} warnings are treated as errors (--strict)",
                    "FAILED".red().bold()
                );
            }
            println!();
        }
        reports.push(report);
    }

    let output = ValidateOutput::new(reports, strict);

    if json_output {
        print_json(&output)?;
    } else if output.files.len() > 1 {
        let passed = output.files.iter().filter(|f| f.passed(strict)).count();
        reporting::print_summary(output.files.len(), passed);
    }

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Validate one file. Unreadable files yield a `file-error` result.
pub fn check_file(registry: &RuleRegistry, path: &Path) -> FileReport {
    let (source_hash, result) = match SourceFile::load(path) {
        Ok(source) => (
            Some(blake3::hash(source.text.as_bytes()).to_hex().to_string()),
            registry.validate(&source.text),
        ),
        Err(e) => (None, ValidationResult::file_error(&e)),
    };

    FileReport {
        path: path.to_string_lossy().to_string(),
        source_hash,
        result,
    }
}

fn print_json(output: &ValidateOutput) -> Result<()> {
    let json = serde_json::to_string_pretty(output).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
