//! Rules command implementation
//!
//! Lists the rules the validator runs.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;
use strictjson_lint::{RuleRegistry, Severity};

use super::json_output::RulesOutput;

/// Run the rules command
pub fn run(json_output: bool) -> Result<ExitCode> {
    let rules = RuleRegistry::default_rules().rule_metadata();

    if json_output {
        let json = serde_json::to_string_pretty(&RulesOutput { rules })
            .context("Failed to serialize output")?;
        println!("{}", json);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Rules (in reporting order):".cyan().bold());
    for rule in &rules {
        let severity = match rule.severity {
            Severity::Error => "error".red(),
            Severity::Warning => "warning".yellow(),
        };
        println!("  {:<22} {:<8} {}", rule.id, severity, rule.description.dimmed());
    }

    Ok(ExitCode::SUCCESS)
}
