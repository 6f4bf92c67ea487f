//! Human-readable console output shared by the commands.

use colored::Colorize;
use std::path::Path;
use strictjson_lint::{Coordinate, Diagnostic, ValidationResult};

const RULE_WIDTH: usize = 50;

/// Print the heading shown before each file's results.
pub(crate) fn print_file_header(display_path: &Path) {
    println!("{} {}", "Validating:".cyan().bold(), display_path.display());
    println!("{}", "─".repeat(RULE_WIDTH).dimmed());
}

/// Print the outcome for one file.
pub(crate) fn print_result(result: &ValidationResult) {
    if result.is_valid() {
        println!("{} JSON file is valid", "SUCCESS".green().bold());
    } else {
        println!("{} JSON file validation failed", "FAILED".red().bold());
        println!("\n{}", "Errors:".red().bold());
        for (index, error) in result.errors().iter().enumerate() {
            print_error(index + 1, error);
        }
    }

    if result.has_warnings() {
        println!("\n{}", "Warnings:".yellow().bold());
        for (index, warning) in result.warnings().iter().enumerate() {
            print_warning(index + 1, warning);
        }
    }
}

fn print_error(number: usize, error: &Diagnostic) {
    println!("  {} {}", format!("{}.", number).red(), error.message);
    if let Coordinate::Known(line) = error.line {
        let column = match error.column {
            Some(Coordinate::Known(column)) => format!(", Column {}", column),
            _ => String::new(),
        };
        println!("     {}", format!("Location: Line {}{}", line, column).dimmed());
    }
    print_text(error);
}

fn print_warning(number: usize, warning: &Diagnostic) {
    println!(
        "  {} Line {}: {}",
        format!("{}.", number).yellow(),
        warning.line,
        warning.message
    );
    print_text(warning);
}

fn print_text(diagnostic: &Diagnostic) {
    if let Some(ref text) = diagnostic.text {
        println!("     {}", format!("Text: \"{}\"", text).dimmed());
    }
}

/// Print the totals after a multi-file run.
pub(crate) fn print_summary(total: usize, passed: usize) {
    let failed = total - passed;
    println!("\n{}", "=".repeat(60));
    println!("{}", "Validation Summary".bold());
    println!("  Total:  {}", total);
    println!(
        "  Passed: {}",
        if failed == 0 {
            passed.to_string().green()
        } else {
            passed.to_string().normal()
        }
    );
    println!(
        "  Failed: {}",
        if failed > 0 {
            failed.to_string().red()
        } else {
            failed.to_string().normal()
        }
    );
}
