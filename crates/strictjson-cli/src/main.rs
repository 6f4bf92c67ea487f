//! strictjson CLI - checks that files meant to be strict JSON are.
//!
//! Reports comments, trailing commas and parse errors with line and column.

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use strictjson_cli::commands;

mod cli_args;

use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate {
            paths,
            json,
            strict,
            mask_strings,
            disable_rules,
            config,
        } => commands::validate::run(
            &paths,
            json,
            strict,
            mask_strings,
            &disable_rules,
            config.as_deref(),
        ),
        Commands::Rules { json } => commands::rules::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            ExitCode::from(1)
        }
    }
}
