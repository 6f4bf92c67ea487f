//! CLI argument definitions for the strictjson command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

/// strictjson - check that JSON files really are strict JSON
#[derive(Parser)]
#[command(name = "strictjson")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Validate JSON files for comments, trailing commas and syntax errors
    Validate {
        /// JSON files, or directories to scan recursively for .json files
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,

        /// Treat warnings as errors (fail if any warnings)
        #[arg(long)]
        strict: bool,

        /// Ignore string contents in every rule, not only for // comments
        #[arg(long)]
        mask_strings: bool,

        /// Disable specific rules (can be repeated)
        #[arg(long = "disable-rule", value_name = "RULE_ID")]
        disable_rules: Vec<String>,

        /// Path to a JSON config file
        #[arg(short, long)]
        config: Option<String>,
    },

    /// List the rules and their severities
    Rules {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}
