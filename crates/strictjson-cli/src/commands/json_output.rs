//! JSON output types for machine-readable CLI output.
//!
//! Printed by `--json` on `validate` and `rules` so other tools can consume
//! results without parsing the colored console output.

use serde::Serialize;
use strictjson_lint::{RuleMetadata, ValidationResult};

/// Envelope printed by `strictjson validate --json`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateOutput {
    /// True if every file passed.
    pub success: bool,
    /// One entry per validated file, in input order.
    pub files: Vec<FileReport>,
}

impl ValidateOutput {
    pub fn new(files: Vec<FileReport>, strict: bool) -> Self {
        Self {
            success: files.iter().all(|f| f.passed(strict)),
            files,
        }
    }
}

/// Validation outcome for one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path as given on the command line (or found in a scanned directory).
    pub path: String,
    /// BLAKE3 hash of the file contents (hex), absent if the file was unreadable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
    /// The diagnostics found.
    pub result: ValidationResult,
}

impl FileReport {
    /// Whether the file counts as passing. In strict mode warnings fail too.
    pub fn passed(&self, strict: bool) -> bool {
        self.result.is_valid() && !(strict && self.result.has_warnings())
    }
}

/// Envelope printed by `strictjson rules --json`.
#[derive(Debug, Clone, Serialize)]
pub struct RulesOutput {
    pub rules: Vec<RuleMetadata>,
}
