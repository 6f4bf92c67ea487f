//! Strict JSON lint engine.
//!
//! Checks files that are meant to be strict JSON for comments, trailing
//! commas and syntax errors, reporting each finding with its line and column.
//! String literals are masked before searching for `//`, so values such as
//! `"https://example.com"` are not mistaken for comments.
//!
//! # Example
//!
//! ```
//! use strictjson_lint::{validate_str, DiagnosticKind};
//!
//! let result = validate_str("{\"a\": 1} // trailing");
//!
//! assert!(!result.is_valid());
//! assert_eq!(result.errors()[0].kind, DiagnosticKind::Comment);
//! ```

pub mod mask;
pub mod options;
pub mod position;
pub mod registry;
pub mod report;
pub mod rules;
pub mod source;

use std::path::Path;

pub use mask::{mask_strings, mask_strings_outside_comments};
pub use options::{MaskScope, ValidatorOptions};
pub use position::Position;
pub use registry::{RuleMetadata, RuleRegistry};
pub use report::{Coordinate, Diagnostic, DiagnosticKind, Severity, ValidationResult};
pub use rules::Rule;
pub use source::{SourceError, SourceFile};

/// Validates in-memory text with the default rules and options.
pub fn validate_str(source: &str) -> ValidationResult {
    RuleRegistry::default_rules().validate(source)
}

/// Reads and validates a file with the default rules and options.
pub fn validate_file(path: impl AsRef<Path>) -> ValidationResult {
    RuleRegistry::default_rules().validate_file(path.as_ref())
}
