//! Strict parse check backed by `serde_json`.

use serde::de::{Deserialize, IgnoredAny};

use crate::options::ValidatorOptions;
use crate::report::{Coordinate, Diagnostic, DiagnosticKind, Severity};
use crate::rules::Rule;

pub const MESSAGE_PREFIX: &str = "JSON syntax error: ";

/// Parses the whole text as strict JSON and reports the first failure.
///
/// Runs on the raw text: comments are never stripped first, so any comment
/// finding is always accompanied by a syntax error.
pub struct StrictParseRule;

impl Rule for StrictParseRule {
    fn id(&self) -> &'static str {
        "syntax/strict-parse"
    }

    fn description(&self) -> &'static str {
        "Parses the document with a standards-strict JSON parser"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, source: &str, _options: &ValidatorOptions) -> Vec<Diagnostic> {
        match parse_strict(source) {
            Ok(()) => Vec::new(),
            Err(e) => vec![syntax_diagnostic(&e)],
        }
    }
}

/// Checks `source` against the JSON grammar without building a value.
///
/// Numbers are not range-checked (`1e400` is grammatical) and nesting depth
/// is unbounded; deep input grows the stack on the heap instead of
/// overflowing it.
fn parse_strict(source: &str) -> Result<(), serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_str(source);
    deserializer.disable_recursion_limit();
    IgnoredAny::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()
}

fn syntax_diagnostic(error: &serde_json::Error) -> Diagnostic {
    let (line, column) = if error.line() == 0 {
        (Coordinate::Unknown, Coordinate::Unknown)
    } else {
        // serde_json reports column 0 when the error sits at the start of a line
        (
            Coordinate::Known(error.line()),
            Coordinate::Known(error.column().max(1)),
        )
    };

    Diagnostic::new(
        DiagnosticKind::Syntax,
        Severity::Error,
        format!("{}{}", MESSAGE_PREFIX, parser_message(error)),
    )
    .with_coordinates(line, column)
}

/// The parser's message without the " at line L column C" suffix, which is
/// carried separately in the diagnostic's line and column.
fn parser_message(error: &serde_json::Error) -> String {
    let full = error.to_string();
    let suffix = format!(" at line {} column {}", error.line(), error.column());
    full.strip_suffix(&suffix).unwrap_or(&full).to_string()
}
