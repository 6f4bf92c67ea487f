//! Diagnostic and validation result types for structured output.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::source::SourceError;

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Accepted by lenient parsers but likely to break strict ones.
    Warning,
    /// The file is not strict JSON.
    Error,
}

impl Severity {
    /// Returns the string representation used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What kind of problem a diagnostic describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// A `//` or `/* */` comment outside a string literal.
    Comment,
    /// A comma directly before a closing `}` or `]`.
    TrailingComma,
    /// The strict parser rejected the document.
    Syntax,
    /// The input could not be read at all.
    FileError,
}

impl DiagnosticKind {
    /// Returns the string representation used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::Comment => "comment",
            DiagnosticKind::TrailingComma => "trailing-comma",
            DiagnosticKind::Syntax => "syntax",
            DiagnosticKind::FileError => "file-error",
        }
    }
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 1-based line or column number, or `unknown` when the source of the
/// diagnostic could not tell.
///
/// Serialized as a JSON integer or as the string `"unknown"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coordinate {
    Known(usize),
    Unknown,
}

impl Coordinate {
    /// Returns the number if known.
    pub fn get(&self) -> Option<usize> {
        match self {
            Coordinate::Known(n) => Some(*n),
            Coordinate::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Coordinate::Known(_))
    }
}

impl From<usize> for Coordinate {
    fn from(n: usize) -> Self {
        Coordinate::Known(n)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Coordinate::Known(n) => write!(f, "{}", n),
            Coordinate::Unknown => f.write_str("unknown"),
        }
    }
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Coordinate::Known(n) => serializer.serialize_u64(*n as u64),
            Coordinate::Unknown => serializer.serialize_str("unknown"),
        }
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(usize),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Coordinate::Known(n)),
            Raw::Text(s) if s == "unknown" => Ok(Coordinate::Unknown),
            Raw::Text(s) => Err(serde::de::Error::custom(format!(
                "expected a line/column number or \"unknown\", got \"{}\"",
                s
            ))),
        }
    }
}

/// A single reported finding.
///
/// Built by exactly one rule and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Kind of problem.
    pub kind: DiagnosticKind,

    /// Severity level.
    pub severity: Severity,

    /// Human-readable description of the issue.
    pub message: String,

    /// 1-based line number.
    pub line: Coordinate,

    /// 1-based column number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<Coordinate>,

    /// The offending source snippet, trimmed of surrounding whitespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Diagnostic {
    /// Creates a diagnostic with an unknown location.
    pub fn new(kind: DiagnosticKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
            line: Coordinate::Unknown,
            column: None,
            text: None,
        }
    }

    /// Creates the single diagnostic reported for unreadable input.
    pub fn file_error(error: &SourceError) -> Self {
        Self::new(DiagnosticKind::FileError, Severity::Error, error.to_string())
    }

    /// Builder method to set the line.
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Coordinate::Known(line);
        self
    }

    /// Builder method to set the column.
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(Coordinate::Known(column));
        self
    }

    /// Builder method to set line and column, either of which may be unknown.
    pub fn with_coordinates(mut self, line: Coordinate, column: Coordinate) -> Self {
        self.line = line;
        self.column = Some(column);
        self
    }

    /// Builder method to set the offending snippet. The snippet is trimmed.
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.trim().to_string());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Aggregate outcome of validating one input.
///
/// `is_valid` is true iff `errors` is empty; warnings never make a file
/// invalid. The only ways to build one are [`ValidationResult::from_diagnostics`]
/// and [`ValidationResult::file_error`], which keeps that invariant intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl ValidationResult {
    /// Partitions diagnostics by severity, preserving the order in which
    /// they were produced.
    pub fn from_diagnostics(diagnostics: impl IntoIterator<Item = Diagnostic>) -> Self {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            diagnostics.into_iter().partition(Diagnostic::is_error);

        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Result for input that could not be read. No rule is run.
    pub fn file_error(error: &SourceError) -> Self {
        Self::from_diagnostics([Diagnostic::file_error(error)])
    }

    /// True if no error-level diagnostics were found.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Returns true if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns the total diagnostic count.
    pub fn total_issues(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Iterates over all diagnostics, errors first.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.errors.iter().chain(self.warnings.iter())
    }
}
