//! Trailing comma detection.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use crate::mask::mask_strings_outside_comments;
use crate::options::ValidatorOptions;
use crate::position::Position;
use crate::report::{Diagnostic, DiagnosticKind, Severity};
use crate::rules::Rule;

pub const MESSAGE: &str = "Trailing comma detected - this may cause issues in strict JSON parsers";

static TRAILING_COMMA_REGEX: OnceLock<Regex> = OnceLock::new();

fn trailing_comma_regex() -> &'static Regex {
    TRAILING_COMMA_REGEX.get_or_init(|| Regex::new(r",\s*[}\]]").expect("invalid regex pattern"))
}

/// Reports commas followed only by whitespace before `}` or `]`.
///
/// Warning only: lenient parsers accept these, and the strict parse rule
/// reports the resulting syntax error on its own.
pub struct TrailingCommaRule;

impl Rule for TrailingCommaRule {
    fn id(&self) -> &'static str {
        "trailing-comma"
    }

    fn description(&self) -> &'static str {
        "Detects commas directly before a closing } or ]"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, source: &str, options: &ValidatorOptions) -> Vec<Diagnostic> {
        let haystack = if options.masks_all_rules() {
            Cow::Owned(mask_strings_outside_comments(source))
        } else {
            Cow::Borrowed(source)
        };

        trailing_comma_regex()
            .find_iter(&haystack)
            .map(|m| {
                let position = Position::from_offset(source, m.start());
                Diagnostic::new(DiagnosticKind::TrailingComma, Severity::Warning, MESSAGE)
                    .with_line(position.line)
                    .with_column(position.column)
                    .with_text(&source[m.range()])
            })
            .collect()
    }
}
