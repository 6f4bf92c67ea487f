//! Rule trait and the individual scanning passes.

use crate::options::ValidatorOptions;
use crate::report::{Diagnostic, Severity};

pub mod comments;
pub mod syntax;
pub mod trailing_comma;

/// A pass over the full source text that reports diagnostics.
///
/// Rules are stateless: every call scans `source` from the start and returns
/// its findings in the order they occur in the text.
pub trait Rule: Send + Sync {
    /// Unique identifier (e.g., "comment/block", "trailing-comma").
    fn id(&self) -> &'static str;

    /// Human-readable description.
    fn description(&self) -> &'static str;

    /// Severity of every diagnostic this rule emits.
    fn default_severity(&self) -> Severity;

    /// Run the check, return diagnostics found.
    fn check(&self, source: &str, options: &ValidatorOptions) -> Vec<Diagnostic>;
}

/// All built-in rules, in the order their findings are reported.
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(comments::SingleLineCommentRule),
        Box::new(comments::BlockCommentRule),
        Box::new(trailing_comma::TrailingCommaRule),
        Box::new(syntax::StrictParseRule),
    ]
}
