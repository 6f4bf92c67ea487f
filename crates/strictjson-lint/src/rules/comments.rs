//! Comment detection.
//!
//! Single-line comments are searched line by line on string-masked text.
//! Block comments are searched across the whole text, on raw text unless
//! [`MaskScope::AllRules`](crate::options::MaskScope::AllRules) is set, so a
//! `/* */` inside a string value is reported by default.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use crate::mask::{mask_strings, mask_strings_outside_comments};
use crate::options::ValidatorOptions;
use crate::position::Position;
use crate::report::{Diagnostic, DiagnosticKind, Severity};
use crate::rules::Rule;

pub const SINGLE_LINE_MESSAGE: &str = "Single-line comments (//) are not allowed in JSON files";
pub const BLOCK_MESSAGE: &str = "Multi-line comments (/* */) are not allowed in JSON files";

static BLOCK_COMMENT_REGEX: OnceLock<Regex> = OnceLock::new();

fn block_comment_regex() -> &'static Regex {
    BLOCK_COMMENT_REGEX
        .get_or_init(|| Regex::new(r"(?s)/\*.*?\*/").expect("invalid regex pattern"))
}

/// Reports `//` comments outside string literals.
pub struct SingleLineCommentRule;

impl Rule for SingleLineCommentRule {
    fn id(&self) -> &'static str {
        "comment/single-line"
    }

    fn description(&self) -> &'static str {
        "Detects // comments outside string literals"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, source: &str, _options: &ValidatorOptions) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (index, line) in source.split('\n').enumerate() {
            let masked = mask_strings(line);
            let Some(offset) = find_comment_opener(&masked) else {
                continue;
            };

            // Anything that still looks like a URL scheme is assumed to be one.
            if line.contains("http://") || line.contains("https://") {
                continue;
            }

            diagnostics.push(
                Diagnostic::new(DiagnosticKind::Comment, Severity::Error, SINGLE_LINE_MESSAGE)
                    .with_line(index + 1)
                    .with_column(line[..offset].chars().count() + 1)
                    .with_text(line),
            );
        }

        diagnostics
    }
}

/// Byte offset of the first `//` in a masked line that is not preceded by
/// `:` and not followed by optional whitespace and a `"`.
///
/// This is the accepted opener, not the first `//` on the line: in
/// `"a": "x//y", // why` the column points at `// why`.
fn find_comment_opener(masked: &str) -> Option<usize> {
    let bytes = masked.as_bytes();

    (0..bytes.len().saturating_sub(1)).find(|&i| {
        bytes[i] == b'/'
            && bytes[i + 1] == b'/'
            && (i == 0 || bytes[i - 1] != b':')
            && !masked[i + 2..].trim_start().starts_with('"')
    })
}

/// Reports `/* ... */` comments, each ending at the first following `*/`.
pub struct BlockCommentRule;

impl Rule for BlockCommentRule {
    fn id(&self) -> &'static str {
        "comment/block"
    }

    fn description(&self) -> &'static str {
        "Detects /* */ comments, which may span several lines"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, source: &str, options: &ValidatorOptions) -> Vec<Diagnostic> {
        let haystack = if options.masks_all_rules() {
            Cow::Owned(mask_strings_outside_comments(source))
        } else {
            Cow::Borrowed(source)
        };

        // Each match is located at its own scan offset, so repeated identical
        // comments are reported where they actually occur.
        block_comment_regex()
            .find_iter(&haystack)
            .map(|m| {
                let position = Position::from_offset(source, m.start());
                Diagnostic::new(DiagnosticKind::Comment, Severity::Error, BLOCK_MESSAGE)
                    .with_line(position.line)
                    .with_column(position.column)
                    .with_text(&source[m.range()])
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn single(source: &str) -> Vec<Diagnostic> {
        SingleLineCommentRule.check(source, &ValidatorOptions::default())
    }

    fn block(source: &str) -> Vec<Diagnostic> {
        BlockCommentRule.check(source, &ValidatorOptions::default())
    }

    #[test]
    fn test_trailing_line_comment() {
        let found = single(r#"{"a": 1} // trailing"#);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].line.get(), Some(1));
        assert_eq!(found[0].column.and_then(|c| c.get()), Some(10));
        assert_eq!(found[0].text.as_deref(), Some(r#"{"a": 1} // trailing"#));
        assert_eq!(found[0].message, SINGLE_LINE_MESSAGE);
    }

    #[test]
    fn test_url_in_string_is_ignored() {
        assert!(single(r#"{"homepage": "https://example.com"}"#).is_empty());
        assert!(single(r#"{"a": "x//y"}"#).is_empty());
    }

    #[test]
    fn test_url_on_same_line_suppresses() {
        // A real comment next to a URL is skipped, like any other URL line.
        assert!(single(r#"{"u": "http://a.b"} // note"#).is_empty());
    }

    #[test]
    fn test_colon_prefix_is_not_a_comment() {
        assert!(single("{\"a\": x://y}").is_empty());
    }

    #[test]
    fn test_followed_by_quote_is_not_a_comment() {
        assert!(single(r#"// "key""#).is_empty());
        assert!(single(r#"//"key""#).is_empty());
    }

    #[test]
    fn test_escaped_quote_does_not_end_string() {
        let found = single(r#"{"a": "she said \"// no\""}"#);
        assert!(found.is_empty());
    }

    #[test]
    fn test_column_points_at_real_comment() {
        let line = r#"  "a": "x//y", // why"#;
        let found = single(line);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].column.and_then(|c| c.get()), Some(line.find("// why").unwrap() + 1));
    }

    #[test]
    fn test_line_numbers_and_crlf() {
        let found = single("{\r\n  // first\r\n  \"a\": 1\r\n}");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].line.get(), Some(2));
        assert_eq!(found[0].column.and_then(|c| c.get()), Some(3));
        assert_eq!(found[0].text.as_deref(), Some("// first"));
    }

    #[test]
    fn test_block_comment_position() {
        let found = block("/* note */\n{\"a\": 1}");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].line.get(), Some(1));
        assert_eq!(found[0].column.and_then(|c| c.get()), Some(1));
        assert_eq!(found[0].text.as_deref(), Some("/* note */"));
        assert_eq!(found[0].message, BLOCK_MESSAGE);
    }

    #[test]
    fn test_block_comment_spans_lines_and_is_non_greedy() {
        let source = "{\n  /* one\n     two */ \"a\": 1, /* three */\n}";
        let found = block(source);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].text.as_deref(), Some("/* one\n     two */"));
        assert_eq!(found[1].text.as_deref(), Some("/* three */"));
        assert_eq!(found[1].line.get(), Some(3));
    }

    #[test]
    fn test_repeated_block_comments_have_own_positions() {
        let found = block("/* x */\n[1,\n/* x */ 2]");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].line.get(), Some(1));
        assert_eq!(found[1].line.get(), Some(3));
    }

    #[test]
    fn test_unterminated_block_comment_not_reported() {
        assert!(block("{\"a\": 1} /* open").is_empty());
    }

    #[test]
    fn test_block_comment_in_string_depends_on_mask_scope() {
        let source = r#"{"pattern": "/* glob */"}"#;
        assert_eq!(block(source).len(), 1);
        assert!(BlockCommentRule
            .check(source, &ValidatorOptions::mask_all())
            .is_empty());
    }

    #[test]
    fn test_quote_inside_block_comment_with_masking() {
        let source = "/* say \"hi */\n{\"a\": 1}";
        let found = BlockCommentRule.check(source, &ValidatorOptions::mask_all());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text.as_deref(), Some("/* say \"hi */"));
    }

    #[test]
    fn test_masked_block_comments_are_not_merged() {
        let source = "{\n/* it's \"x */ \"a\": 1,\n/* b */ \"c\": 2}";
        let found = BlockCommentRule.check(source, &ValidatorOptions::mask_all());

        let texts: Vec<_> = found.iter().map(|d| d.text.as_deref()).collect();
        assert_eq!(texts, vec![Some("/* it's \"x */"), Some("/* b */")]);
        assert_eq!(found[1].line.get(), Some(3));
        assert_eq!(found[1].column.and_then(|c| c.get()), Some(1));
    }
}
