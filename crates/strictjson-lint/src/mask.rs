//! String-literal masking.
//!
//! Replaces the contents of every `"..."` literal with spaces so that pattern
//! searches cannot see comment openers, commas or brackets inside string
//! values. The masked text has exactly the byte length of the input, so any
//! offset found in it is also a valid offset into the original.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Outside,
    Inside,
    AfterEscape,
    LineComment,
    BlockComment,
}

/// Masks the contents of all string literals in `text`.
///
/// Quote characters are kept; everything between them becomes ASCII spaces
/// (one per byte). `\"` inside a string does not close it. A newline always
/// returns the scanner to the outside state, since strict JSON strings cannot
/// span lines, so an unterminated quote only masks the rest of its own line.
pub fn mask_strings(text: &str) -> String {
    mask(text, false)
}

/// Like [`mask_strings`], but `//` and `/* */` comments outside strings are
/// copied through unchanged, so a quote inside a comment does not open a
/// string.
///
/// Used when whole-text rules scan masked text: the comments themselves must
/// stay visible and intact.
pub fn mask_strings_outside_comments(text: &str) -> String {
    mask(text, true)
}

fn mask(text: &str, skip_comments: bool) -> String {
    let mut masked = String::with_capacity(text.len());
    let mut state = State::Outside;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\n' {
            if state != State::BlockComment {
                state = State::Outside;
            }
            masked.push(ch);
            continue;
        }

        match state {
            State::Outside => {
                masked.push(ch);
                if ch == '"' {
                    state = State::Inside;
                } else if skip_comments && ch == '/' {
                    state = match chars.peek() {
                        Some('/') => State::LineComment,
                        Some('*') => State::BlockComment,
                        _ => continue,
                    };
                    // the opener's second character is part of the comment
                    if let Some(next) = chars.next() {
                        masked.push(next);
                    }
                }
            }
            State::Inside => match ch {
                '"' => {
                    state = State::Outside;
                    masked.push(ch);
                }
                '\\' => {
                    state = State::AfterEscape;
                    masked.push(' ');
                }
                _ => push_blank(&mut masked, ch),
            },
            State::AfterEscape => {
                state = State::Inside;
                push_blank(&mut masked, ch);
            }
            State::LineComment => masked.push(ch),
            State::BlockComment => {
                masked.push(ch);
                if ch == '*' && chars.peek() == Some(&'/') {
                    state = State::Outside;
                    if let Some(next) = chars.next() {
                        masked.push(next);
                    }
                }
            }
        }
    }

    masked
}

fn push_blank(masked: &mut String, ch: char) {
    for _ in 0..ch.len_utf8() {
        masked.push(' ');
    }
}
