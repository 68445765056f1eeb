mod expand;
mod segment;
mod syntax;
mod token;

pub use expand::expand_vars;
pub use segment::split_segments;
pub use syntax::{check_syntax, SyntaxError};
pub use token::split_words;

/// Control operator following a command's text.
///
/// `AndThen` and `OrElse` are recognized greedily as two-character operators;
/// a doubled single-character operator (`;;`) is a syntax error, not a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Separator {
    /// `;` - run unconditionally.
    Sequential,
    /// `&` - accepted syntactically, runs like `;` (no job control).
    Background,
    /// `&&` - run only when the previous status is 0.
    AndThen,
    /// `||` - run only when the previous status is non-zero.
    OrElse,
    /// Last segment of the line.
    None,
}

/// One command's text plus the separator that follows it.
///
/// Segments are built fresh per input line and discarded after it runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub sep: Separator,
}

pub(crate) fn is_separator_char(c: char) -> bool {
    matches!(c, ';' | '&' | '|')
}

/// Truncates the line at a comment marker.
///
/// A `#` opens a comment only at the start of the line or after whitespace;
/// embedded in a word it stays literal.
pub fn strip_comment(line: &str) -> &str {
    let mut prev: Option<char> = None;
    for (i, c) in line.char_indices() {
        if c == '#' && prev.map_or(true, |p| p.is_whitespace()) {
            return &line[..i];
        }
        prev = Some(c);
    }
    line
}
