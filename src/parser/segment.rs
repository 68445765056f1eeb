use super::{Segment, Separator};

/// Splits a validated line into ordered segments.
///
/// One left-to-right scan; `&&` and `||` are matched before the
/// single-character operators. Text is trimmed at the segment edges but
/// internal whitespace is preserved. Blank stretches (a trailing `ls ;`)
/// produce no segment. Expects a line the syntax validator has accepted;
/// this function never fails.
pub fn split_segments(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut chars = line.chars().peekable();

    let mut push = |text: &mut String, sep: Separator| {
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            segments.push(Segment {
                text: trimmed.to_string(),
                sep,
            });
        }
        text.clear();
    };

    while let Some(c) = chars.next() {
        match c {
            '&' if chars.peek() == Some(&'&') => {
                chars.next();
                push(&mut text, Separator::AndThen);
            }
            '|' if chars.peek() == Some(&'|') => {
                chars.next();
                push(&mut text, Separator::OrElse);
            }
            ';' => push(&mut text, Separator::Sequential),
            '&' => push(&mut text, Separator::Background),
            _ => text.push(c),
        }
    }
    push(&mut text, Separator::None);

    segments
}
