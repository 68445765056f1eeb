use crate::core::state::ShellState;

/// Rewrites variable references in a segment's text.
///
/// `$?` becomes the last exit status, `$$` the shell's pid, `$NAME` (a
/// maximal alphanumeric/underscore run) the environment value or the empty
/// string when unset. A bare `$` stays literal. The scan is a single
/// left-to-right pass over the input; replacement text goes straight to the
/// output and is never re-scanned, so expansion cannot loop.
pub fn expand_vars(text: &str, state: &ShellState) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '$' {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        match chars.get(i + 1) {
            Some('?') => {
                out.push_str(&state.status.to_string());
                i += 2;
            }
            Some('$') => {
                out.push_str(&state.pid);
                i += 2;
            }
            Some(c) if c.is_alphanumeric() || *c == '_' => {
                let start = i + 1;
                let mut end = start;
                while end < chars.len() && (chars[end].is_alphanumeric() || chars[end] == '_') {
                    end += 1;
                }
                let name: String = chars[start..end].iter().collect();
                if let Some(value) = state.env.get(&name) {
                    out.push_str(value);
                }
                i = end;
            }
            _ => {
                out.push('$');
                i += 1;
            }
        }
    }

    out
}
