use super::is_separator_char;

/// A malformed separator sequence, located before anything executes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxError {
    /// 1-based column of the offending character.
    pub column: usize,
    /// The offending operator text, one or two characters.
    pub token: String,
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Syntax error: \"{}\" unexpected", self.token)
    }
}

impl std::error::Error for SyntaxError {}

/// Validates separator placement over the whole raw line.
///
/// Runs once before segmentation because validity depends on adjacency
/// across segment boundaries. Rejected lines execute nothing. Errors:
/// a separator as the first non-whitespace character, two operators with
/// no command between them (`;;`, `;&`, `&&&`, `ls ; ;`), and a lone `|`
/// (pipes are not supported).
pub fn check_syntax(line: &str) -> Result<(), SyntaxError> {
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;
    let mut word_seen = false;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
            continue;
        }
        if !is_separator_char(c) {
            word_seen = true;
            i += 1;
            continue;
        }

        if !word_seen {
            // Include the previous operator character when they touch, so
            // `;;` reports the pair rather than a bare `;`.
            let token = match i.checked_sub(1).map(|p| chars[p]) {
                Some(p) if is_separator_char(p) => format!("{}{}", p, c),
                _ => c.to_string(),
            };
            return Err(SyntaxError { column: i + 1, token });
        }

        let doubled = chars.get(i + 1) == Some(&c);
        if c == '|' && !doubled {
            return Err(SyntaxError {
                column: i + 1,
                token: "|".to_string(),
            });
        }

        i += if (c == '&' || c == '|') && doubled { 2 } else { 1 };
        word_seen = false;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_accepted() {
        assert!(check_syntax("ls -la").is_ok());
        assert!(check_syntax("echo a && echo b || echo c").is_ok());
        assert!(check_syntax("true ; false & echo done").is_ok());
    }

    #[test]
    fn test_leading_separator_rejected() {
        let err = check_syntax(";ls").unwrap_err();
        assert_eq!(err.column, 1);
        assert_eq!(err.token, ";");

        let err = check_syntax("   && ls").unwrap_err();
        assert_eq!(err.column, 4);
    }

    #[test]
    fn test_doubled_separator_rejected() {
        let err = check_syntax("ls ;; pwd").unwrap_err();
        assert_eq!(err.token, ";;");
        assert_eq!(err.column, 5);

        assert!(check_syntax("ls ;& pwd").is_err());
        assert!(check_syntax("ls &; pwd").is_err());
        assert!(check_syntax("ls &&& pwd").is_err());
    }

    #[test]
    fn test_spaced_empty_segment_rejected() {
        assert!(check_syntax("ls ; ; pwd").is_err());
        assert!(check_syntax("ls && || pwd").is_err());
    }

    #[test]
    fn test_trailing_single_separator_accepted() {
        assert!(check_syntax("ls ;").is_ok());
        assert!(check_syntax("ls &").is_ok());
    }

    #[test]
    fn test_trailing_dangling_pair_rejected() {
        assert!(check_syntax("ls ; ;").is_err());
    }

    #[test]
    fn test_lone_pipe_rejected() {
        let err = check_syntax("ls | grep x").unwrap_err();
        assert_eq!(err.token, "|");
        assert_eq!(err.column, 4);
    }

    #[test]
    fn test_error_message_shape() {
        let err = check_syntax(";ls").unwrap_err();
        assert_eq!(err.to_string(), "Syntax error: \";\" unexpected");
    }
}
