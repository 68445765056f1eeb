/// Splits expanded text into an argument vector on whitespace runs.
///
/// No quoting or escaping is interpreted; a literal space cannot be embedded
/// in a token. Whitespace-only input yields an empty vector, which the
/// controller treats as nothing to do rather than an error.
pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}
