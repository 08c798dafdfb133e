use regex::Regex;
use std::sync::LazyLock;

static NON_ALPHABET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z\s]+").expect("valid pattern"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid pattern"));

/// Lowercases, replaces everything outside `a-z` with spaces and collapses
/// whitespace to single spaces.
///
/// ```
/// use term_occurrences::normalize;
///
/// assert_eq!(normalize("\nABC\t?"), "abc");
/// assert_eq!(normalize("a,;\"[]-=+_!!@#$%^&*()b"), "a b");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase().replace(['\n', '\t'], " ");
    let stripped = NON_ALPHABET.replace_all(&lowered, " ");
    WHITESPACE.replace_all(&stripped, " ").trim().to_owned()
}
