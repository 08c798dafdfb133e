/// Levenshtein distance between two strings, counted in characters.
///
/// Uses a single rolling row sized to the shorter input; the longer input is
/// walked as rows.
///
/// ```
/// use term_occurrences::levenshtein;
///
/// assert_eq!(levenshtein("book", "back"), 2);
/// assert_eq!(levenshtein("planet", "planetary"), 3);
/// assert_eq!(levenshtein("", "test"), 4);
/// ```
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (long, short) = if a.len() < b.len() { (b, a) } else { (a, b) };

    if short.is_empty() {
        return long.len();
    }

    let mut previous: Vec<usize> = (0..=short.len()).collect();
    let mut current: Vec<usize> = vec![0; short.len() + 1];

    for (i, c1) in long.iter().enumerate() {
        current[0] = i + 1;
        for (j, c2) in short.iter().enumerate() {
            let insertion = previous[j + 1] + 1;
            let deletion = current[j] + 1;
            let substitution = previous[j] + usize::from(c1 != c2);
            current[j + 1] = insertion.min(deletion).min(substitution);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[short.len()]
}
