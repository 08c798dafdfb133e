use crate::{MarginStrategy, MatchStrategy, Occurrence, Occurrences, Result, Vocabulary};
use tracing::{debug, trace};

/// Finds every occurrence of every vocabulary term present in `text`.
///
/// Terms rejected by `matcher` are never handed to `margin`. Each margin
/// string returned for an accepted term becomes one [`Occurrence`].
pub fn find_term_occurrences<M, G>(
    text: &str,
    vocabulary: &Vocabulary,
    matcher: &M,
    margin: &G,
) -> Result<Occurrences>
where
    M: MatchStrategy + ?Sized,
    G: MarginStrategy + ?Sized,
{
    let candidates: Vec<(&str, &str)> = vocabulary
        .iter()
        .filter(|(term, _)| matcher.is_match(text, term))
        .collect();
    debug!(
        terms = vocabulary.len(),
        candidates = candidates.len(),
        "matched vocabulary terms"
    );

    let mut occurrences = Vec::new();
    for (term, concept_id) in candidates {
        let margins = margin.margins(text, term)?;
        trace!(term, concept_id, margins = margins.len(), "sliced margins");
        occurrences.extend(margins.into_iter().map(|margin| Occurrence {
            matched_term: term.to_owned(),
            concept_id: concept_id.to_owned(),
            margin,
        }));
    }
    Ok(occurrences.into())
}

/// A match strategy paired with a margin strategy.
///
/// ```rust
/// use term_occurrences::{Exact, OccurrenceFinder, Vocabulary, WordMargin};
///
/// let vocabulary: Vocabulary = [("abc", "002")].into_iter().collect();
/// let finder = OccurrenceFinder::new(Exact, WordMargin::new(1));
///
/// let found = finder.find("patients must have abc", &vocabulary).unwrap();
/// assert_eq!(found.iter().next().unwrap().margin, "have abc");
/// ```
#[derive(Debug, Clone, Default)]
pub struct OccurrenceFinder<M, G> {
    matcher: M,
    margin: G,
}

impl<M, G> OccurrenceFinder<M, G>
where
    M: MatchStrategy,
    G: MarginStrategy,
{
    pub fn new(matcher: M, margin: G) -> Self {
        Self { matcher, margin }
    }

    #[inline]
    pub fn find(&self, text: &str, vocabulary: &Vocabulary) -> Result<Occurrences> {
        find_term_occurrences(text, vocabulary, &self.matcher, &self.margin)
    }

    #[must_use]
    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    #[must_use]
    pub fn margin(&self) -> &G {
        &self.margin
    }
}
