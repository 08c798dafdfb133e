use crate::{
    CharacterMargin, Exact, Levenshtein, MarginStrategy, MatchStrategy, Result, WordMargin,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One located instance of a vocabulary term, with its context window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Vocabulary term that matched.
    pub matched_term: String,
    /// Concept the term denotes.
    #[serde(rename = "ID")]
    pub concept_id: String,
    /// Slice of the text around the match.
    pub margin: String,
}

/// Result of [`OccurrenceFinder::find`](crate::OccurrenceFinder::find).
///
/// Ordered by vocabulary term first, then by position in the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Occurrences {
    pub(crate) inner: Vec<Occurrence>,
}

impl Occurrences {
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Occurrence> {
        self.inner.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Occurrence> {
        self.inner
    }

    /// Distinct concept ids that were found.
    #[must_use]
    pub fn concept_ids(&self) -> BTreeSet<&str> {
        self.inner.iter().map(|o| o.concept_id.as_str()).collect()
    }

    /// Occurrences grouped per concept id, each group in result order.
    #[must_use]
    pub fn by_concept(&self) -> BTreeMap<&str, Vec<&Occurrence>> {
        let mut groups: BTreeMap<&str, Vec<&Occurrence>> = BTreeMap::new();
        for occurrence in &self.inner {
            groups
                .entry(occurrence.concept_id.as_str())
                .or_default()
                .push(occurrence);
        }
        groups
    }
}

impl From<Vec<Occurrence>> for Occurrences {
    fn from(inner: Vec<Occurrence>) -> Self {
        Self { inner }
    }
}

impl IntoIterator for Occurrences {
    type Item = Occurrence;
    type IntoIter = std::vec::IntoIter<Occurrence>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a Occurrences {
    type Item = &'a Occurrence;
    type IntoIter = std::slice::Iter<'a, Occurrence>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

/// Match strategy picked at run time by
/// [`OccurrenceFinderBuilder`](crate::OccurrenceFinderBuilder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    Exact(Exact),
    Levenshtein(Levenshtein),
}

impl Default for Matcher {
    fn default() -> Self {
        Matcher::Exact(Exact)
    }
}

impl MatchStrategy for Matcher {
    #[inline]
    fn is_match(&self, text: &str, term: &str) -> bool {
        match self {
            Matcher::Exact(m) => m.is_match(text, term),
            Matcher::Levenshtein(m) => m.is_match(text, term),
        }
    }
}

/// Margin strategy picked at run time by
/// [`OccurrenceFinderBuilder`](crate::OccurrenceFinderBuilder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Margin {
    Characters(CharacterMargin),
    Words(WordMargin),
}

impl Default for Margin {
    fn default() -> Self {
        Margin::Words(WordMargin::new(2))
    }
}

impl MarginStrategy for Margin {
    #[inline]
    fn margins(&self, text: &str, term: &str) -> Result<Vec<String>> {
        match self {
            Margin::Characters(m) => m.margins(text, term),
            Margin::Words(m) => m.margins(text, term),
        }
    }
}
