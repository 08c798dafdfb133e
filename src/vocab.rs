use crate::{Result, normalize};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::btree_map::Entry;
use std::io::Read;
use tracing::{debug, warn};

/// Removes every term that contains another term of the set.
///
/// Terms are visited longest first by byte length; a term is dropped when
/// any term not yet visited (so no longer than it) is a substring of it. The survivors
/// form an antichain under the substring relation and keep the shortest
/// representatives.
///
/// ```
/// use term_occurrences::prune_terms;
///
/// let kept = prune_terms(["ab", "abc", "bc"]);
/// assert_eq!(kept.into_iter().collect::<Vec<_>>(), ["ab", "bc"]);
/// ```
pub fn prune_terms<T>(terms: impl IntoIterator<Item = T>) -> BTreeSet<String>
where
    T: AsRef<str>,
{
    let mut pending: Vec<(usize, String)> = terms
        .into_iter()
        .map(|t| {
            let t = t.as_ref();
            (t.len(), t.to_owned())
        })
        .collect();
    pending.sort_by_key(|(len, _)| *len);

    let mut kept = BTreeSet::new();
    while let Some((_, term)) = pending.pop() {
        if !pending.iter().any(|(_, shorter)| term.contains(shorter.as_str())) {
            kept.insert(term);
        }
    }
    kept
}

/// Read-only mapping from normalized term to concept id.
///
/// Iterates in lexicographic term order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    terms: BTreeMap<String, String>,
}

impl Vocabulary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a JSON object of `term -> concept id`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Maps `term` to `concept_id`, returning the id it replaced.
    pub fn insert(
        &mut self,
        term: impl Into<String>,
        concept_id: impl Into<String>,
    ) -> Option<String> {
        self.terms.insert(term.into(), concept_id.into())
    }

    #[must_use]
    pub fn get(&self, term: &str) -> Option<&str> {
        self.terms.get(term).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.terms.iter().map(|(t, id)| (t.as_str(), id.as_str()))
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<T, C> FromIterator<(T, C)> for Vocabulary
where
    T: Into<String>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (T, C)>>(iter: I) -> Self {
        Self {
            terms: iter
                .into_iter()
                .map(|(t, c)| (t.into(), c.into()))
                .collect(),
        }
    }
}

/// Offline build step turning `concept id -> synonyms` into a [`Vocabulary`].
///
/// ```rust
/// use term_occurrences::VocabularyBuilder;
///
/// let vocabulary = VocabularyBuilder::new()
///     .normalize(true)
///     .build([("001", vec!["Severe ABC disorder", "ABC"])]);
///
/// assert_eq!(vocabulary.len(), 1);
/// assert_eq!(vocabulary.get("abc"), Some("001"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct VocabularyBuilder {
    prune: bool,
    normalize: bool,
}

impl Default for VocabularyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VocabularyBuilder {
    /// Pruning on, normalization off.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prune: true,
            normalize: false,
        }
    }

    /// Drop synonyms that contain another synonym of the same concept.
    #[must_use]
    pub fn prune(mut self, value: bool) -> Self {
        self.prune = value;
        self
    }

    /// Run every synonym through [`normalize`](crate::normalize()) first.
    #[must_use]
    pub fn normalize(mut self, value: bool) -> Self {
        self.normalize = value;
        self
    }

    /// Merges the synonym sets of all concepts. When two concepts share a
    /// synonym the first concept keeps it.
    pub fn build<C, S, T>(self, concepts: impl IntoIterator<Item = (C, S)>) -> Vocabulary
    where
        C: Into<String>,
        S: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut terms = BTreeMap::new();
        let mut seen = 0usize;

        for (concept_id, synonyms) in concepts {
            let concept_id: String = concept_id.into();
            let synonyms: Vec<String> = synonyms
                .into_iter()
                .map(|s| {
                    if self.normalize {
                        normalize(s.as_ref())
                    } else {
                        s.as_ref().to_owned()
                    }
                })
                .filter(|s| !s.is_empty())
                .collect();
            seen += synonyms.len();

            let synonyms: BTreeSet<String> = if self.prune {
                prune_terms(synonyms)
            } else {
                synonyms.into_iter().collect()
            };

            for synonym in synonyms {
                match terms.entry(synonym) {
                    Entry::Vacant(slot) => {
                        slot.insert(concept_id.clone());
                    }
                    Entry::Occupied(slot) => {
                        if *slot.get() != concept_id {
                            warn!(
                                term = %slot.key(),
                                kept = %slot.get(),
                                dropped = %concept_id,
                                "synonym claimed by more than one concept"
                            );
                        }
                    }
                }
            }
        }

        debug!(synonyms = seen, terms = terms.len(), "vocabulary built");
        Vocabulary { terms }
    }
}
