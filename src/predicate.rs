use crate::levenshtein;
use serde::{Deserialize, Serialize};

/// Decides whether a vocabulary term is present in a piece of text.
///
/// Any `Fn(&str, &str) -> bool` closure taking `(text, term)` is a strategy.
pub trait MatchStrategy {
    fn is_match(&self, text: &str, term: &str) -> bool;
}

impl<F> MatchStrategy for F
where
    F: Fn(&str, &str) -> bool,
{
    #[inline]
    fn is_match(&self, text: &str, term: &str) -> bool {
        self(text, term)
    }
}

/// `term` occurs as a contiguous substring of `text`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exact;

impl MatchStrategy for Exact {
    #[inline]
    fn is_match(&self, text: &str, term: &str) -> bool {
        text.contains(term)
    }
}

/// How [`Levenshtein`] cuts the text into candidates before comparing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chunking {
    /// Compare the whole text against the term.
    #[default]
    Whole,
    /// Compare every run of whitespace tokens as long as the term.
    Tokens,
}

/// Edit distance strictly below `threshold`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein {
    pub threshold: usize,
    pub chunking: Chunking,
}

impl Levenshtein {
    #[must_use]
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold,
            chunking: Chunking::Whole,
        }
    }

    #[must_use]
    pub fn chunking(mut self, chunking: Chunking) -> Self {
        self.chunking = chunking;
        self
    }

    #[inline]
    fn within(&self, candidate: &str, term: &str) -> bool {
        levenshtein(candidate, term) < self.threshold
    }
}

impl MatchStrategy for Levenshtein {
    fn is_match(&self, text: &str, term: &str) -> bool {
        match self.chunking {
            Chunking::Whole => self.within(text, term),
            Chunking::Tokens => {
                let tokens: Vec<&str> = text.split_whitespace().collect();
                let width = term.split_whitespace().count().max(1);
                if tokens.len() < width {
                    return self.within(text, term);
                }
                tokens
                    .windows(width)
                    .any(|window| self.within(&window.join(" "), term))
            }
        }
    }
}
