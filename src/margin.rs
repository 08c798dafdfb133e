use crate::Result;
use regex::{Match, Regex};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Cuts a context window ("margin") around every occurrence of `term` in
/// `text`, one string per non-overlapping match, in text order.
///
/// Any `Fn(&str, &str) -> Result<Vec<String>>` closure taking `(text, term)`
/// is a strategy.
pub trait MarginStrategy {
    fn margins(&self, text: &str, term: &str) -> Result<Vec<String>>;
}

impl<F> MarginStrategy for F
where
    F: Fn(&str, &str) -> Result<Vec<String>>,
{
    #[inline]
    fn margins(&self, text: &str, term: &str) -> Result<Vec<String>> {
        self(text, term)
    }
}

/// Whether a term is compiled as a regular expression or searched verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternSyntax {
    #[default]
    Regex,
    Literal,
}

impl PatternSyntax {
    #[inline]
    pub(crate) fn pattern<'a>(&self, term: &'a str) -> Cow<'a, str> {
        match self {
            PatternSyntax::Regex => Cow::Borrowed(term),
            PatternSyntax::Literal => Cow::Owned(regex::escape(term)),
        }
    }
}

/// Non-overlapping matches in text order. Unlike `find_iter`, an empty
/// match directly after a non-empty one is kept.
fn find_all<'t>(search: &Regex, text: &'t str) -> Vec<Match<'t>> {
    let mut found = Vec::new();
    let mut at = 0;
    while let Some(m) = search.find_at(text, at) {
        found.push(m);
        if !m.is_empty() {
            at = m.end();
            continue;
        }
        match text[m.end()..].chars().next() {
            Some(c) => at = m.end() + c.len_utf8(),
            None => break,
        }
    }
    found
}

/// Window of `size` characters before the match start up to `size`
/// characters after the match start (not the match end).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterMargin {
    pub size: usize,
    pub syntax: PatternSyntax,
}

impl CharacterMargin {
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            syntax: PatternSyntax::Regex,
        }
    }

    #[must_use]
    pub fn syntax(mut self, syntax: PatternSyntax) -> Self {
        self.syntax = syntax;
        self
    }
}

impl MarginStrategy for CharacterMargin {
    fn margins(&self, text: &str, term: &str) -> Result<Vec<String>> {
        let search = Regex::new(&self.syntax.pattern(term))?;

        // Byte offset of every char boundary, including the end of text.
        let boundaries: Vec<usize> = text
            .char_indices()
            .map(|(b, _)| b)
            .chain(std::iter::once(text.len()))
            .collect();
        let last = boundaries.len() - 1;

        Ok(find_all(&search, text)
            .into_iter()
            .map(|m| {
                let at = boundaries.partition_point(|&b| b < m.start());
                let from = at.saturating_sub(self.size);
                let to = at.saturating_add(self.size).min(last);
                text[boundaries[from]..boundaries[to]].to_string()
            })
            .collect())
    }
}

/// Window of up to `size` space-delimited words on each side of the word
/// containing the match. The containing word is captured whole, so `"abc"`
/// inside `"abcd"` yields `"abcd"`. A negative size matches nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordMargin {
    pub size: isize,
    pub syntax: PatternSyntax,
}

impl WordMargin {
    #[must_use]
    pub fn new(size: isize) -> Self {
        Self {
            size,
            syntax: PatternSyntax::Regex,
        }
    }

    #[must_use]
    pub fn syntax(mut self, syntax: PatternSyntax) -> Self {
        self.syntax = syntax;
        self
    }

    fn search(&self, text: &str, term: &str) -> Result<Option<Regex>> {
        let Ok(size) = usize::try_from(self.size) else {
            return Ok(None);
        };
        // No window can hold more words than the text has, and the cap keeps
        // the compiled repetition small.
        let size = size.min(text.split(' ').count());
        let term = self.syntax.pattern(term);
        let pattern = if size == 0 {
            format!(r"(?:[^ ]*{term}[^ ]*)")
        } else {
            format!(r"(?:[^ ]+ ){{0,{size}}}(?:[^ ]*{term}[^ ]*)(?: [^ ]+){{0,{size}}}")
        };
        Ok(Some(Regex::new(&pattern)?))
    }
}

impl MarginStrategy for WordMargin {
    fn margins(&self, text: &str, term: &str) -> Result<Vec<String>> {
        let Some(search) = self.search(text, term)? else {
            return Ok(Vec::new());
        };
        Ok(find_all(&search, text)
            .into_iter()
            .map(|m| m.as_str().to_string())
            .collect())
    }
}
