use crate::{
    CharacterMargin, Chunking, Exact, Levenshtein, Margin, Matcher, OccurrenceFinder,
    PatternSyntax, WordMargin,
};
use serde::{Deserialize, Serialize};

/// Serializable finder settings, meant to be embedded in a caller's own
/// configuration file.
///
/// ```rust
/// use term_occurrences::FinderConfig;
///
/// let config: FinderConfig = serde_json::from_str(
///     r#"{ "matching": { "levenshtein": { "threshold": 2 } }, "margin": { "characters": 5 } }"#,
/// ).unwrap();
/// assert_eq!(config.margin, term_occurrences::MarginConfig::Characters(5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    pub matching: MatchConfig,
    pub margin: MarginConfig,
    pub syntax: PatternSyntax,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchConfig {
    #[default]
    Exact,
    Levenshtein {
        threshold: usize,
        #[serde(default)]
        chunking: Chunking,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginConfig {
    Characters(usize),
    Words(isize),
}

impl Default for MarginConfig {
    fn default() -> Self {
        MarginConfig::Words(2)
    }
}

/// Builder for an [`OccurrenceFinder`] whose strategies are chosen at run
/// time.
///
/// ```rust
/// use term_occurrences::{OccurrenceFinderBuilder, Vocabulary};
///
/// let finder = OccurrenceFinderBuilder::new()
///     .word_margin(1)
///     .build();
///
/// let vocabulary: Vocabulary = [("pain", "005")].into_iter().collect();
/// let found = finder.find("composers and painters and dancers", &vocabulary).unwrap();
/// assert_eq!(found.iter().next().unwrap().margin, "and painters and");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OccurrenceFinderBuilder {
    config: FinderConfig,
}

impl OccurrenceFinderBuilder {
    /// Exact matching, two words of margin, terms compiled as patterns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: FinderConfig) -> Self {
        Self { config }
    }

    /// Substring containment.
    #[must_use]
    pub fn exact(mut self) -> Self {
        self.config.matching = MatchConfig::Exact;
        self
    }

    /// Edit distance strictly below `threshold`.
    #[must_use]
    pub fn levenshtein(mut self, threshold: usize) -> Self {
        let chunking = match self.config.matching {
            MatchConfig::Levenshtein { chunking, .. } => chunking,
            MatchConfig::Exact => Chunking::default(),
        };
        self.config.matching = MatchConfig::Levenshtein {
            threshold,
            chunking,
        };
        self
    }

    /// Only meaningful together with [`levenshtein`](Self::levenshtein).
    #[must_use]
    pub fn chunking(mut self, value: Chunking) -> Self {
        if let MatchConfig::Levenshtein { chunking, .. } = &mut self.config.matching {
            *chunking = value;
        }
        self
    }

    #[must_use]
    pub fn word_margin(mut self, size: isize) -> Self {
        self.config.margin = MarginConfig::Words(size);
        self
    }

    #[must_use]
    pub fn character_margin(mut self, size: usize) -> Self {
        self.config.margin = MarginConfig::Characters(size);
        self
    }

    /// Search terms verbatim instead of as regular expressions.
    #[must_use]
    pub fn literal(mut self, value: bool) -> Self {
        self.config.syntax = if value {
            PatternSyntax::Literal
        } else {
            PatternSyntax::Regex
        };
        self
    }

    #[must_use]
    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    pub fn build(self) -> OccurrenceFinder<Matcher, Margin> {
        let FinderConfig {
            matching,
            margin,
            syntax,
        } = self.config;

        let matcher = match matching {
            MatchConfig::Exact => Matcher::Exact(Exact),
            MatchConfig::Levenshtein {
                threshold,
                chunking,
            } => Matcher::Levenshtein(Levenshtein::new(threshold).chunking(chunking)),
        };
        let margin = match margin {
            MarginConfig::Characters(size) => {
                Margin::Characters(CharacterMargin::new(size).syntax(syntax))
            }
            MarginConfig::Words(size) => Margin::Words(WordMargin::new(size).syntax(syntax)),
        };

        OccurrenceFinder::new(matcher, margin)
    }
}
