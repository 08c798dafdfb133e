mod builder;
mod distance;
mod error;
mod finder;
mod margin;
mod normalize;
mod predicate;
mod structs;
mod vocab;

pub use builder::{FinderConfig, MarginConfig, MatchConfig, OccurrenceFinderBuilder};
pub use distance::levenshtein;
pub use error::{Error, Result};
pub use finder::{OccurrenceFinder, find_term_occurrences};
pub use margin::{CharacterMargin, MarginStrategy, PatternSyntax, WordMargin};
pub use normalize::normalize;
pub use predicate::{Chunking, Exact, Levenshtein, MatchStrategy};
pub use structs::*;
pub use vocab::{Vocabulary, VocabularyBuilder, prune_terms};
