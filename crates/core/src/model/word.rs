use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use thiserror::Error;

use crate::model::WordId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("word term is empty")]
    EmptyTerm,

    #[error("word meaning is empty")]
    EmptyMeaning,
}

/// A vocabulary entry: an English term and the meaning shown to the learner.
///
/// Immutable once created. Equality and hashing go by [`WordId`], not by
/// content — two words with the same strings but different ids are distinct
/// catalog entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    id: WordId,
    term: String,
    meaning: String,
}

impl Word {
    /// Create a word, rejecting blank terms or meanings.
    ///
    /// # Errors
    ///
    /// Returns `WordError::EmptyTerm` or `WordError::EmptyMeaning` when the
    /// corresponding string is empty or whitespace-only.
    pub fn new(
        id: WordId,
        term: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Result<Self, WordError> {
        let term = term.into();
        if term.trim().is_empty() {
            return Err(WordError::EmptyTerm);
        }
        let meaning = meaning.into();
        if meaning.trim().is_empty() {
            return Err(WordError::EmptyMeaning);
        }

        Ok(Self { id, term, meaning })
    }

    #[must_use]
    pub fn id(&self) -> WordId {
        self.id
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub fn meaning(&self) -> &str {
        &self.meaning
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_fails_if_term_blank() {
        let err = Word::new(WordId::new(1), "   ", "a meaning").unwrap_err();
        assert_eq!(err, WordError::EmptyTerm);
    }

    #[test]
    fn word_fails_if_meaning_blank() {
        let err = Word::new(WordId::new(1), "term", "").unwrap_err();
        assert_eq!(err, WordError::EmptyMeaning);
    }

    #[test]
    fn word_equality_is_by_id() {
        let a = Word::new(WordId::new(7), "river", "a natural stream of water").unwrap();
        let b = Word::new(WordId::new(7), "other", "different content").unwrap();
        let c = Word::new(WordId::new(8), "river", "a natural stream of water").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn word_exposes_fields() {
        let word = Word::new(WordId::new(3), "bright", "giving out much light").unwrap();
        assert_eq!(word.id(), WordId::new(3));
        assert_eq!(word.term(), "bright");
        assert_eq!(word.meaning(), "giving out much light");
    }
}
