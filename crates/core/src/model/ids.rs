use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a Word
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WordId(u64);

impl WordId {
    /// Creates a new `WordId`
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying u64 value
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WordId({})", self.0)
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing an ID from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for WordId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(WordId::new)
            .map_err(|_| ParseIdError {
                kind: "WordId".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_id_display() {
        let id = WordId::new(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_word_id_from_str() {
        let id: WordId = "123".parse().unwrap();
        assert_eq!(id, WordId::new(123));
    }

    #[test]
    fn test_word_id_from_str_invalid() {
        let result = "not-a-number".parse::<WordId>();
        assert!(result.is_err());
    }

    #[test]
    fn test_id_roundtrip() {
        let original = WordId::new(42);
        let serialized = original.to_string();
        let deserialized: WordId = serialized.parse().unwrap();
        assert_eq!(original, deserialized);
    }
}
