use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Difficulty tier of the word catalog.
///
/// A closed enumeration: every tier maps to exactly one built-in word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    Grade3,
    Grade4,
    Grade5,
    Grade6,
}

impl Tier {
    /// All tiers in ascending difficulty order, for selection menus.
    pub const ALL: [Tier; 4] = [Tier::Grade3, Tier::Grade4, Tier::Grade5, Tier::Grade6];

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tier::Grade3 => "Grade 3",
            Tier::Grade4 => "Grade 4",
            Tier::Grade5 => "Grade 5",
            Tier::Grade6 => "Grade 6",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error type for parsing a `Tier` from string
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown tier: {input}")]
pub struct ParseTierError {
    input: String,
}

impl FromStr for Tier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grade3" | "grade 3" => Ok(Tier::Grade3),
            "grade4" | "grade 4" => Ok(Tier::Grade4),
            "grade5" | "grade 5" => Ok(Tier::Grade5),
            "grade6" | "grade 6" => Ok(Tier::Grade6),
            _ => Err(ParseTierError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_tier_once() {
        assert_eq!(Tier::ALL.len(), 4);
        for window in Tier::ALL.windows(2) {
            assert!(window[0] < window[1]);
        }
    }

    #[test]
    fn tier_display() {
        assert_eq!(Tier::Grade3.to_string(), "Grade 3");
        assert_eq!(Tier::Grade6.to_string(), "Grade 6");
    }

    #[test]
    fn tier_from_str() {
        let tier: Tier = "grade4".parse().unwrap();
        assert_eq!(tier, Tier::Grade4);
        let tier: Tier = "Grade 5".parse().unwrap();
        assert_eq!(tier, Tier::Grade5);
    }

    #[test]
    fn tier_from_str_invalid() {
        assert!("grade7".parse::<Tier>().is_err());
    }
}
