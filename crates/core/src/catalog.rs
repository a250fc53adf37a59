use std::collections::HashSet;
use thiserror::Error;

use crate::model::{Tier, Word, WordError, WordId};

/// Number of answer options presented per question.
pub const CHOICE_COUNT: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error(transparent)]
    Word(#[from] WordError),

    #[error("duplicate word id {id} in {tier} list")]
    DuplicateId { tier: Tier, id: WordId },

    #[error("{tier} list has {len} words, need at least {min}")]
    TierTooSmall { tier: Tier, len: usize, min: usize },
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Read-only word lists, one ordered list per [`Tier`].
///
/// Validated once at construction: every list needs unique ids and at least
/// [`CHOICE_COUNT`] entries so choice generation always has enough
/// distractors. After that, lookups are pure and infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCatalog {
    tiers: [Vec<Word>; 4],
}

impl WordCatalog {
    /// Build a catalog from per-tier word lists, in [`Tier::ALL`] order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::TierTooSmall` if any list has fewer than
    /// `CHOICE_COUNT` words, or `CatalogError::DuplicateId` if a list
    /// repeats an id.
    pub fn new(tiers: [Vec<Word>; 4]) -> Result<Self, CatalogError> {
        for (tier, words) in Tier::ALL.into_iter().zip(&tiers) {
            validate_tier(tier, words)?;
        }
        Ok(Self { tiers })
    }

    /// The compiled-in catalog: four tiers of ten words each.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the built-in tables fail validation.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new([
            tier_words(100, GRADE3_WORDS)?,
            tier_words(200, GRADE4_WORDS)?,
            tier_words(300, GRADE5_WORDS)?,
            tier_words(400, GRADE6_WORDS)?,
        ])
    }

    /// Ordered word list for a tier. Same list every call.
    #[must_use]
    pub fn words_for(&self, tier: Tier) -> &[Word] {
        &self.tiers[tier as usize]
    }
}

fn validate_tier(tier: Tier, words: &[Word]) -> Result<(), CatalogError> {
    if words.len() < CHOICE_COUNT {
        return Err(CatalogError::TierTooSmall {
            tier,
            len: words.len(),
            min: CHOICE_COUNT,
        });
    }

    let mut seen = HashSet::new();
    for word in words {
        if !seen.insert(word.id()) {
            return Err(CatalogError::DuplicateId {
                tier,
                id: word.id(),
            });
        }
    }

    Ok(())
}

fn tier_words(id_base: u64, entries: &[(&str, &str)]) -> Result<Vec<Word>, CatalogError> {
    entries
        .iter()
        .enumerate()
        .map(|(i, (term, meaning))| {
            Word::new(WordId::new(id_base + i as u64 + 1), *term, *meaning).map_err(CatalogError::from)
        })
        .collect()
}

//
// ─── BUILT-IN WORD TABLES ──────────────────────────────────────────────────────
//

const GRADE3_WORDS: &[(&str, &str)] = &[
    ("apple", "a round fruit with red or green skin"),
    ("river", "a large natural stream of flowing water"),
    ("happy", "feeling or showing pleasure"),
    ("listen", "to pay attention to a sound"),
    ("window", "an opening in a wall that lets in light"),
    ("garden", "a piece of ground where plants are grown"),
    ("friend", "a person you know well and like"),
    ("morning", "the early part of the day"),
    ("carry", "to hold something and take it somewhere"),
    ("bright", "giving out a lot of light"),
];

const GRADE4_WORDS: &[(&str, &str)] = &[
    ("ancient", "belonging to a time long past"),
    ("courage", "the ability to face danger without fear"),
    ("curious", "eager to know or learn something"),
    ("fragile", "easily broken or damaged"),
    ("harvest", "the gathering of ripe crops"),
    ("journey", "an act of travelling from one place to another"),
    ("modest", "not boastful about one's abilities"),
    ("rescue", "to save someone from danger"),
    ("steady", "firmly fixed and not shaking"),
    ("whisper", "to speak very softly"),
];

const GRADE5_WORDS: &[(&str, &str)] = &[
    ("abundant", "existing in very large quantities"),
    ("dwell", "to live in a particular place"),
    ("elated", "extremely happy and excited"),
    ("hazard", "something that can be dangerous"),
    ("keen", "having a strong interest or enthusiasm"),
    ("obstacle", "something that blocks one's way"),
    ("reluctant", "unwilling and hesitant to do something"),
    ("summit", "the highest point of a mountain"),
    ("vacant", "empty and not occupied"),
    ("weary", "very tired after effort"),
];

const GRADE6_WORDS: &[(&str, &str)] = &[
    ("ambiguous", "open to more than one interpretation"),
    ("diligent", "showing steady and careful effort"),
    ("eloquent", "fluent and persuasive in speaking"),
    ("feasible", "possible to do easily or conveniently"),
    ("meticulous", "showing great attention to detail"),
    ("notorious", "famous for something bad"),
    ("pragmatic", "dealing with things in a practical way"),
    ("resilient", "able to recover quickly from difficulties"),
    ("scrutinize", "to examine something very closely"),
    ("tentative", "not certain or fixed; provisional"),
];

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn word(id: u64) -> Word {
        Word::new(WordId::new(id), format!("term-{id}"), format!("meaning {id}")).unwrap()
    }

    #[test]
    fn builtin_has_ten_valid_words_per_tier() {
        let catalog = WordCatalog::builtin().unwrap();

        for tier in Tier::ALL {
            let words = catalog.words_for(tier);
            assert_eq!(words.len(), 10, "{tier} list should have 10 entries");

            let ids: HashSet<WordId> = words.iter().map(Word::id).collect();
            assert_eq!(ids.len(), words.len(), "{tier} ids should be unique");

            for word in words {
                assert!(!word.term().trim().is_empty());
                assert!(!word.meaning().trim().is_empty());
            }
        }
    }

    #[test]
    fn builtin_lookup_is_deterministic() {
        let catalog = WordCatalog::builtin().unwrap();
        assert_eq!(
            catalog.words_for(Tier::Grade3),
            catalog.words_for(Tier::Grade3)
        );
    }

    #[test]
    fn rejects_tier_below_choice_count() {
        let err = WordCatalog::new([
            vec![word(1), word(2), word(3)],
            vec![word(11), word(12), word(13), word(14)],
            vec![word(21), word(22), word(23), word(24)],
            vec![word(31), word(32), word(33), word(34)],
        ])
        .unwrap_err();

        assert_eq!(
            err,
            CatalogError::TierTooSmall {
                tier: Tier::Grade3,
                len: 3,
                min: CHOICE_COUNT,
            }
        );
    }

    #[test]
    fn rejects_duplicate_ids_within_a_tier() {
        let err = WordCatalog::new([
            vec![word(1), word(2), word(3), word(4)],
            vec![word(11), word(12), word(13), word(11)],
            vec![word(21), word(22), word(23), word(24)],
            vec![word(31), word(32), word(33), word(34)],
        ])
        .unwrap_err();

        assert_eq!(
            err,
            CatalogError::DuplicateId {
                tier: Tier::Grade4,
                id: WordId::new(11),
            }
        );
    }
}
