use chrono::{DateTime, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;

use vocab_core::model::{Tier, Word, WordId};

use super::choices::generate_choices;
use super::progress::QuizProgress;
use crate::error::QuizError;

/// Number of questions in a full round.
pub const ROUND_LENGTH: usize = 10;

//
// ─── STATES ────────────────────────────────────────────────────────────────────
//

/// Lifecycle of a quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuizState {
    /// No tier picked yet (or the run was reset).
    Selecting,
    /// Questions are being presented.
    InProgress,
    /// Round finished or pool exhausted.
    Completed,
}

/// Feedback for a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
}

impl AnswerOutcome {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, AnswerOutcome::Correct)
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz run over one tier's word pool.
///
/// Steps through up to [`ROUND_LENGTH`] questions, drawing each word
/// uniformly at random without replacement, so no word repeats within a
/// run. A ten-word tier is exhausted exactly at the round boundary;
/// whichever of the two limits is hit first completes the run.
///
/// All randomness flows through the caller-provided [`Rng`], and all
/// timestamps come in as arguments, keeping the machine deterministic
/// under test.
#[derive(Debug, Clone)]
pub struct QuizSession {
    state: QuizState,
    tier: Option<Tier>,
    pool: Vec<Word>,
    consumed: HashSet<WordId>,
    answered: usize,
    current: Option<usize>,
    current_choices: Vec<String>,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// A fresh session in the `Selecting` state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: QuizState::Selecting,
            tier: None,
            pool: Vec::new(),
            consumed: HashSet::new(),
            answered: 0,
            current: None,
            current_choices: Vec::new(),
            started_at: None,
            completed_at: None,
        }
    }

    /// Begin a run: install the word pool for `tier`, clear consumed ids,
    /// zero the answer count, and move to `InProgress`.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic. No question is drawn yet; call [`Self::next_question`].
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if `words` is empty. Catalog tiers are
    /// non-empty by construction, so pools built from the catalog never
    /// trip this.
    pub fn start(
        &mut self,
        tier: Tier,
        words: Vec<Word>,
        started_at: DateTime<Utc>,
    ) -> Result<(), QuizError> {
        if words.is_empty() {
            return Err(QuizError::Empty);
        }

        self.state = QuizState::InProgress;
        self.tier = Some(tier);
        self.pool = words;
        self.consumed.clear();
        self.answered = 0;
        self.current = None;
        self.current_choices.clear();
        self.started_at = Some(started_at);
        self.completed_at = None;
        Ok(())
    }

    /// Draw the next question uniformly at random from the unconsumed pool.
    ///
    /// Returns `None` and moves to `Completed` once the round limit is
    /// reached or the pool runs dry; both are normal terminal outcomes.
    /// The drawn word's id is marked consumed and its choice set is
    /// generated once, so [`Self::current_choices`] stays stable for the
    /// lifetime of the question.
    pub fn next_question<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Option<&Word> {
        if self.state != QuizState::InProgress {
            return None;
        }
        if self.consumed.len() >= ROUND_LENGTH {
            self.complete(now);
            return None;
        }

        let unconsumed: Vec<usize> = self
            .pool
            .iter()
            .enumerate()
            .filter(|(_, w)| !self.consumed.contains(&w.id()))
            .map(|(i, _)| i)
            .collect();

        let Some(&index) = unconsumed.as_slice().choose(rng) else {
            self.complete(now);
            return None;
        };

        self.consumed.insert(self.pool[index].id());
        self.current_choices = generate_choices(&self.pool[index], &self.pool, rng);
        self.current = Some(index);
        self.pool.get(index)
    }

    /// Check `choice` against the current question's meaning.
    ///
    /// Exact, case-sensitive string comparison; no trimming. Does not move
    /// the session — the caller advances separately after showing feedback.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoActiveQuestion` if no question is up.
    pub fn submit_answer(&self, choice: &str) -> Result<AnswerOutcome, QuizError> {
        let word = self.current_question().ok_or(QuizError::NoActiveQuestion)?;
        if word.meaning() == choice {
            Ok(AnswerOutcome::Correct)
        } else {
            Ok(AnswerOutcome::Incorrect)
        }
    }

    /// Count the current question as answered and step to the next one.
    ///
    /// Returns the next question, or `None` when the run completes. Called
    /// by the presentation layer after its own feedback delay; pacing lives
    /// there, not here.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R, now: DateTime<Utc>) -> Option<&Word> {
        if self.state != QuizState::InProgress || self.current.is_none() {
            return None;
        }

        self.answered += 1;
        self.current = None;
        self.current_choices.clear();

        if self.answered >= ROUND_LENGTH {
            self.complete(now);
            return None;
        }
        self.next_question(rng, now)
    }

    /// Discard the run and return to `Selecting`.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn complete(&mut self, now: DateTime<Utc>) {
        self.state = QuizState::Completed;
        self.current = None;
        self.current_choices.clear();
        if self.completed_at.is_none() {
            self.completed_at = Some(now);
        }
    }

    //
    // ─── ACCESSORS ─────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn state(&self) -> QuizState {
        self.state
    }

    #[must_use]
    pub fn tier(&self) -> Option<Tier> {
        self.tier
    }

    /// The word currently up as a question, if any.
    #[must_use]
    pub fn current_question(&self) -> Option<&Word> {
        self.current.and_then(|i| self.pool.get(i))
    }

    /// Answer options for the current question, stable across calls.
    /// Empty when no question is up.
    #[must_use]
    pub fn current_choices(&self) -> &[String] {
        &self.current_choices
    }

    /// Questions answered so far, never more than [`ROUND_LENGTH`].
    #[must_use]
    pub fn answered(&self) -> usize {
        self.answered
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == QuizState::Completed
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Progress snapshot for UI rendering.
    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let total = match self.state {
            QuizState::Selecting => 0,
            _ => ROUND_LENGTH.min(self.pool.len()),
        };
        QuizProgress {
            total,
            answered: self.answered,
            remaining: total.saturating_sub(self.answered),
            is_complete: self.is_complete(),
        }
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
