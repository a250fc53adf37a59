use rand::rngs::StdRng;
use rand::SeedableRng;

use vocab_core::catalog::WordCatalog;
use vocab_core::model::{Tier, Word};
use vocab_core::Clock;

use super::progress::QuizProgress;
use super::session::{AnswerOutcome, QuizSession};
use crate::error::QuizError;

/// Presentation-facing quiz driver.
///
/// Owns the catalog, the clock, the RNG, and the session; a UI holds one of
/// these for the lifetime of the quiz screen and drives it with user
/// actions. All calls are synchronous — the post-answer feedback delay is
/// the UI's job, after which it calls [`Self::advance`].
pub struct QuizLoopService {
    clock: Clock,
    catalog: WordCatalog,
    rng: StdRng,
    session: QuizSession,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(catalog: WordCatalog) -> Self {
        Self {
            clock: Clock::default_clock(),
            catalog,
            rng: StdRng::from_os_rng(),
            session: QuizSession::new(),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Use a fixed RNG seed, for deterministic tests.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Begin a run over the given tier and draw its first question.
    ///
    /// Selecting a tier mid-run restarts with the new tier.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if the tier's pool is empty; impossible
    /// for catalog-built pools.
    pub fn select_tier(&mut self, tier: Tier) -> Result<(), QuizError> {
        let words = self.catalog.words_for(tier).to_vec();
        let now = self.clock.now();
        self.session.start(tier, words, now)?;
        self.session.next_question(&mut self.rng, now);
        Ok(())
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Word> {
        self.session.current_question()
    }

    #[must_use]
    pub fn current_choices(&self) -> &[String] {
        self.session.current_choices()
    }

    /// Check the learner's pick against the current question.
    ///
    /// The session does not move; call [`Self::advance`] once the feedback
    /// has been shown.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoActiveQuestion` if no question is up.
    pub fn answer(&self, choice: &str) -> Result<AnswerOutcome, QuizError> {
        self.session.submit_answer(choice)
    }

    /// Step to the next question, or to completion.
    pub fn advance(&mut self) -> Option<&Word> {
        let now = self.clock.now();
        self.session.advance(&mut self.rng, now)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        self.session.progress()
    }

    /// Abandon the current run and return to tier selection.
    pub fn restart(&mut self) {
        self.session.reset();
    }

    /// Read access to the underlying session, for views that need more
    /// than the facade exposes.
    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }
}
