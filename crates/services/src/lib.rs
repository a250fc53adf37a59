#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;

pub use vocab_core::Clock;

pub use error::QuizError;
pub use quiz::{
    AnswerOutcome, QuizLoopService, QuizProgress, QuizSession, QuizState, ROUND_LENGTH,
};
