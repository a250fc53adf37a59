mod choices;
mod progress;
mod session;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use choices::generate_choices;
pub use progress::QuizProgress;
pub use session::{AnswerOutcome, QuizSession, QuizState, ROUND_LENGTH};
pub use workflow::QuizLoopService;
