//! Shared error types for the services crate.

use thiserror::Error;

use vocab_core::catalog::CatalogError;

/// Errors emitted by quiz services.
///
/// Running out of words and finishing a round are normal terminal outcomes,
/// not errors; this only covers calls made in the wrong state.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no words available for quiz")]
    Empty,
    #[error("no question is currently active")]
    NoActiveQuestion,
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
