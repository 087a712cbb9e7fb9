//! Shared error types for the services crate.

use std::time::Duration;

use thiserror::Error;

use dna_core::QuizError;
use storage::StorageError;

/// Errors emitted by a `ScoringClient`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScoringError {
    #[error("scoring request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("scoring request timed out after {0:?}")]
    TimedOut(Duration),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `QuizLoopService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizLoopError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while reading `QuizConfig`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{var} is not a valid url: {source}")]
    InvalidUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("{var} must be a whole number of seconds, got {raw:?}")]
    InvalidTimeout { var: &'static str, raw: String },
}
