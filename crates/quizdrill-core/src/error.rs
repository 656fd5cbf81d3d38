//! Quiz error types.
//!
//! One taxonomy for every failure the store and session engine can report,
//! so the REPL can classify errors without string matching: bad user input
//! (missing/non-numeric id), lookups that miss, content validation, and
//! durable storage trouble.

use thiserror::Error;

use crate::model::QuizId;

/// Errors produced by the quiz store and its persistence backends.
#[derive(Debug, Error)]
pub enum QuizError {
    /// No `<id>` argument was supplied to a command that requires one.
    #[error("missing <id> parameter")]
    MissingParameter,

    /// The `<id>` argument could not be parsed as an integer.
    #[error("the <id> parameter is not a number: '{0}'")]
    NotANumber(String),

    /// The id parsed, but no record carries it.
    #[error("no quiz exists with id={0}")]
    NotFound(QuizId),

    /// One or more fields failed content validation.
    #[error("invalid quiz: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Durable storage could not be read or written.
    #[error("storage failure: {0}")]
    Persistence(String),
}

impl QuizError {
    /// Returns `true` if the error came from durable storage rather than
    /// from the request itself. After a failed save the in-memory mutation
    /// stands, so callers downgrade these to a warning.
    pub fn is_persistence(&self) -> bool {
        matches!(self, QuizError::Persistence(_))
    }
}
