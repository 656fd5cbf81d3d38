//! Core record types for quizdrill.
//!
//! A quiz is one question/answer pair. In memory it carries a stable
//! identifier assigned by the store; on disk only the question and answer
//! survive, and identifiers are reassigned by position at load time.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store. Stable for the lifetime of a run and
/// never reused after a deletion within that run.
pub type QuizId = u32;

/// One question/answer pair held by the store.
///
/// Both fields are trimmed and non-empty; the store rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRecord {
    /// Unique identifier.
    pub id: QuizId,
    /// The question text.
    pub question: String,
    /// The expected answer.
    pub answer: String,
}

/// The on-disk shape of a record: exactly the keys `question` and `answer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoredRecord {
    pub question: String,
    pub answer: String,
}

impl From<&QuizRecord> for StoredRecord {
    fn from(record: &QuizRecord) -> Self {
        Self {
            question: record.question.clone(),
            answer: record.answer.clone(),
        }
    }
}

/// Compares a typed answer against a stored one.
///
/// Both sides are trimmed and case-folded. Every path that checks an answer
/// (the play session and the single-quiz `test` command) goes through here,
/// so the comparison rule cannot drift between them.
pub fn answers_match(given: &str, expected: &str) -> bool {
    normalize(given) == normalize(expected)
}

fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}
