//! The play session: randomized draw without replacement over a snapshot.
//!
//! A session asks every stored question exactly once, in random order, and
//! ends on the first wrong answer or when nothing is left to ask. It works
//! on a snapshot taken at start and never touches the store.

use rand::Rng;

use crate::model::{answers_match, QuizRecord};

/// The transient state of one `play` invocation.
///
/// Terminal outcomes consume the session, so a finished game cannot be
/// resumed; a new play always starts from a fresh store snapshot. While the
/// session lives there is always a drawn question on the table.
pub struct Session<R: Rng> {
    pending: Vec<QuizRecord>,
    current: usize,
    score: u32,
    rng: R,
}

/// What answering the current question did to the session.
pub enum Step<R: Rng> {
    /// Correct, and questions remain: keep playing.
    Next(Session<R>),
    /// Correct, and that was the last one.
    Won { score: u32 },
    /// Wrong. The game ends without asking the remaining questions.
    Lost { score: u32 },
}

impl<R: Rng> Session<R> {
    /// Starts a session over a snapshot and draws the first question.
    ///
    /// Returns `None` when the snapshot is empty: there is nothing to play,
    /// no score, no outcome.
    pub fn start(snapshot: Vec<QuizRecord>, mut rng: R) -> Option<Self> {
        if snapshot.is_empty() {
            return None;
        }
        let current = rng.gen_range(0..snapshot.len());
        Some(Self {
            pending: snapshot,
            current,
            score: 0,
            rng,
        })
    }

    /// The question currently awaiting an answer.
    pub fn question(&self) -> &str {
        &self.pending[self.current].question
    }

    /// Correct answers so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Questions not yet answered, the one on the table included.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Scores `raw` against the current question and advances the state
    /// machine. Both sides are trimmed and case-folded before comparison.
    ///
    /// A correct answer removes the asked question from the pending set, so
    /// it cannot be drawn again this session; the next question is drawn
    /// uniformly from what remains.
    pub fn submit_answer(mut self, raw: &str) -> Step<R> {
        if !answers_match(raw, &self.pending[self.current].answer) {
            return Step::Lost { score: self.score };
        }

        self.score += 1;
        self.pending.swap_remove(self.current);

        if self.pending.is_empty() {
            return Step::Won { score: self.score };
        }

        self.current = self.rng.gen_range(0..self.pending.len());
        Step::Next(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuizId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn records(n: usize) -> Vec<QuizRecord> {
        (0..n)
            .map(|i| QuizRecord {
                id: i as QuizId,
                question: format!("question {i}"),
                answer: format!("answer {i}"),
            })
            .collect()
    }

    fn answer_for(question: &str) -> String {
        question.replace("question", "answer")
    }

    #[test]
    fn empty_snapshot_has_nothing_to_play() {
        let rng = StdRng::seed_from_u64(1);
        assert!(Session::start(Vec::new(), rng).is_none());
    }

    #[test]
    fn answering_everything_correctly_wins_with_full_score() {
        let rng = StdRng::seed_from_u64(7);
        let mut session = Session::start(records(10), rng).unwrap();
        let mut asked = HashSet::new();

        let score = loop {
            assert!(asked.insert(session.question().to_string()), "repeated question");
            let answer = answer_for(session.question());
            match session.submit_answer(&answer) {
                Step::Next(next) => session = next,
                Step::Won { score } => break score,
                Step::Lost { .. } => panic!("correct answer lost the game"),
            }
        };

        assert_eq!(score, 10);
        assert_eq!(asked.len(), 10);
    }

    #[test]
    fn first_wrong_answer_ends_the_session() {
        let rng = StdRng::seed_from_u64(42);
        let mut session = Session::start(records(5), rng).unwrap();

        // Answer three correctly, then miss.
        for turn in 0..3 {
            let answer = answer_for(session.question());
            session = match session.submit_answer(&answer) {
                Step::Next(next) => next,
                _ => panic!("game ended early on turn {turn}"),
            };
        }

        match session.submit_answer("definitely wrong") {
            Step::Lost { score } => assert_eq!(score, 3),
            _ => panic!("wrong answer did not lose the game"),
        }
    }

    #[test]
    fn wrong_answer_on_the_first_turn_scores_zero() {
        let rng = StdRng::seed_from_u64(3);
        let session = Session::start(records(4), rng).unwrap();
        match session.submit_answer("nope") {
            Step::Lost { score } => assert_eq!(score, 0),
            _ => panic!("expected a loss"),
        }
    }

    #[test]
    fn single_record_win() {
        let rng = StdRng::seed_from_u64(9);
        let session = Session::start(records(1), rng).unwrap();
        assert_eq!(session.remaining(), 1);
        match session.submit_answer("answer 0") {
            Step::Won { score } => assert_eq!(score, 1),
            _ => panic!("expected a win"),
        }
    }

    #[test]
    fn answers_are_trimmed_and_case_folded() {
        let rng = StdRng::seed_from_u64(11);
        let snapshot = vec![
            QuizRecord {
                id: 0,
                question: "Capital of Italy".into(),
                answer: "Rome".into(),
            },
            QuizRecord {
                id: 1,
                question: "Capital of France".into(),
                answer: "Paris".into(),
            },
        ];
        let mut session = Session::start(snapshot, rng).unwrap();

        let first = if session.question() == "Capital of Italy" {
            "  rome "
        } else {
            " PARIS  "
        };
        session = match session.submit_answer(first) {
            Step::Next(next) => next,
            _ => panic!("normalized answer was not accepted"),
        };

        let second = if session.question() == "Capital of Italy" {
            "ROME"
        } else {
            "paris"
        };
        match session.submit_answer(second) {
            Step::Won { score } => assert_eq!(score, 2),
            _ => panic!("expected a win with score 2"),
        }
    }

    #[test]
    fn remaining_shrinks_by_one_per_correct_answer() {
        let rng = StdRng::seed_from_u64(5);
        let mut session = Session::start(records(6), rng).unwrap();

        for expected in (2..=6).rev() {
            assert_eq!(session.remaining(), expected);
            let answer = answer_for(session.question());
            session = match session.submit_answer(&answer) {
                Step::Next(next) => next,
                _ => panic!("game ended with {expected} remaining"),
            };
        }
        assert_eq!(session.remaining(), 1);
    }
}
