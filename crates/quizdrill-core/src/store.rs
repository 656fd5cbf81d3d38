//! The quiz store: canonical record collection, CRUD, and persistence.
//!
//! The store owns the records exclusively. Everything it hands out is a
//! deep copy, so callers can do what they like with the result. Every
//! mutation rewrites durable storage through the injected backend.

use crate::error::QuizError;
use crate::model::{QuizId, QuizRecord, StoredRecord};
use crate::storage::StorageBackend;

/// The records every fresh database starts with.
const SEED_RECORDS: [(&str, &str); 4] = [
    ("Capital of Italy", "Rome"),
    ("Capital of France", "Paris"),
    ("Capital of Spain", "Madrid"),
    ("Capital of Portugal", "Lisbon"),
];

/// Validates a raw `<id>` argument before any lookup touches the store.
///
/// `None` means the user supplied no argument at all; a value that does not
/// parse as an integer is rejected as such. Otherwise the parsed id comes
/// back, with no claim yet that a record carries it.
pub fn validate_id(raw: Option<&str>) -> Result<QuizId, QuizError> {
    let raw = raw.ok_or(QuizError::MissingParameter)?;
    raw.trim()
        .parse::<QuizId>()
        .map_err(|_| QuizError::NotANumber(raw.to_string()))
}

/// Owns the canonical quiz collection and its persistence.
///
/// A failed save leaves the in-memory change in place and surfaces
/// `Persistence`, so the caller can warn that the change may not survive a
/// restart.
pub struct QuizStore {
    records: Vec<QuizRecord>,
    next_id: QuizId,
    backend: Box<dyn StorageBackend>,
}

impl QuizStore {
    /// Loads the collection from the backend.
    ///
    /// When no prior storage exists, seeds the default records and persists
    /// them immediately. Any other load failure is propagated; the caller
    /// cannot safely continue without knowing what is on disk.
    pub fn open(mut backend: Box<dyn StorageBackend>) -> Result<Self, QuizError> {
        let records: Vec<QuizRecord> = match backend.load()? {
            Some(stored) => stored
                .into_iter()
                .enumerate()
                .map(|(position, record)| QuizRecord {
                    id: position as QuizId,
                    question: record.question,
                    answer: record.answer,
                })
                .collect(),
            None => {
                tracing::info!("no prior storage found, seeding default quizzes");
                let seeded: Vec<QuizRecord> = SEED_RECORDS
                    .iter()
                    .enumerate()
                    .map(|(position, (question, answer))| QuizRecord {
                        id: position as QuizId,
                        question: (*question).to_string(),
                        answer: (*answer).to_string(),
                    })
                    .collect();
                let stored: Vec<StoredRecord> = seeded.iter().map(StoredRecord::from).collect();
                backend.save(&stored)?;
                seeded
            }
        };

        let next_id = records.len() as QuizId;
        Ok(Self {
            records,
            next_id,
            backend,
        })
    }

    /// Number of records currently held.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Appends a new record with a fresh id and persists the collection.
    ///
    /// Both fields are trimmed; an empty-after-trim field fails validation
    /// without mutating anything.
    pub fn add(&mut self, question: &str, answer: &str) -> Result<QuizRecord, QuizError> {
        let (question, answer) = validate_fields(question, answer)?;
        let record = QuizRecord {
            id: self.next_id,
            question,
            answer,
        };
        self.next_id += 1;
        self.records.push(record.clone());
        self.persist()?;
        Ok(record)
    }

    /// Deep copies of every record, in storage (insertion) order.
    pub fn get_all(&self) -> Vec<QuizRecord> {
        self.records.clone()
    }

    /// Deep copy of the record with the given id.
    pub fn get(&self, id: QuizId) -> Result<QuizRecord, QuizError> {
        self.records
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or(QuizError::NotFound(id))
    }

    /// Replaces the question and answer of an existing record, id unchanged,
    /// and persists.
    pub fn update(
        &mut self,
        id: QuizId,
        question: &str,
        answer: &str,
    ) -> Result<QuizRecord, QuizError> {
        let (question, answer) = validate_fields(question, answer)?;
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(QuizError::NotFound(id))?;
        record.question = question;
        record.answer = answer;
        let updated = record.clone();
        self.persist()?;
        Ok(updated)
    }

    /// Removes the record with the given id and persists.
    ///
    /// Every other record keeps its id and content; ids are never reused
    /// within a run.
    pub fn delete(&mut self, id: QuizId) -> Result<(), QuizError> {
        let position = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(QuizError::NotFound(id))?;
        self.records.remove(position);
        self.persist()
    }

    fn persist(&mut self) -> Result<(), QuizError> {
        let stored: Vec<StoredRecord> = self.records.iter().map(StoredRecord::from).collect();
        self.backend.save(&stored)
    }
}

/// Trims both fields and rejects the ones that end up empty, one message
/// per violated field.
fn validate_fields(question: &str, answer: &str) -> Result<(String, String), QuizError> {
    let question = question.trim();
    let answer = answer.trim();

    let mut violations = Vec::new();
    if question.is_empty() {
        violations.push("question must not be empty".to_string());
    }
    if answer.is_empty() {
        violations.push("answer must not be empty".to_string());
    }

    if violations.is_empty() {
        Ok((question.to_string(), answer.to_string()))
    } else {
        Err(QuizError::Validation(violations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    /// Backend whose saves always fail, for the mutation-stands contract.
    struct FailingStorage;

    impl StorageBackend for FailingStorage {
        fn load(&mut self) -> Result<Option<Vec<StoredRecord>>, QuizError> {
            Ok(Some(vec![StoredRecord {
                question: "Capital of Italy".into(),
                answer: "Rome".into(),
            }]))
        }

        fn save(&mut self, _records: &[StoredRecord]) -> Result<(), QuizError> {
            Err(QuizError::Persistence("disk on fire".into()))
        }
    }

    fn open_empty() -> (MemoryStorage, QuizStore) {
        let handle = MemoryStorage::new();
        let mut backend = handle.clone();
        // Pre-save an empty collection so open() does not seed.
        backend.save(&[]).unwrap();
        let store = QuizStore::open(Box::new(backend)).unwrap();
        (handle, store)
    }

    #[test]
    fn open_seeds_when_no_prior_storage_exists() {
        let handle = MemoryStorage::new();
        let store = QuizStore::open(Box::new(handle.clone())).unwrap();

        assert_eq!(store.count(), 4);
        assert_eq!(store.get(0).unwrap().question, "Capital of Italy");
        assert_eq!(store.get(3).unwrap().answer, "Lisbon");
        // The seed is persisted immediately.
        assert_eq!(handle.saved().unwrap().len(), 4);
    }

    #[test]
    fn open_assigns_ids_by_position() {
        let handle = MemoryStorage::new();
        let mut backend = handle.clone();
        backend
            .save(&[
                StoredRecord {
                    question: "q0".into(),
                    answer: "a0".into(),
                },
                StoredRecord {
                    question: "q1".into(),
                    answer: "a1".into(),
                },
            ])
            .unwrap();

        let store = QuizStore::open(Box::new(backend)).unwrap();
        assert_eq!(store.count(), 2);
        assert_eq!(store.get(0).unwrap().question, "q0");
        assert_eq!(store.get(1).unwrap().question, "q1");
    }

    #[test]
    fn add_trims_appends_and_persists() {
        let (handle, mut store) = open_empty();

        let record = store.add("  Who wrote Dune?  ", "  Frank Herbert ").unwrap();
        assert_eq!(record.question, "Who wrote Dune?");
        assert_eq!(record.answer, "Frank Herbert");
        assert_eq!(store.count(), 1);

        let all = store.get_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], record);

        let saved = handle.saved().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].question, "Who wrote Dune?");
    }

    #[test]
    fn add_rejects_empty_fields_without_mutating() {
        let (_, mut store) = open_empty();

        let err = store.add("   ", "").unwrap_err();
        match err {
            QuizError::Validation(messages) => {
                assert_eq!(
                    messages,
                    vec![
                        "question must not be empty".to_string(),
                        "answer must not be empty".to_string()
                    ]
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn get_all_returns_copies() {
        let (_, mut store) = open_empty();
        store.add("q", "a").unwrap();

        let mut copy = store.get_all();
        copy[0].question = "mangled".into();
        assert_eq!(store.get(0).unwrap().question, "q");
    }

    #[test]
    fn missing_ids_fail_and_leave_the_store_unchanged() {
        let (_, mut store) = open_empty();
        store.add("q", "a").unwrap();
        let before = store.get_all();

        assert!(matches!(store.get(99), Err(QuizError::NotFound(99))));
        assert!(matches!(
            store.update(99, "x", "y"),
            Err(QuizError::NotFound(99))
        ));
        assert!(matches!(store.delete(99), Err(QuizError::NotFound(99))));
        assert_eq!(store.get_all(), before);
    }

    #[test]
    fn update_replaces_in_place_and_keeps_the_id() {
        let (handle, mut store) = open_empty();
        store.add("old question", "old answer").unwrap();

        let updated = store.update(0, " new question ", " new answer ").unwrap();
        assert_eq!(updated.id, 0);
        assert_eq!(updated.question, "new question");
        assert_eq!(updated.answer, "new answer");
        assert_eq!(store.count(), 1);
        assert_eq!(handle.saved().unwrap()[0].question, "new question");
    }

    #[test]
    fn delete_removes_only_the_target() {
        let (handle, mut store) = open_empty();
        store.add("q0", "a0").unwrap();
        store.add("q1", "a1").unwrap();
        store.add("q2", "a2").unwrap();

        store.delete(1).unwrap();

        assert_eq!(store.count(), 2);
        assert_eq!(store.get(0).unwrap().question, "q0");
        assert_eq!(store.get(2).unwrap().question, "q2");
        assert!(matches!(store.get(1), Err(QuizError::NotFound(1))));
        assert_eq!(handle.saved().unwrap().len(), 2);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let (_, mut store) = open_empty();
        store.add("q0", "a0").unwrap();
        store.add("q1", "a1").unwrap();

        store.delete(1).unwrap();
        let record = store.add("q2", "a2").unwrap();

        // The freed id 1 is never handed out again this run.
        assert_eq!(record.id, 2);
    }

    #[test]
    fn validate_id_taxonomy() {
        assert!(matches!(
            validate_id(None),
            Err(QuizError::MissingParameter)
        ));
        assert!(matches!(
            validate_id(Some("abc")),
            Err(QuizError::NotANumber(_))
        ));
        assert_eq!(validate_id(Some("3")).unwrap(), 3);
        assert_eq!(validate_id(Some(" 12 ")).unwrap(), 12);
    }

    #[test]
    fn failed_save_surfaces_but_the_mutation_stands() {
        let mut store = QuizStore::open(Box::new(FailingStorage)).unwrap();
        assert_eq!(store.count(), 1);

        let err = store.add("q", "a").unwrap_err();
        assert!(err.is_persistence());
        // The record is in memory even though the save failed.
        assert_eq!(store.count(), 2);

        let err = store.delete(0).unwrap_err();
        assert!(err.is_persistence());
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn roundtrip_through_a_fresh_store() {
        let handle = MemoryStorage::new();
        {
            let mut store = QuizStore::open(Box::new(handle.clone())).unwrap();
            store.add("Who wrote Dune?", "Frank Herbert").unwrap();
            store.delete(0).unwrap();
        }

        let reopened = QuizStore::open(Box::new(handle.clone())).unwrap();
        let questions: Vec<String> = reopened
            .get_all()
            .into_iter()
            .map(|record| record.question)
            .collect();
        assert_eq!(
            questions,
            vec![
                "Capital of France".to_string(),
                "Capital of Spain".to_string(),
                "Capital of Portugal".to_string(),
                "Who wrote Dune?".to_string(),
            ]
        );
    }
}
