use std::collections::BTreeMap;
use std::sync::Mutex;
use shared::models::*;
use shared::validation::{validate_new_question, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Failed to acquire store lock")]
    LockFailed,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Persistence seam for questions and their choices.
#[rocket::async_trait]
pub trait PollStore: Send + Sync {
    /// Up to `limit` questions, newest `pub_date` first.
    async fn latest_questions(&self, limit: i64) -> Result<Vec<Question>, StoreError>;

    async fn question(&self, id: i64) -> Result<Option<Question>, StoreError>;

    /// Choices of a question ordered by id.
    async fn choices(&self, question_id: i64) -> Result<Vec<Choice>, StoreError>;

    /// Adds one vote to `choice_id` if it belongs to `question_id`, returning the updated choice.
    /// `None` means no such choice on that question and nothing was written.
    async fn record_vote(&self, question_id: i64, choice_id: i64) -> Result<Option<Choice>, StoreError>;

    async fn create_question(&self, new: &NewQuestion) -> Result<Question, StoreError>;

    /// Removes the question and all of its choices. Returns false when it did not exist.
    async fn delete_question(&self, id: i64) -> Result<bool, StoreError>;

    async fn count_questions(&self) -> Result<i64, StoreError>;
}

#[derive(Debug, Default)]
struct Tables {
    questions: BTreeMap<i64, Question>,
    choices: BTreeMap<i64, Choice>,
    last_question_id: i64,
    last_choice_id: i64,
}

/// Process-local store; every operation runs under a single lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_tables<T>(&self, f: impl FnOnce(&mut Tables) -> T) -> Result<T, StoreError> {
        let mut tables = self.tables.lock().map_err(|_| StoreError::LockFailed)?;
        Ok(f(&mut tables))
    }
}

#[rocket::async_trait]
impl PollStore for MemoryStore {
    async fn latest_questions(&self, limit: i64) -> Result<Vec<Question>, StoreError> {
        self.with_tables(|t| {
            let mut questions: Vec<Question> = t.questions.values().cloned().collect();
            questions.sort_by(|a, b| b.pub_date.cmp(&a.pub_date).then(b.id.cmp(&a.id)));
            questions.truncate(usize::try_from(limit).unwrap_or(0));
            questions
        })
    }

    async fn question(&self, id: i64) -> Result<Option<Question>, StoreError> {
        self.with_tables(|t| t.questions.get(&id).cloned())
    }

    async fn choices(&self, question_id: i64) -> Result<Vec<Choice>, StoreError> {
        self.with_tables(|t| {
            t.choices.values()
                .filter(|c| c.question_id == question_id)
                .cloned()
                .collect()
        })
    }

    async fn record_vote(&self, question_id: i64, choice_id: i64) -> Result<Option<Choice>, StoreError> {
        self.with_tables(|t| {
            t.choices.get_mut(&choice_id)
                .filter(|c| c.question_id == question_id)
                .map(|c| {
                    c.votes += 1;
                    c.clone()
                })
        })
    }

    async fn create_question(&self, new: &NewQuestion) -> Result<Question, StoreError> {
        validate_new_question(new)?;

        self.with_tables(|t| {
            t.last_question_id += 1;
            let question = Question {
                id: t.last_question_id,
                question_text: new.question_text.clone(),
                pub_date: new.pub_date,
            };
            t.questions.insert(question.id, question.clone());

            for choice in &new.choices {
                t.last_choice_id += 1;
                t.choices.insert(t.last_choice_id, Choice {
                    id: t.last_choice_id,
                    question_id: question.id,
                    choice_text: choice.choice_text.clone(),
                    votes: choice.votes,
                });
            }

            question
        })
    }

    async fn delete_question(&self, id: i64) -> Result<bool, StoreError> {
        self.with_tables(|t| {
            let existed = t.questions.remove(&id).is_some();
            t.choices.retain(|_, c| c.question_id != id);
            existed
        })
    }

    async fn count_questions(&self) -> Result<i64, StoreError> {
        self.with_tables(|t| t.questions.len() as i64)
    }
}
