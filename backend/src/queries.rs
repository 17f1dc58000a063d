use sqlx::PgPool;
use shared::models::*;
use shared::validation::validate_new_question;
use crate::store::{PollStore, StoreError};

pub struct PgPollStore {
    pool: PgPool,
}

impl PgPollStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[rocket::async_trait]
impl PollStore for PgPollStore {
    async fn latest_questions(&self, limit: i64) -> Result<Vec<Question>, StoreError> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question_text, pub_date FROM polls_question
             ORDER BY pub_date DESC, id DESC LIMIT $1"
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn question(&self, id: i64) -> Result<Option<Question>, StoreError> {
        let question = sqlx::query_as::<_, Question>(
            "SELECT id, question_text, pub_date FROM polls_question WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    async fn choices(&self, question_id: i64) -> Result<Vec<Choice>, StoreError> {
        let choices = sqlx::query_as::<_, Choice>(
            "SELECT id, question_id, choice_text, votes FROM polls_choice
             WHERE question_id = $1 ORDER BY id"
        )
        .bind(question_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(choices)
    }

    async fn record_vote(&self, question_id: i64, choice_id: i64) -> Result<Option<Choice>, StoreError> {
        // Single statement: concurrent votes on one choice are summed by Postgres.
        let choice = sqlx::query_as::<_, Choice>(
            "UPDATE polls_choice SET votes = votes + 1
             WHERE id = $1 AND question_id = $2
             RETURNING id, question_id, choice_text, votes"
        )
        .bind(choice_id)
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(choice)
    }

    async fn create_question(&self, new: &NewQuestion) -> Result<Question, StoreError> {
        validate_new_question(new)?;

        let mut tx = self.pool.begin().await?;

        let question = sqlx::query_as::<_, Question>(
            "INSERT INTO polls_question (question_text, pub_date)
             VALUES ($1, $2)
             RETURNING id, question_text, pub_date"
        )
        .bind(&new.question_text)
        .bind(new.pub_date)
        .fetch_one(&mut *tx)
        .await?;

        for choice in &new.choices {
            sqlx::query(
                "INSERT INTO polls_choice (question_id, choice_text, votes)
                 VALUES ($1, $2, $3)"
            )
            .bind(question.id)
            .bind(&choice.choice_text)
            .bind(choice.votes)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(question)
    }

    async fn delete_question(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM polls_question WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_questions(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM polls_question")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
