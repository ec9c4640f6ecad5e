//! PostgreSQL implementation of QuestionRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    DomainError, ErrorCode, ExperienceId, PostId, QuestionId, Timestamp,
};
use crate::domain::question::{Question, QuestionStatus};
use crate::ports::QuestionRepository;

/// PostgreSQL implementation of QuestionRepository.
#[derive(Clone)]
pub struct PostgresQuestionRepository {
    pool: PgPool,
}

impl PostgresQuestionRepository {
    /// Creates a new PostgresQuestionRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for PostgresQuestionRepository {
    async fn save(&self, question: &Question) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO questions (
                id, experience_id, question, status, answer, answered_at,
                pushed_to_forum, forum_post_id, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(question.id().as_uuid())
        .bind(question.experience_id().as_str())
        .bind(question.question())
        .bind(question.status().as_str())
        .bind(question.answer())
        .bind(question.answered_at().map(|t| *t.as_datetime()))
        .bind(question.is_pushed_to_forum())
        .bind(question.forum_post_id().map(|p| p.as_str()))
        .bind(question.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert question: {}", e),
            )
        })?;

        Ok(())
    }

    async fn update(&self, question: &Question) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE questions SET
                status = $2,
                answer = $3,
                answered_at = $4,
                pushed_to_forum = $5,
                forum_post_id = $6
            WHERE id = $1
            "#,
        )
        .bind(question.id().as_uuid())
        .bind(question.status().as_str())
        .bind(question.answer())
        .bind(question.answered_at().map(|t| *t.as_datetime()))
        .bind(question.is_pushed_to_forum())
        .bind(question.forum_post_id().map(|p| p.as_str()))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update question: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::QuestionNotFound,
                format!("Question not found: {}", question.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, experience_id, question, status, answer, answered_at,
                   pushed_to_forum, forum_post_id, created_at
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch question: {}", e),
            )
        })?;

        row.map(row_to_question).transpose()
    }

    async fn list_by_status(
        &self,
        experience_id: &ExperienceId,
        status: QuestionStatus,
    ) -> Result<Vec<Question>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, experience_id, question, status, answer, answered_at,
                   pushed_to_forum, forum_post_id, created_at
            FROM questions
            WHERE experience_id = $1 AND status = $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(experience_id.as_str())
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list questions: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_question).collect()
    }

    async fn delete(&self, id: &QuestionId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete question: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::QuestionNotFound,
                format!("Question not found: {}", id),
            ));
        }

        Ok(())
    }
}

fn row_to_question(row: sqlx::postgres::PgRow) -> Result<Question, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(db_err)?;
    let experience_id: String = row.try_get("experience_id").map_err(db_err)?;
    let question: String = row.try_get("question").map_err(db_err)?;
    let status: String = row.try_get("status").map_err(db_err)?;
    let answer: Option<String> = row.try_get("answer").map_err(db_err)?;
    let answered_at: Option<chrono::DateTime<chrono::Utc>> =
        row.try_get("answered_at").map_err(db_err)?;
    let pushed_to_forum: bool = row.try_get("pushed_to_forum").map_err(db_err)?;
    let forum_post_id: Option<String> = row.try_get("forum_post_id").map_err(db_err)?;
    let created_at: chrono::DateTime<chrono::Utc> = row.try_get("created_at").map_err(db_err)?;

    Ok(Question::reconstitute(
        QuestionId::from_uuid(id),
        ExperienceId::new(experience_id)?,
        question,
        QuestionStatus::parse(&status)?,
        answer,
        answered_at.map(Timestamp::from_datetime),
        pushed_to_forum,
        forum_post_id.map(PostId::new).transpose()?,
        Timestamp::from_datetime(created_at),
    ))
}

fn db_err(e: sqlx::Error) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to read question row: {}", e),
    )
}
