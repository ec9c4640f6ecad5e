//! HTTP DTOs for question endpoints.
//!
//! These types decouple the HTTP API from domain types. The wire format is
//! camelCase JSON with a discriminating `action` field on the write endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::question::{Question, QuestionStatus};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/questions`, discriminated by `action`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum QuestionActionRequest {
    /// Anonymous submission of a new question.
    #[serde(rename_all = "camelCase")]
    Submit {
        experience_id: String,
        question: String,
    },
    /// Admin approval with an answer.
    #[serde(rename_all = "camelCase")]
    Approve { id: String, answer: String },
    /// Admin deletion.
    #[serde(rename_all = "camelCase")]
    Delete { id: String },
    /// Admin push of an approved question to the community forum.
    #[serde(rename_all = "camelCase")]
    PushToForums { id: String, question_text: String },
}

/// Query parameters for `GET /api/questions`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuestionsParams {
    pub experience_id: String,
    pub status: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A question as returned to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub id: String,
    pub experience_id: String,
    pub question: String,
    pub status: QuestionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answered_at: Option<String>,
    pub pushed_to_forum: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forum_post_id: Option<String>,
    pub created_at: String,
}

impl From<&Question> for QuestionResponse {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id().to_string(),
            experience_id: question.experience_id().to_string(),
            question: question.question().to_string(),
            status: question.status(),
            answer: question.answer().map(str::to_string),
            answered_at: question.answered_at().map(|t| t.to_rfc3339()),
            pushed_to_forum: question.is_pushed_to_forum(),
            forum_post_id: question.forum_post_id().map(|id| id.to_string()),
            created_at: question.created_at().to_rfc3339(),
        }
    }
}

/// List response for `GET /api/questions`.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionListResponse {
    pub questions: Vec<QuestionResponse>,
}

/// Acknowledgement for actions that return no entity.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Uniform error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message, "BAD_REQUEST")
    }
}
