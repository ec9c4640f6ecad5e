//! HTTP handlers for question endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::question::{
    ApproveQuestionCommand, ApproveQuestionHandler, DeleteQuestionCommand, DeleteQuestionHandler,
    ListQuestionsHandler, ListQuestionsQuery, PushToForumCommand, PushToForumHandler,
    SubmitQuestionCommand, SubmitQuestionHandler,
};
use crate::domain::foundation::{QuestionId, VerifiedIdentity};
use crate::domain::question::{QuestionError, QuestionStatus};

use super::dto::{
    ErrorResponse, ListQuestionsParams, QuestionActionRequest, QuestionListResponse,
    QuestionResponse, SuccessResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct QuestionHandlers {
    submit_handler: Arc<SubmitQuestionHandler>,
    list_handler: Arc<ListQuestionsHandler>,
    approve_handler: Arc<ApproveQuestionHandler>,
    delete_handler: Arc<DeleteQuestionHandler>,
    push_handler: Arc<PushToForumHandler>,
}

impl QuestionHandlers {
    pub fn new(
        submit_handler: Arc<SubmitQuestionHandler>,
        list_handler: Arc<ListQuestionsHandler>,
        approve_handler: Arc<ApproveQuestionHandler>,
        delete_handler: Arc<DeleteQuestionHandler>,
        push_handler: Arc<PushToForumHandler>,
    ) -> Self {
        Self {
            submit_handler,
            list_handler,
            approve_handler,
            delete_handler,
            push_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/questions - Dispatch on the `action` field.
///
/// Every action requires a verified caller. Submission is anonymous
/// toward other users, not toward the platform, so it still needs a
/// token; only the admin actions check an access level on top.
///
/// The body is deserialized manually so an unknown action maps to 400
/// rather than the framework's generic deserialization rejection.
pub async fn post_question(
    State(handlers): State<QuestionHandlers>,
    RequireAuth(identity): RequireAuth,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let request: QuestionActionRequest = match serde_json::from_value(body) {
        Ok(request) => request,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(format!("Invalid request: {}", e))),
            )
                .into_response()
        }
    };

    match request {
        QuestionActionRequest::Submit {
            experience_id,
            question,
        } => submit(handlers, experience_id, question).await,
        QuestionActionRequest::Approve { id, answer } => {
            approve(handlers, identity, id, answer).await
        }
        QuestionActionRequest::Delete { id } => delete(handlers, identity, id).await,
        QuestionActionRequest::PushToForums { id, question_text } => {
            push_to_forums(handlers, identity, id, question_text).await
        }
    }
}

/// GET /api/questions - List questions in an experience, admin only.
pub async fn list_questions(
    State(handlers): State<QuestionHandlers>,
    RequireAuth(identity): RequireAuth,
    Query(params): Query<ListQuestionsParams>,
) -> Response {
    let status = match QuestionStatus::parse(&params.status) {
        Ok(status) => status,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(format!(
                    "Unknown status: {}",
                    params.status
                ))),
            )
                .into_response()
        }
    };

    let query = ListQuestionsQuery {
        user_id: identity.user_id,
        experience_id: params.experience_id,
        status,
    };

    match handlers.list_handler.handle(query).await {
        Ok(questions) => {
            let response = QuestionListResponse {
                questions: questions.iter().map(QuestionResponse::from).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_question_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Action handlers
// ════════════════════════════════════════════════════════════════════════════

async fn submit(handlers: QuestionHandlers, experience_id: String, question: String) -> Response {
    let cmd = SubmitQuestionCommand {
        experience_id,
        question,
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(question) => {
            (StatusCode::CREATED, Json(QuestionResponse::from(&question))).into_response()
        }
        Err(e) => handle_question_error(e),
    }
}

async fn approve(
    handlers: QuestionHandlers,
    identity: VerifiedIdentity,
    id: String,
    answer: String,
) -> Response {
    let question_id = match parse_question_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = ApproveQuestionCommand {
        user_id: identity.user_id,
        question_id,
        answer,
    };

    match handlers.approve_handler.handle(cmd).await {
        Ok(question) => (StatusCode::OK, Json(QuestionResponse::from(&question))).into_response(),
        Err(e) => handle_question_error(e),
    }
}

async fn delete(handlers: QuestionHandlers, identity: VerifiedIdentity, id: String) -> Response {
    let question_id = match parse_question_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = DeleteQuestionCommand {
        user_id: identity.user_id,
        question_id,
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => (StatusCode::OK, Json(SuccessResponse::ok())).into_response(),
        Err(e) => handle_question_error(e),
    }
}

async fn push_to_forums(
    handlers: QuestionHandlers,
    identity: VerifiedIdentity,
    id: String,
    question_text: String,
) -> Response {
    let question_id = match parse_question_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = PushToForumCommand {
        user_id: identity.user_id,
        question_id,
        question_text,
    };

    match handlers.push_handler.handle(cmd).await {
        Ok(_) => (StatusCode::OK, Json(SuccessResponse::ok())).into_response(),
        Err(e) => handle_question_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn parse_question_id(raw: &str) -> Result<QuestionId, Response> {
    raw.parse::<QuestionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid question ID")),
        )
            .into_response()
    })
}

fn handle_question_error(error: QuestionError) -> Response {
    let status = match &error {
        QuestionError::NotFound(_) => StatusCode::NOT_FOUND,
        QuestionError::Forbidden => StatusCode::FORBIDDEN,
        QuestionError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
        QuestionError::Upstream(_) | QuestionError::Infrastructure(_) => {
            tracing::error!(error = %error, "question operation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        Json(ErrorResponse::new(error.message(), error.code().to_string())),
    )
        .into_response()
}
