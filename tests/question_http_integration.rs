//! End-to-end tests for the question HTTP API.
//!
//! These drive the real router through tower's `oneshot`, with an
//! in-memory repository and mock platform adapters behind the ports.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::{middleware, Router};
use serde_json::{json, Value};
use tower::ServiceExt;

use askbox::adapters::http::middleware::auth_middleware;
use askbox::adapters::http::{question_routes, QuestionHandlers};
use askbox::adapters::platform::{MockAccessGateway, MockForumPublisher, MockTokenVerifier, MockNotifier};
use askbox::application::handlers::question::{
    ApproveQuestionHandler, DeleteQuestionHandler, ListQuestionsHandler, PushToForumHandler,
    SubmitQuestionHandler,
};
use askbox::domain::foundation::{DomainError, ErrorCode, ExperienceId, QuestionId};
use askbox::domain::question::{Question, QuestionStatus};
use askbox::ports::{
    AccessGateway, AccessLevel, ForumPublisher, Notifier, QuestionRepository, TokenVerifier,
};

// ─────────────────────────────────────────────────────────────────────
// Test infrastructure
// ─────────────────────────────────────────────────────────────────────

/// In-memory question store for driving the HTTP layer.
#[derive(Default)]
struct InMemoryRepository {
    questions: Mutex<Vec<Question>>,
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn save(&self, question: &Question) -> Result<(), DomainError> {
        self.questions.lock().unwrap().push(question.clone());
        Ok(())
    }

    async fn update(&self, question: &Question) -> Result<(), DomainError> {
        let mut questions = self.questions.lock().unwrap();
        match questions.iter().position(|q| q.id() == question.id()) {
            Some(pos) => {
                questions[pos] = question.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::QuestionNotFound,
                "Question not found",
            )),
        }
    }

    async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, DomainError> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id() == id)
            .cloned())
    }

    async fn list_by_status(
        &self,
        experience_id: &ExperienceId,
        status: QuestionStatus,
    ) -> Result<Vec<Question>, DomainError> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.experience_id() == experience_id && q.status() == status)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &QuestionId) -> Result<(), DomainError> {
        let mut questions = self.questions.lock().unwrap();
        match questions.iter().position(|q| q.id() == id) {
            Some(pos) => {
                questions.remove(pos);
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::QuestionNotFound,
                "Question not found",
            )),
        }
    }
}

struct TestApp {
    router: Router,
    repository: Arc<InMemoryRepository>,
    publisher: Arc<MockForumPublisher>,
}

/// Builds the full router with an admin token "admin-token" for
/// `user_admin` and a member token "member-token" for `user_member`,
/// both scoped to experience `exp_1`.
fn test_app() -> TestApp {
    let repository = Arc::new(InMemoryRepository::default());
    let publisher = Arc::new(MockForumPublisher::new());
    let gateway = Arc::new(
        MockAccessGateway::new()
            .with_level("user_admin", "exp_1", AccessLevel::Admin)
            .with_level("user_member", "exp_1", AccessLevel::Member),
    );
    let notifier = Arc::new(MockNotifier::new());
    let verifier: Arc<dyn TokenVerifier> = Arc::new(
        MockTokenVerifier::new()
            .with_identity("admin-token", "user_admin")
            .with_identity("member-token", "user_member"),
    );

    let repo: Arc<dyn QuestionRepository> = repository.clone();
    let access: Arc<dyn AccessGateway> = gateway;
    let forum: Arc<dyn ForumPublisher> = publisher.clone();
    let notify: Arc<dyn Notifier> = notifier;

    let handlers = QuestionHandlers::new(
        Arc::new(SubmitQuestionHandler::new(repo.clone())),
        Arc::new(ListQuestionsHandler::new(repo.clone(), access.clone())),
        Arc::new(ApproveQuestionHandler::new(
            repo.clone(),
            access.clone(),
            forum.clone(),
            notify,
        )),
        Arc::new(DeleteQuestionHandler::new(repo.clone(), access.clone())),
        Arc::new(PushToForumHandler::new(repo, access, forum)),
    );

    let router = Router::new()
        .nest("/api/questions", question_routes(handlers))
        .layer(middleware::from_fn_with_state(verifier, auth_middleware));

    TestApp {
        router,
        repository,
        publisher,
    }
}

fn post_request(body: Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/questions")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// ─────────────────────────────────────────────────────────────────────
// Submission
// ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn authenticated_submission_returns_created() {
    let app = test_app();

    let response = app
        .router
        .oneshot(post_request(
            json!({"action": "submit", "experienceId": "exp_1", "question": "Is X worth it?"}),
            Some("member-token"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["experienceId"], "exp_1");
    assert_eq!(body["status"], "PENDING");
    assert_eq!(app.repository.questions.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn submission_without_token_returns_unauthorized() {
    let app = test_app();

    let response = app
        .router
        .oneshot(post_request(
            json!({"action": "submit", "experienceId": "exp_1", "question": "Is X worth it?"}),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(app.repository.questions.lock().unwrap().is_empty());
}

#[tokio::test]
async fn oversized_question_is_rejected() {
    let app = test_app();

    let response = app
        .router
        .oneshot(post_request(
            json!({"action": "submit", "experienceId": "exp_1", "question": "x".repeat(101)}),
            Some("member-token"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.repository.questions.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_action_returns_bad_request() {
    let app = test_app();

    let response = app
        .router
        .oneshot(post_request(
            json!({"action": "archive", "id": "x"}),
            Some("member-token"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ─────────────────────────────────────────────────────────────────────
// Authentication and authorization
// ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn invalid_token_returns_unauthorized() {
    let app = test_app();

    let response = app
        .router
        .oneshot(post_request(
            json!({"action": "submit", "experienceId": "exp_1", "question": "hi"}),
            Some("bogus"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn approve_without_token_returns_unauthorized() {
    let app = test_app();

    let response = app
        .router
        .oneshot(post_request(
            json!({"action": "approve", "id": QuestionId::new().to_string(), "answer": "Yes"}),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn list_without_token_returns_unauthorized() {
    let app = test_app();

    let response = app
        .router
        .oneshot(get_request(
            "/api/questions?experienceId=exp_1&status=PENDING",
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn list_with_invalid_token_returns_unauthorized() {
    let app = test_app();

    let response = app
        .router
        .oneshot(get_request(
            "/api/questions?experienceId=exp_1&status=PENDING",
            Some("bogus"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn approve_as_member_returns_forbidden() {
    let app = test_app();
    let question = submit(&app).await;

    let response = app
        .router
        .clone()
        .oneshot(post_request(
            json!({"action": "approve", "id": question, "answer": "Yes"}),
            Some("member-token"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(app.publisher.post_count(), 0);
}

#[tokio::test]
async fn approve_unknown_question_returns_not_found() {
    let app = test_app();

    let response = app
        .router
        .oneshot(post_request(
            json!({"action": "approve", "id": QuestionId::new().to_string(), "answer": "Yes"}),
            Some("admin-token"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ─────────────────────────────────────────────────────────────────────
// Review lifecycle
// ─────────────────────────────────────────────────────────────────────

async fn submit(app: &TestApp) -> String {
    let response = app
        .router
        .clone()
        .oneshot(post_request(
            json!({"action": "submit", "experienceId": "exp_1", "question": "Is X worth it?"}),
            Some("member-token"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn admin_approval_publishes_answer_post() {
    let app = test_app();
    let question = submit(&app).await;

    let response = app
        .router
        .clone()
        .oneshot(post_request(
            json!({"action": "approve", "id": question, "answer": "Yes, definitely."}),
            Some("admin-token"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "APPROVED");
    assert_eq!(body["answer"], "Yes, definitely.");
    assert_eq!(body["pushedToForum"], true);

    let posts = app.publisher.posts();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].1, "Somebody asked:");
    assert_eq!(posts[0].2, "\"Is X worth it?\"\n\nYes, definitely.");
}

#[tokio::test]
async fn approved_questions_appear_in_approved_list() {
    let app = test_app();
    let question = submit(&app).await;

    app.router
        .clone()
        .oneshot(post_request(
            json!({"action": "approve", "id": question, "answer": "Yes"}),
            Some("admin-token"),
        ))
        .await
        .unwrap();

    let response = app
        .router
        .clone()
        .oneshot(get_request(
            "/api/questions?experienceId=exp_1&status=APPROVED",
            Some("admin-token"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["questions"].as_array().unwrap().len(), 1);

    let pending = app
        .router
        .clone()
        .oneshot(get_request(
            "/api/questions?experienceId=exp_1&status=PENDING",
            Some("admin-token"),
        ))
        .await
        .unwrap();
    let pending_body = body_json(pending).await;
    assert!(pending_body["questions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn list_with_unknown_status_returns_bad_request() {
    let app = test_app();

    let response = app
        .router
        .oneshot(get_request(
            "/api/questions?experienceId=exp_1&status=ARCHIVED",
            Some("admin-token"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_as_member_returns_forbidden() {
    let app = test_app();

    let response = app
        .router
        .oneshot(get_request(
            "/api/questions?experienceId=exp_1&status=PENDING",
            Some("member-token"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn delete_removes_the_question() {
    let app = test_app();
    let question = submit(&app).await;

    let response = app
        .router
        .clone()
        .oneshot(post_request(
            json!({"action": "delete", "id": question}),
            Some("admin-token"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert!(app.repository.questions.lock().unwrap().is_empty());
}

// ─────────────────────────────────────────────────────────────────────
// Forum push
// ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn push_to_forums_creates_one_post_even_when_repeated() {
    let app = test_app();
    let question = submit(&app).await;

    let push = json!({
        "action": "pushToForums",
        "id": question,
        "questionText": "Is X worth it?"
    });

    let first = app
        .router
        .clone()
        .oneshot(post_request(push.clone(), Some("admin-token")))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let first_body = body_json(first).await;
    assert_eq!(first_body["success"], true);

    let second = app
        .router
        .clone()
        .oneshot(post_request(push, Some("admin-token")))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::OK);

    assert_eq!(app.publisher.post_count(), 1);
    let posts = app.publisher.posts();
    assert_eq!(posts[0].2, "\"Is X worth it?\"");
}

#[tokio::test]
async fn push_as_member_returns_forbidden() {
    let app = test_app();
    let question = submit(&app).await;

    let response = app
        .router
        .clone()
        .oneshot(post_request(
            json!({"action": "pushToForums", "id": question, "questionText": "Is X worth it?"}),
            Some("member-token"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(app.publisher.post_count(), 0);
}
