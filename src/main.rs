//! Service entry point.
//!
//! Loads configuration, connects to PostgreSQL, wires the platform
//! adapters into the application handlers, and serves the HTTP API.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{middleware, routing::get, Json, Router};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use askbox::adapters::http::middleware::{auth_middleware, AuthState};
use askbox::adapters::http::{question_routes, QuestionHandlers};
use askbox::adapters::platform::{
    PlatformAccessGateway, PlatformApiConfig, PlatformClient, PlatformForumPublisher,
    PlatformNotifier, PlatformTokenVerifier, TokenVerifierConfig,
};
use askbox::adapters::postgres::PostgresQuestionRepository;
use askbox::application::handlers::question::{
    ApproveQuestionHandler, DeleteQuestionHandler, ListQuestionsHandler, PushToForumHandler,
    SubmitQuestionHandler,
};
use askbox::config::AppConfig;
use askbox::domain::foundation::UserId;
use askbox::ports::{AccessGateway, ForumPublisher, Notifier, QuestionRepository, TokenVerifier};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting askbox");

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    if config.database.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;
        tracing::info!("Migrations complete");
    }

    // Platform adapters share one authenticated client.
    let agent_user_id = UserId::new(config.platform.agent_user_id.clone())
        .context("Invalid platform agent user id")?;
    let platform_client = PlatformClient::new(PlatformApiConfig::new(
        config.platform.api_base_url.clone(),
        config.platform.api_key.clone(),
        agent_user_id,
    ));

    let repository: Arc<dyn QuestionRepository> =
        Arc::new(PostgresQuestionRepository::new(pool));
    let access_gateway: Arc<dyn AccessGateway> =
        Arc::new(PlatformAccessGateway::new(platform_client.clone()));
    let forum_publisher: Arc<dyn ForumPublisher> =
        Arc::new(PlatformForumPublisher::new(platform_client.clone()));
    let notifier: Arc<dyn Notifier> = Arc::new(PlatformNotifier::new(platform_client));
    let token_verifier: Arc<dyn TokenVerifier> =
        Arc::new(PlatformTokenVerifier::new(TokenVerifierConfig::new(
            config.platform.token_issuer.clone(),
            config.platform.token_audience.clone(),
            config.platform.token_signing_secret.clone(),
        )));

    let handlers = QuestionHandlers::new(
        Arc::new(SubmitQuestionHandler::new(repository.clone())),
        Arc::new(ListQuestionsHandler::new(
            repository.clone(),
            access_gateway.clone(),
        )),
        Arc::new(ApproveQuestionHandler::new(
            repository.clone(),
            access_gateway.clone(),
            forum_publisher.clone(),
            notifier,
        )),
        Arc::new(DeleteQuestionHandler::new(
            repository.clone(),
            access_gateway.clone(),
        )),
        Arc::new(PushToForumHandler::new(
            repository,
            access_gateway,
            forum_publisher,
        )),
    );

    let app = build_router(&config, handlers, token_verifier);

    let addr = config.server.bind_addr().context("Invalid bind address")?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn build_router(config: &AppConfig, handlers: QuestionHandlers, verifier: AuthState) -> Router {
    let cors = match config.server.cors_origins_list().as_slice() {
        [] => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        origins => {
            let origins: Vec<_> = origins
                .iter()
                .filter_map(|o| o.parse::<axum::http::HeaderValue>().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    };

    Router::new()
        .route("/health", get(health))
        .nest("/api/questions", question_routes(handlers))
        .layer(middleware::from_fn_with_state(verifier, auth_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
