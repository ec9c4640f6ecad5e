//! Authentication middleware and extractors for axum.
//!
//! The middleware validates Bearer tokens through the `TokenVerifier` port
//! and injects a `VerifiedIdentity` into request extensions. Handlers pick
//! the identity up with the `RequireAuth` extractor.
//!
//! ```text
//! Request -> auth_middleware -> injects VerifiedIdentity into extensions
//!                                       |
//!                               Handler -> RequireAuth
//! ```
//!
//! Keeping the middleware on the port means swapping the platform JWT
//! verifier for `MockTokenVerifier` in tests changes nothing here.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::{AuthError, VerifiedIdentity};
use crate::ports::TokenVerifier;

/// Auth middleware state, the injected token verifier.
pub type AuthState = Arc<dyn TokenVerifier>;

/// Validates Bearer tokens and injects the verified identity.
///
/// 1. Extracts the token from the `Authorization: Bearer <token>` header
/// 2. Verifies it through the `TokenVerifier` port
/// 3. On success, inserts `VerifiedIdentity` into request extensions
/// 4. On a missing header, continues without an identity; `RequireAuth`
///    rejects with 401 at the handler
/// 5. On an invalid token, returns 401 immediately
pub async fn auth_middleware(
    State(verifier): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match token {
        Some(token) => match verifier.verify(token).await {
            Ok(identity) => {
                request.extensions_mut().insert(identity);
                next.run(request).await
            }
            Err(e) => {
                let (status, message) = match &e {
                    AuthError::TokenExpired => (StatusCode::UNAUTHORIZED, "Token expired"),
                    AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token"),
                    AuthError::ServiceUnavailable(msg) => {
                        tracing::error!("Token verification unavailable: {}", msg);
                        (
                            StatusCode::SERVICE_UNAVAILABLE,
                            "Authentication service unavailable",
                        )
                    }
                };

                (
                    status,
                    Json(serde_json::json!({
                        "error": message,
                        "code": "AUTH_ERROR"
                    })),
                )
                    .into_response()
            }
        },
        // No token. Handlers enforce authentication via RequireAuth.
        None => next.run(request).await,
    }
}

/// Extractor that requires a verified caller.
///
/// Returns 401 if the middleware did not inject an identity.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub VerifiedIdentity);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<VerifiedIdentity>()
                .cloned()
                .map(RequireAuth)
                .ok_or(AuthRejection::Unauthenticated)
        })
    }
}

/// Rejection for requests that require authentication.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthRejection::Unauthenticated => (StatusCode::UNAUTHORIZED, "Authentication required"),
        };

        (
            status,
            Json(serde_json::json!({
                "error": message,
                "code": "UNAUTHENTICATED"
            })),
        )
            .into_response()
    }
}
