//! Session authentication middleware.
//!
//! Resolves the session cookie to a [`SessionPrincipal`] and stores it in
//! request extensions for downstream handlers and the role-gate middleware.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use persistence::repositories::SessionRepository;
use serde_json::json;
use shared::token::token_digest;

use crate::app::AppState;
use crate::services::cookies::SessionCookie;

/// Middleware that requires a valid session.
///
/// Requests without a session cookie, with an expired session, or whose
/// account has been deactivated all receive the same generic 401; none of
/// those cases is distinguishable from outside.
pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let cookie = SessionCookie::from_config(&state.config.session);

    let token = match cookie.extract_token(req.headers()) {
        Some(token) => token.to_string(),
        None => return unauthenticated_response(),
    };

    let repo = SessionRepository::new(state.pool.clone());
    match repo.find_principal(&token_digest(&token)).await {
        Ok(Some(principal)) => {
            req.extensions_mut().insert(principal);
            next.run(req).await
        }
        Ok(None) => unauthenticated_response(),
        Err(e) => {
            tracing::error!("Session lookup failed: {}", e);
            internal_error_response("Authentication service unavailable")
        }
    }
}

/// Helper to create the generic unauthenticated response.
fn unauthenticated_response() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": "unauthenticated",
            "message": "Login required"
        })),
    )
        .into_response()
}

/// Helper to create internal error response.
fn internal_error_response(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "internal_error",
            "message": message
        })),
    )
        .into_response()
}
