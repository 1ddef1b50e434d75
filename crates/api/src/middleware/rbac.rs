//! Role-gate middleware.
//!
//! Layered after [`super::auth::require_session`]; reads the resolved
//! principal from request extensions and rejects requests below the required
//! role. The rejection message is generic so callers learn nothing about why
//! the gate closed beyond "not enough privilege".

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use domain::models::{AdminRole, SessionPrincipal};
use serde_json::json;

/// Middleware requiring at least the `admin` role.
pub async fn require_admin(req: Request<Body>, next: Next) -> Response {
    require_role_impl(req, next, AdminRole::Admin).await
}

/// Middleware requiring the `super_admin` role.
pub async fn require_super_admin(req: Request<Body>, next: Next) -> Response {
    require_role_impl(req, next, AdminRole::SuperAdmin).await
}

async fn require_role_impl(req: Request<Body>, next: Next, required: AdminRole) -> Response {
    let principal = match req.extensions().get::<SessionPrincipal>() {
        Some(p) => p,
        None => {
            tracing::warn!("Role gate reached without a session principal in extensions");
            return unauthenticated_response();
        }
    };

    // An unrecognised stored role ranks 0 and fails every check.
    if !principal.has_role(required) {
        return forbidden_response();
    }

    next.run(req).await
}

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

fn forbidden_response() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({
            "error": "forbidden",
            "message": "Insufficient permissions"
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_response_status() {
        let response = forbidden_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_unauthenticated_response_status() {
        let response = unauthenticated_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
