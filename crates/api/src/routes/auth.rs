//! Authentication routes: login, logout and the current principal.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Extension, Json,
};
use domain::models::SessionPrincipal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::routes::{client_ip, user_agent};
use crate::services::auth::{AuthError, AuthService};
use crate::services::cookies::SessionCookie;

/// Request body for login.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response body for successful login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LoginResponse {
    pub admin: SessionPrincipal,
}

/// Log in with username and password.
///
/// POST /api/v1/auth/login
///
/// Bad username, bad password and inactive account all produce the same
/// 401 body; the session cookie is only set on success.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let service = AuthService::new(state.pool.clone(), state.config.session.ttl_secs);
    let outcome = service
        .login(
            &request.username,
            &request.password,
            client_ip(&headers),
            user_agent(&headers),
        )
        .await
        .map_err(|e| match e {
            AuthError::InvalidCredentials => ApiError::InvalidCredentials,
            AuthError::Password(e) => ApiError::Internal(format!("Password error: {}", e)),
            AuthError::Storage(db_err) => ApiError::from(db_err),
        })?;

    let mut response_headers = HeaderMap::new();
    SessionCookie::from_config(&state.config.session)
        .add_to(&mut response_headers, &outcome.session_token);

    Ok((
        StatusCode::OK,
        response_headers,
        Json(LoginResponse {
            admin: outcome.principal,
        }),
    ))
}

/// Log out, destroying the server-side session.
///
/// POST /api/v1/auth/logout
///
/// Always clears the cookie, whether or not a live session existed, so a
/// stale browser state converges to logged-out.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let cookie = SessionCookie::from_config(&state.config.session);

    if let Some(token) = cookie.extract_token(&headers) {
        let service = AuthService::new(state.pool.clone(), state.config.session.ttl_secs);
        service
            .logout(token, client_ip(&headers))
            .await
            .map_err(|e| match e {
                AuthError::Storage(db_err) => ApiError::from(db_err),
                other => ApiError::Internal(other.to_string()),
            })?;
    }

    let mut response_headers = HeaderMap::new();
    cookie.add_clear_to(&mut response_headers);

    Ok((
        StatusCode::OK,
        response_headers,
        Json(json!({ "message": "You have been logged out successfully" })),
    ))
}

/// The current session's principal.
///
/// GET /api/v1/auth/me
pub async fn me(Extension(principal): Extension<SessionPrincipal>) -> Json<SessionPrincipal> {
    Json(principal)
}
