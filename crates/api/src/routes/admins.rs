//! Admin account management routes (super_admin only).
//!
//! Every successful mutation records exactly one activity log entry and
//! notifies the active super_admins; both writes are detached, so the
//! account change stands even if the audit or notification insert fails.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Extension, Json,
};
use domain::models::{AdminAccount, CreateAdminAccountInput, SessionPrincipal};
use domain::services::access::{forbid_self_action, SelfProtectedOp};
use domain::services::activity::ActivityRecord;
use domain::services::notify;
use persistence::repositories::{
    ActivityLogRepository, AdminAccountRepository, NotificationRepository,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::routes::client_ip;

/// List all admin accounts.
///
/// GET /api/v1/admins
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<AdminAccount>>, ApiError> {
    let accounts = AdminAccountRepository::new(state.pool.clone()).list().await?;
    Ok(Json(accounts))
}

/// Create a new admin account.
///
/// POST /api/v1/admins
pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<SessionPrincipal>,
    headers: HeaderMap,
    Json(input): Json<CreateAdminAccountInput>,
) -> Result<(StatusCode, Json<AdminAccount>), ApiError> {
    input.validate()?;

    let password_hash = shared::password::hash_password(&input.password)
        .map_err(|e| ApiError::Internal(format!("Password error: {}", e)))?;

    let account = AdminAccountRepository::new(state.pool.clone())
        .insert(&input, &password_hash)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
                ApiError::Conflict("Username or email already registered".into())
            }
            _ => ApiError::from(e),
        })?;

    let ip = client_ip(&headers);
    ActivityLogRepository::new(state.pool.clone()).record_detached({
        let mut record = ActivityRecord::new(actor.id, "add_admin")
            .with_description(format!("Added new admin user: {}", account.username));
        if let Some(ip) = ip {
            record = record.with_ip(ip);
        }
        record.build()
    });

    let (target, draft) = notify::account_changed(&format!(
        "{} created admin account '{}'",
        actor.username, account.username
    ));
    NotificationRepository::new(state.pool.clone()).dispatch_detached(target, draft);

    Ok((StatusCode::CREATED, Json(account)))
}

/// Request body for the status toggle.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SetStatusRequest {
    pub is_active: bool,
}

/// Activate or deactivate an account.
///
/// PATCH /api/v1/admins/:id/status
///
/// Rejected with 403 when the target is the caller itself, regardless of
/// role; an admin cannot lock itself out.
pub async fn set_status(
    State(state): State<AppState>,
    Extension(actor): Extension<SessionPrincipal>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(request): Json<SetStatusRequest>,
) -> Result<Json<AdminAccount>, ApiError> {
    forbid_self_action(actor.id, id, SelfProtectedOp::Deactivate)
        .map_err(|e| ApiError::Forbidden(e.to_string()))?;

    let account = AdminAccountRepository::new(state.pool.clone())
        .set_active(id, request.is_active)
        .await?
        .ok_or_else(|| ApiError::NotFound("Admin account not found".into()))?;

    let status_word = if account.is_active { "active" } else { "inactive" };

    let ip = client_ip(&headers);
    ActivityLogRepository::new(state.pool.clone()).record_detached({
        let mut record = ActivityRecord::new(actor.id, "toggle_admin_status")
            .with_description(format!("Toggled admin '{}' to {}", account.username, status_word));
        if let Some(ip) = ip {
            record = record.with_ip(ip);
        }
        record.build()
    });

    let (target, draft) = notify::account_changed(&format!(
        "{} set admin account '{}' to {}",
        actor.username, account.username, status_word
    ));
    NotificationRepository::new(state.pool.clone()).dispatch_detached(target, draft);

    Ok(Json(account))
}

/// Delete an account.
///
/// DELETE /api/v1/admins/:id
///
/// Self-deletion is rejected with 403 like self-deactivation. Activity log
/// entries written by the deleted account keep their admin_id and render
/// with an unknown author from then on.
pub async fn remove(
    State(state): State<AppState>,
    Extension(actor): Extension<SessionPrincipal>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ApiError> {
    forbid_self_action(actor.id, id, SelfProtectedOp::Delete)
        .map_err(|e| ApiError::Forbidden(e.to_string()))?;

    let repo = AdminAccountRepository::new(state.pool.clone());
    let target_account = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Admin account not found".into()))?;

    let deleted = repo.delete(id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Admin account not found".into()));
    }

    let ip = client_ip(&headers);
    ActivityLogRepository::new(state.pool.clone()).record_detached({
        let mut record = ActivityRecord::new(actor.id, "delete_admin")
            .with_description(format!("Deleted admin user: {}", target_account.username));
        if let Some(ip) = ip {
            record = record.with_ip(ip);
        }
        record.build()
    });

    let (target, draft) = notify::account_changed(&format!(
        "{} deleted admin account '{}'",
        actor.username, target_account.username
    ));
    NotificationRepository::new(state.pool.clone()).dispatch_detached(target, draft);

    Ok(Json(json!({ "message": "Admin account deleted" })))
}
