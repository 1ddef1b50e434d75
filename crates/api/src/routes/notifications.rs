//! Notification inbox routes.
//!
//! Every route is scoped to the session principal's own rows. A notification
//! belonging to someone else behaves exactly like a missing one, so
//! ownership cannot be probed through this surface.

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use domain::models::{Notification, SessionPrincipal};
use persistence::repositories::{NotificationCounts, NotificationRepository, ReadFilter};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;

/// Query parameters for the inbox listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ListQuery {
    /// "unread" or "read"; anything else (or absent) lists everything.
    pub status: Option<String>,
}

/// Inbox listing response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListResponse {
    pub items: Vec<Notification>,
    pub counts: NotificationCounts,
}

/// List the caller's notifications.
///
/// GET /api/v1/notifications?status=unread|read
pub async fn list(
    State(state): State<AppState>,
    Extension(principal): Extension<SessionPrincipal>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListResponse>, ApiError> {
    let filter = match query.status.as_deref() {
        Some("unread") => ReadFilter::Unread,
        Some("read") => ReadFilter::Read,
        _ => ReadFilter::All,
    };

    let repo = NotificationRepository::new(state.pool.clone());
    let items = repo.list_for_admin(principal.id, filter).await?;
    let counts = repo.counts(principal.id).await?;

    Ok(Json(ListResponse { items, counts }))
}

/// Unread count for the navigation badge. Called on every page render.
///
/// GET /api/v1/notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    Extension(principal): Extension<SessionPrincipal>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let unread = NotificationRepository::new(state.pool.clone())
        .unread_count(principal.id)
        .await?;

    Ok(Json(json!({ "unread": unread })))
}

/// Mark one notification read.
///
/// POST /api/v1/notifications/:id/read
///
/// 404 covers both "no such notification" and "not yours".
pub async fn mark_read(
    State(state): State<AppState>,
    Extension(principal): Extension<SessionPrincipal>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let updated = NotificationRepository::new(state.pool.clone())
        .mark_read(id, principal.id)
        .await?;

    if !updated {
        return Err(ApiError::NotFound("Notification not found".into()));
    }

    Ok(Json(json!({ "message": "Notification marked as read" })))
}

/// Mark all of the caller's notifications read.
///
/// POST /api/v1/notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    Extension(principal): Extension<SessionPrincipal>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let updated = NotificationRepository::new(state.pool.clone())
        .mark_all_read(principal.id)
        .await?;

    Ok(Json(json!({ "updated": updated })))
}

/// Delete one notification (owner-scoped).
///
/// DELETE /api/v1/notifications/:id
pub async fn remove(
    State(state): State<AppState>,
    Extension(principal): Extension<SessionPrincipal>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = NotificationRepository::new(state.pool.clone())
        .delete(id, principal.id)
        .await?;

    if !deleted {
        return Err(ApiError::NotFound("Notification not found".into()));
    }

    Ok(Json(json!({ "message": "Notification deleted" })))
}

/// Bulk-delete the caller's read notifications.
///
/// DELETE /api/v1/notifications/read
pub async fn delete_read(
    State(state): State<AppState>,
    Extension(principal): Extension<SessionPrincipal>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = NotificationRepository::new(state.pool.clone())
        .delete_read(principal.id)
        .await?;

    Ok(Json(json!({ "deleted": deleted })))
}
