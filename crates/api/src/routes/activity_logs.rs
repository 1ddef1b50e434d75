//! Activity log listing routes (admin and above).

use axum::{
    extract::{Query, State},
    Json,
};
use domain::models::{ActivityLogPage, ListActivityLogsQuery};
use persistence::repositories::ActivityLogRepository;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// List activity log entries with optional filters.
///
/// GET /api/v1/activity-logs?admin_id=&action=&date=&page=&per_page=
///
/// Entries whose author was deleted come back with null author fields; the
/// UI renders those as "Unknown".
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListActivityLogsQuery>,
) -> Result<Json<ActivityLogPage>, ApiError> {
    query.validate()?;

    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(50).clamp(1, 100);

    let (items, total) = ActivityLogRepository::new(state.pool.clone())
        .list(&query)
        .await?;

    Ok(Json(ActivityLogPage {
        items,
        page,
        per_page,
        total,
    }))
}

/// Distinct action identifiers, for populating the filter dropdown.
///
/// GET /api/v1/activity-logs/actions
pub async fn actions(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let actions = ActivityLogRepository::new(state.pool.clone())
        .distinct_actions()
        .await?;

    Ok(Json(actions))
}
