//! Activity log repository.
//!
//! Writes are available in two shapes: `record`, which reports its result,
//! and `record_detached`, which spawns the insert so a logging failure can
//! never abort the mutation that triggered it.

use domain::models::{ActivityLogEntry, ActivityLogItem, ListActivityLogsQuery, NewActivityEntry};
use sqlx::PgPool;

use crate::entities::{ActivityLogEntity, ActivityLogJoinedEntity};

/// Default and maximum page sizes for the listing view.
const DEFAULT_PER_PAGE: u32 = 50;
const MAX_PER_PAGE: u32 = 100;

/// Helper for building the listing WHERE clause from optional filters.
/// Tracks parameter positions so count and list queries stay in sync.
struct ActivityFilter {
    conditions: Vec<String>,
    param_count: i32,
}

impl ActivityFilter {
    fn build(query: &ListActivityLogsQuery) -> Self {
        let mut conditions = Vec::new();
        let mut param_count = 0;

        if query.admin_id.is_some() {
            param_count += 1;
            conditions.push(format!("al.admin_id = ${}", param_count));
        }
        if query.action.is_some() {
            param_count += 1;
            conditions.push(format!("al.action = ${}", param_count));
        }
        if query.date.is_some() {
            param_count += 1;
            conditions.push(format!("al.created_at::date = ${}", param_count));
        }

        Self {
            conditions,
            param_count,
        }
    }

    fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.conditions.join(" AND "))
        }
    }
}

macro_rules! bind_activity_filters {
    ($builder:expr, $query:expr) => {{
        let mut b = $builder;
        if let Some(ref admin_id) = $query.admin_id {
            b = b.bind(admin_id);
        }
        if let Some(ref action) = $query.action {
            b = b.bind(action);
        }
        if let Some(ref date) = $query.date {
            b = b.bind(date);
        }
        b
    }};
}

/// Repository for the append-only activity log.
#[derive(Clone)]
pub struct ActivityLogRepository {
    pool: PgPool,
}

impl ActivityLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append one entry and return it.
    pub async fn record(&self, input: &NewActivityEntry) -> Result<ActivityLogEntry, sqlx::Error> {
        let entity = sqlx::query_as::<_, ActivityLogEntity>(
            r#"
            INSERT INTO activity_log (admin_id, action, description, ip_address, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING id, admin_id, action, description, ip_address, created_at
            "#,
        )
        .bind(input.admin_id)
        .bind(&input.action)
        .bind(&input.description)
        .bind(&input.ip_address)
        .fetch_one(&self.pool)
        .await?;

        Ok(entity.into_domain())
    }

    /// Append an entry without blocking the caller (fire and forget).
    ///
    /// The insert runs on a spawned task; a failure is reported on the
    /// operational log channel and otherwise dropped, so the triggering
    /// business operation is never rolled back or delayed by audit trouble.
    pub fn record_detached(&self, input: NewActivityEntry) {
        let pool = self.pool.clone();
        tokio::spawn(async move {
            let repo = ActivityLogRepository::new(pool);
            if let Err(e) = repo.record(&input).await {
                tracing::error!(action = %input.action, "Failed to record activity log entry: {}", e);
            }
        });
    }

    /// List entries with optional filters, newest first, joined with their
    /// authors. Returns the page plus the total matching count.
    pub async fn list(
        &self,
        query: &ListActivityLogsQuery,
    ) -> Result<(Vec<ActivityLogItem>, i64), sqlx::Error> {
        let page = query.page.unwrap_or(1).max(1);
        let per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE);
        let offset = ((page - 1) * per_page) as i64;

        let filter = ActivityFilter::build(query);
        let where_clause = filter.where_clause();

        let count_query = format!(
            "SELECT COUNT(*) FROM activity_log al {}",
            where_clause
        );
        let count_builder = sqlx::query_scalar::<_, i64>(&count_query);
        let count_builder = bind_activity_filters!(count_builder, query);
        let total = count_builder.fetch_one(&self.pool).await?;

        let list_query = format!(
            r#"
            SELECT al.id, al.admin_id, al.action, al.description, al.ip_address, al.created_at,
                   aa.username AS admin_username, aa.full_name AS admin_full_name
            FROM activity_log al
            LEFT JOIN admin_accounts aa ON aa.id = al.admin_id
            {}
            ORDER BY al.created_at DESC, al.id DESC
            LIMIT ${} OFFSET ${}
            "#,
            where_clause,
            filter.param_count + 1,
            filter.param_count + 2
        );

        let list_builder = sqlx::query_as::<_, ActivityLogJoinedEntity>(&list_query);
        let list_builder = bind_activity_filters!(list_builder, query);
        let entities = list_builder
            .bind(per_page as i64)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        let items = entities
            .into_iter()
            .map(ActivityLogJoinedEntity::into_domain)
            .collect();

        Ok((items, total))
    }

    /// Distinct action identifiers seen so far, for the listing filter.
    pub async fn distinct_actions(&self) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT DISTINCT action FROM activity_log ORDER BY action")
            .fetch_all(&self.pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_filter_no_conditions() {
        let filter = ActivityFilter::build(&ListActivityLogsQuery::default());
        assert_eq!(filter.where_clause(), "");
        assert_eq!(filter.param_count, 0);
    }

    #[test]
    fn test_filter_all_conditions_number_params_in_order() {
        let query = ListActivityLogsQuery {
            admin_id: Some(Uuid::new_v4()),
            action: Some("login".to_string()),
            date: Some(chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()),
            page: None,
            per_page: None,
        };

        let filter = ActivityFilter::build(&query);
        assert_eq!(
            filter.where_clause(),
            "WHERE al.admin_id = $1 AND al.action = $2 AND al.created_at::date = $3"
        );
        assert_eq!(filter.param_count, 3);
    }

    #[test]
    fn test_filter_skips_absent_conditions() {
        let query = ListActivityLogsQuery {
            action: Some("logout".to_string()),
            ..Default::default()
        };

        let filter = ActivityFilter::build(&query);
        assert_eq!(filter.where_clause(), "WHERE al.action = $1");
    }
}
