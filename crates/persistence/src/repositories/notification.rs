//! Notification repository: snapshot fan-out dispatch and owner-scoped reads.

use domain::models::{Notification, NotificationDraft, NotificationTarget};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::NotificationEntity;

const NOTIFICATION_COLUMNS: &str =
    "id, admin_id, title, message, kind, action_url, is_read, read_at, created_at";

/// Read-state filter for the inbox listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadFilter {
    All,
    Unread,
    Read,
}

/// Per-owner row counts shown above the inbox.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct NotificationCounts {
    pub total: i64,
    pub unread: i64,
    pub read: i64,
}

/// Repository for notification rows.
#[derive(Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Expand `target` to concrete recipient ids and insert one row per
    /// recipient. Returns the number of rows created.
    ///
    /// The expansion is a snapshot taken at call time: an account activated
    /// a moment later does not receive the notification, and deactivating a
    /// recipient does not claw its row back.
    pub async fn dispatch(
        &self,
        target: NotificationTarget,
        draft: &NotificationDraft,
    ) -> Result<u64, sqlx::Error> {
        let recipients = self.resolve_target(target).await?;
        if recipients.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query(
            r#"
            INSERT INTO notifications (id, admin_id, title, message, kind, action_url, is_read, created_at)
            SELECT gen_random_uuid(), recipient, $2, $3, $4, $5, FALSE, NOW()
            FROM UNNEST($1::uuid[]) AS recipient
            "#,
        )
        .bind(&recipients)
        .bind(&draft.title)
        .bind(&draft.message)
        .bind(draft.kind.to_string())
        .bind(&draft.action_url)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Dispatch without blocking the caller (fire and forget).
    ///
    /// Same contract as the activity log's detached write: a failure lands
    /// on the operational log and never propagates to the caller.
    pub fn dispatch_detached(&self, target: NotificationTarget, draft: NotificationDraft) {
        let pool = self.pool.clone();
        tokio::spawn(async move {
            let repo = NotificationRepository::new(pool);
            if let Err(e) = repo.dispatch(target, &draft).await {
                tracing::error!(title = %draft.title, "Failed to dispatch notification: {}", e);
            }
        });
    }

    /// Resolve a target selector to the concrete recipient set at this
    /// moment. A directly addressed admin is passed through unchecked; the
    /// broadcast selectors snapshot the currently-active matching accounts.
    async fn resolve_target(&self, target: NotificationTarget) -> Result<Vec<Uuid>, sqlx::Error> {
        match target {
            NotificationTarget::Admin(id) => Ok(vec![id]),
            NotificationTarget::AllActive => {
                sqlx::query_scalar("SELECT id FROM admin_accounts WHERE is_active = TRUE")
                    .fetch_all(&self.pool)
                    .await
            }
            NotificationTarget::ActiveSuperAdmins => {
                sqlx::query_scalar(
                    "SELECT id FROM admin_accounts WHERE is_active = TRUE AND role = 'super_admin'",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
    }

    /// List an owner's notifications, newest first.
    pub async fn list_for_admin(
        &self,
        admin_id: Uuid,
        filter: ReadFilter,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let read_condition = match filter {
            ReadFilter::All => "",
            ReadFilter::Unread => "AND is_read = FALSE",
            ReadFilter::Read => "AND is_read = TRUE",
        };

        let entities = sqlx::query_as::<_, NotificationEntity>(&format!(
            r#"
            SELECT {}
            FROM notifications
            WHERE admin_id = $1 {}
            ORDER BY created_at DESC, id DESC
            "#,
            NOTIFICATION_COLUMNS, read_condition
        ))
        .bind(admin_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entities
            .into_iter()
            .map(NotificationEntity::into_domain)
            .collect())
    }

    /// Unread count for the badge. Runs on every admin page render, so it
    /// leans on the `(admin_id, is_read)` index.
    pub async fn unread_count(&self, admin_id: Uuid) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE admin_id = $1 AND is_read = FALSE",
        )
        .bind(admin_id)
        .fetch_one(&self.pool)
        .await
    }

    /// Total/unread/read counts for the inbox header.
    pub async fn counts(&self, admin_id: Uuid) -> Result<NotificationCounts, sqlx::Error> {
        let (total, unread): (i64, i64) = sqlx::query_as(
            r#"
            SELECT COUNT(*),
                   COUNT(*) FILTER (WHERE is_read = FALSE)
            FROM notifications
            WHERE admin_id = $1
            "#,
        )
        .bind(admin_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(NotificationCounts {
            total,
            unread,
            read: total - unread,
        })
    }

    /// Mark one notification read, but only if `admin_id` owns it.
    ///
    /// Returns `false` both when the row does not exist and when it belongs
    /// to someone else; callers surface either as not-found so ownership is
    /// not probeable.
    pub async fn mark_read(&self, id: Uuid, admin_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE notifications
            SET is_read = TRUE, read_at = NOW()
            WHERE id = $1 AND admin_id = $2 AND is_read = FALSE
            "#,
        )
        .bind(id)
        .bind(admin_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Mark all of an owner's unread notifications read. Returns the number
    /// of rows flipped.
    pub async fn mark_all_read(&self, admin_id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE notifications
            SET is_read = TRUE, read_at = NOW()
            WHERE admin_id = $1 AND is_read = FALSE
            "#,
        )
        .bind(admin_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete one notification, owner-scoped like `mark_read`.
    pub async fn delete(&self, id: Uuid, admin_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1 AND admin_id = $2")
            .bind(id)
            .bind(admin_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Bulk-delete the owner's read notifications. Other owners' rows are
    /// never touched.
    pub async fn delete_read(&self, admin_id: Uuid) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM notifications WHERE admin_id = $1 AND is_read = TRUE")
                .bind(admin_id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected())
    }
}
