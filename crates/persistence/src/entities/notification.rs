//! Notification entity.

use chrono::{DateTime, Utc};
use domain::models::{Notification, NotificationKind};
use sqlx::FromRow;
use uuid::Uuid;

/// Database entity for notification rows.
#[derive(Debug, Clone, FromRow)]
pub struct NotificationEntity {
    pub id: Uuid,
    pub admin_id: Uuid,
    pub title: String,
    pub message: String,
    pub kind: String,
    pub action_url: Option<String>,
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl NotificationEntity {
    pub fn into_domain(self) -> Notification {
        Notification {
            id: self.id,
            admin_id: self.admin_id,
            title: self.title,
            message: self.message,
            // Rows predating a kind rename fall back to Info rather than
            // failing the whole listing.
            kind: self.kind.parse().unwrap_or(NotificationKind::Info),
            action_url: self.action_url,
            is_read: self.is_read,
            read_at: self.read_at,
            created_at: self.created_at,
        }
    }
}
