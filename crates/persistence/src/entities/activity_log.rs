//! Activity log entities.

use chrono::{DateTime, Utc};
use domain::models::{ActivityLogEntry, ActivityLogItem};
use sqlx::FromRow;
use uuid::Uuid;

/// Database entity for activity log rows.
#[derive(Debug, Clone, FromRow)]
pub struct ActivityLogEntity {
    pub id: i64,
    pub admin_id: Uuid,
    pub action: String,
    pub description: Option<String>,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ActivityLogEntity {
    pub fn into_domain(self) -> ActivityLogEntry {
        ActivityLogEntry {
            id: self.id,
            admin_id: self.admin_id,
            action: self.action,
            description: self.description,
            ip_address: self.ip_address,
            created_at: self.created_at,
        }
    }
}

/// Activity log row joined with its (possibly deleted) author.
///
/// `admin_id` is a soft reference, so the join is LEFT and the author columns
/// are nullable.
#[derive(Debug, Clone, FromRow)]
pub struct ActivityLogJoinedEntity {
    pub id: i64,
    pub admin_id: Uuid,
    pub action: String,
    pub description: Option<String>,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub admin_username: Option<String>,
    pub admin_full_name: Option<String>,
}

impl ActivityLogJoinedEntity {
    pub fn into_domain(self) -> ActivityLogItem {
        ActivityLogItem {
            entry: ActivityLogEntry {
                id: self.id,
                admin_id: self.admin_id,
                action: self.action,
                description: self.description,
                ip_address: self.ip_address,
                created_at: self.created_at,
            },
            admin_username: self.admin_username,
            admin_full_name: self.admin_full_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joined_entity_tolerates_missing_author() {
        let item = ActivityLogJoinedEntity {
            id: 1,
            admin_id: Uuid::new_v4(),
            action: "delete_admin".to_string(),
            description: None,
            ip_address: None,
            created_at: Utc::now(),
            admin_username: None,
            admin_full_name: None,
        }
        .into_domain();

        assert!(item.admin_username.is_none());
        assert_eq!(item.entry.action, "delete_admin");
    }
}
