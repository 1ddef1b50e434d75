//! Activity log domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A persisted activity log entry.
///
/// `admin_id` is a soft reference: the account may be deleted later, so
/// consumers joining back to accounts must tolerate a missing author.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ActivityLogEntry {
    pub id: i64,
    pub admin_id: Uuid,
    pub action: String,
    pub description: Option<String>,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for appending an activity log entry.
#[derive(Debug, Clone)]
pub struct NewActivityEntry {
    pub admin_id: Uuid,
    pub action: String,
    pub description: Option<String>,
    pub ip_address: Option<String>,
}

/// A log entry joined with its author, for the listing view.
///
/// `admin_username`/`admin_full_name` are `None` when the authoring account
/// has since been deleted; the UI renders those as "Unknown".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ActivityLogItem {
    #[serde(flatten)]
    pub entry: ActivityLogEntry,
    pub admin_username: Option<String>,
    pub admin_full_name: Option<String>,
}

/// Query parameters for listing activity logs.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct ListActivityLogsQuery {
    /// Filter by authoring admin.
    pub admin_id: Option<Uuid>,
    /// Filter by exact action identifier.
    pub action: Option<String>,
    /// Filter by calendar date of `created_at`.
    pub date: Option<NaiveDate>,
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    pub page: Option<u32>,
    #[validate(range(min = 1, max = 100, message = "Per page must be between 1 and 100"))]
    pub per_page: Option<u32>,
}

/// One page of activity log results.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ActivityLogPage {
    pub items: Vec<ActivityLogItem>,
    pub page: u32,
    pub per_page: u32,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_validation_bounds() {
        let ok = ListActivityLogsQuery {
            page: Some(2),
            per_page: Some(50),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());

        let bad_page = ListActivityLogsQuery {
            page: Some(0),
            ..Default::default()
        };
        assert!(bad_page.validate().is_err());

        let bad_per_page = ListActivityLogsQuery {
            per_page: Some(500),
            ..Default::default()
        };
        assert!(bad_per_page.validate().is_err());
    }

    #[test]
    fn test_item_serializes_flattened_entry() {
        let item = ActivityLogItem {
            entry: ActivityLogEntry {
                id: 7,
                admin_id: Uuid::nil(),
                action: "delete_admin".to_string(),
                description: Some("Deleted admin user #42".to_string()),
                ip_address: Some("198.51.100.4".to_string()),
                created_at: Utc::now(),
            },
            admin_username: None,
            admin_full_name: None,
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["action"], "delete_admin");
        assert!(json["admin_username"].is_null());
    }
}
