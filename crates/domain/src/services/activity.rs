//! Builder for activity log entries.
//!
//! Handlers assemble an [`ActivityRecord`] at the point where the mutation
//! succeeded, then hand it to the activity log repository. One record per
//! logical operation: a bulk delete logs a single entry with the count in
//! its description, not one entry per row.

use uuid::Uuid;

use crate::models::NewActivityEntry;

/// Fluent builder for a single activity log entry.
#[derive(Debug, Clone)]
pub struct ActivityRecord {
    admin_id: Uuid,
    action: String,
    description: Option<String>,
    ip_address: Option<String>,
}

impl ActivityRecord {
    /// Start a record for `action` performed by `admin_id`.
    ///
    /// `action` is a free-form short identifier chosen by the caller
    /// (`login`, `delete_admin`, ...); no closed enum is enforced, and the
    /// same identifier from different call sites is expected.
    pub fn new(admin_id: Uuid, action: impl Into<String>) -> Self {
        Self {
            admin_id,
            action: action.into(),
            description: None,
            ip_address: None,
        }
    }

    /// Attach a human-readable description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach the client address observed at call time. The address is never
    /// re-derived later.
    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip_address = Some(ip.into());
        self
    }

    pub fn build(self) -> NewActivityEntry {
        NewActivityEntry {
            admin_id: self.admin_id,
            action: self.action,
            description: self.description,
            ip_address: self.ip_address,
        }
    }
}
