//! Admin notification domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Severity/kind of a notification, controlling how the inbox renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl FromStr for NotificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(NotificationKind::Info),
            "success" => Ok(NotificationKind::Success),
            "warning" => Ok(NotificationKind::Warning),
            "error" => Ok(NotificationKind::Error),
            _ => Err(format!("Unknown notification kind: {}", s)),
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationKind::Info => write!(f, "info"),
            NotificationKind::Success => write!(f, "success"),
            NotificationKind::Warning => write!(f, "warning"),
            NotificationKind::Error => write!(f, "error"),
        }
    }
}

/// Who a notification should be delivered to.
///
/// Broadcast targets are expanded to concrete recipient rows at dispatch
/// time; the set of recipients is a snapshot, never a live query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationTarget {
    /// A single admin account.
    Admin(Uuid),
    /// Every account that is active at dispatch time.
    AllActive,
    /// Every active super_admin at dispatch time.
    ActiveSuperAdmins,
}

/// Content of a notification before fan-out assigns recipients.
#[derive(Debug, Clone)]
pub struct NotificationDraft {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub action_url: Option<String>,
}

impl NotificationDraft {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind,
            action_url: None,
        }
    }

    pub fn with_action_url(mut self, url: impl Into<String>) -> Self {
        self.action_url = Some(url.into());
        self
    }
}

/// A persisted notification row, owned by exactly one admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Notification {
    pub id: Uuid,
    pub admin_id: Uuid,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub action_url: Option<String>,
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
