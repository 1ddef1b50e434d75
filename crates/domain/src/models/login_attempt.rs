//! Login attempt records.
//!
//! Every credential verification appends exactly one attempt, successful or
//! not, including attempts against usernames that do not exist. Rows are
//! never mutated or deleted by the application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted login attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoginAttempt {
    pub id: i64,
    /// The literal username string submitted by the client, whether or not
    /// an account with that name exists.
    pub username: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub success: bool,
    pub attempted_at: DateTime<Utc>,
}

/// Input for appending a login attempt.
#[derive(Debug, Clone)]
pub struct NewLoginAttempt {
    pub username: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub success: bool,
}

impl NewLoginAttempt {
    pub fn new(username: impl Into<String>, success: bool) -> Self {
        Self {
            username: username.into(),
            ip_address: None,
            user_agent: None,
            success,
        }
    }

    pub fn with_client(mut self, ip_address: Option<String>, user_agent: Option<String>) -> Self {
        self.ip_address = ip_address;
        self.user_agent = user_agent;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_attempt_keeps_literal_username() {
        let attempt = NewLoginAttempt::new("ghost", false);
        assert_eq!(attempt.username, "ghost");
        assert!(!attempt.success);
        assert!(attempt.ip_address.is_none());
    }

    #[test]
    fn test_with_client_sets_request_context() {
        let attempt = NewLoginAttempt::new("jane", true)
            .with_client(Some("203.0.113.9".into()), Some("Mozilla/5.0".into()));
        assert_eq!(attempt.ip_address.as_deref(), Some("203.0.113.9"));
        assert_eq!(attempt.user_agent.as_deref(), Some("Mozilla/5.0"));
    }
}
