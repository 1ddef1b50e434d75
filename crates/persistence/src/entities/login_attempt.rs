//! Login attempt entity.

use chrono::{DateTime, Utc};
use domain::models::LoginAttempt;
use sqlx::FromRow;

/// Database entity for login attempts.
#[derive(Debug, Clone, FromRow)]
pub struct LoginAttemptEntity {
    pub id: i64,
    pub username: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub success: bool,
    pub attempted_at: DateTime<Utc>,
}

impl LoginAttemptEntity {
    pub fn into_domain(self) -> LoginAttempt {
        LoginAttempt {
            id: self.id,
            username: self.username,
            ip_address: self.ip_address,
            user_agent: self.user_agent,
            success: self.success,
            attempted_at: self.attempted_at,
        }
    }
}
