//! Admin account entity.

use chrono::{DateTime, Utc};
use domain::models::AdminAccount;
use sqlx::FromRow;
use uuid::Uuid;

/// Database entity for admin accounts.
///
/// This is the only place the password hash is materialized; the domain
/// model dropped out of [`AdminAccountEntity::into_domain`] never carries it.
#[derive(Debug, Clone, FromRow)]
pub struct AdminAccountEntity {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    /// Stored as text; unrecognised values surface as `None` in the domain
    /// model and rank below every role requirement.
    pub role: String,
    pub is_active: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AdminAccountEntity {
    pub fn into_domain(self) -> AdminAccount {
        AdminAccount {
            id: self.id,
            username: self.username,
            email: self.email,
            full_name: self.full_name,
            role: self.role.parse().ok(),
            is_active: self.is_active,
            last_login_at: self.last_login_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
