//! Session repository: server-side storage for opaque session tokens.
//!
//! Only token digests are stored. The principal is re-joined against the
//! accounts table on every lookup so a deactivated account is cut off on its
//! next request, not when its session happens to expire.

use chrono::{DateTime, Utc};
use domain::models::SessionPrincipal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::SessionPrincipalRow;

/// Repository for the sessions table.
#[derive(Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a session for `admin_id` with the given token digest.
    pub async fn create(
        &self,
        admin_id: Uuid,
        token_digest: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<Uuid, sqlx::Error> {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO sessions (id, admin_id, token_hash, created_at, expires_at)
            VALUES ($1, $2, $3, NOW(), $4)
            "#,
        )
        .bind(id)
        .bind(admin_id)
        .bind(token_digest)
        .bind(expires_at)
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    /// Resolve a token digest to its principal.
    ///
    /// Returns `None` for unknown digests, expired sessions and sessions
    /// whose account has been deactivated, indistinguishably.
    pub async fn find_principal(
        &self,
        token_digest: &str,
    ) -> Result<Option<SessionPrincipal>, sqlx::Error> {
        let row = sqlx::query_as::<_, SessionPrincipalRow>(
            r#"
            SELECT aa.id AS admin_id, aa.username, aa.email, aa.full_name, aa.role
            FROM sessions s
            JOIN admin_accounts aa ON aa.id = s.admin_id
            WHERE s.token_hash = $1
              AND s.expires_at > NOW()
              AND aa.is_active = TRUE
            "#,
        )
        .bind(token_digest)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SessionPrincipalRow::into_principal))
    }

    /// Destroy the session with this token digest (logout). Returns whether
    /// a session existed.
    pub async fn delete(&self, token_digest: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE token_hash = $1")
            .bind(token_digest)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Opportunistic cleanup of expired rows. Returns the number removed.
    pub async fn delete_expired(&self) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= NOW()")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
