//! Login attempt repository.

use domain::models::{LoginAttempt, NewLoginAttempt};
use sqlx::PgPool;

use crate::entities::LoginAttemptEntity;

/// Repository for the append-only login attempts table.
#[derive(Clone)]
pub struct LoginAttemptRepository {
    pool: PgPool,
}

impl LoginAttemptRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append one attempt. Called for every verification, including ones
    /// against usernames that do not exist (the literal submitted string is
    /// stored).
    pub async fn insert(&self, input: &NewLoginAttempt) -> Result<LoginAttempt, sqlx::Error> {
        let entity = sqlx::query_as::<_, LoginAttemptEntity>(
            r#"
            INSERT INTO login_attempts (username, ip_address, user_agent, success, attempted_at)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING id, username, ip_address, user_agent, success, attempted_at
            "#,
        )
        .bind(&input.username)
        .bind(&input.ip_address)
        .bind(&input.user_agent)
        .bind(input.success)
        .fetch_one(&self.pool)
        .await?;

        Ok(entity.into_domain())
    }
}
