//! Admin account repository for database operations.

use chrono::Utc;
use domain::models::{AdminAccount, CreateAdminAccountInput};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::AdminAccountEntity;

const ACCOUNT_COLUMNS: &str = "id, username, email, password_hash, full_name, role, is_active, \
     last_login_at, created_at, updated_at";

/// Repository for admin account database operations.
#[derive(Clone)]
pub struct AdminAccountRepository {
    pool: PgPool,
}

impl AdminAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new account. The caller hashes the password; the repository
    /// never sees plaintext.
    ///
    /// A unique violation on username or email surfaces as the database
    /// error (code 23505) for the caller to map to a conflict.
    pub async fn insert(
        &self,
        input: &CreateAdminAccountInput,
        password_hash: &str,
    ) -> Result<AdminAccount, sqlx::Error> {
        let now = Utc::now();
        let entity = sqlx::query_as::<_, AdminAccountEntity>(&format!(
            r#"
            INSERT INTO admin_accounts
                (id, username, email, password_hash, full_name, role, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, TRUE, $7, $7)
            RETURNING {}
            "#,
            ACCOUNT_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(&input.username)
        .bind(input.email.to_lowercase())
        .bind(password_hash)
        .bind(&input.full_name)
        .bind(input.role.to_string())
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(entity.into_domain())
    }

    /// Find an account by id.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<AdminAccount>, sqlx::Error> {
        let entity = sqlx::query_as::<_, AdminAccountEntity>(&format!(
            "SELECT {} FROM admin_accounts WHERE id = $1",
            ACCOUNT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(AdminAccountEntity::into_domain))
    }

    /// List all accounts, newest first.
    pub async fn list(&self) -> Result<Vec<AdminAccount>, sqlx::Error> {
        let entities = sqlx::query_as::<_, AdminAccountEntity>(&format!(
            "SELECT {} FROM admin_accounts ORDER BY created_at DESC",
            ACCOUNT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(entities
            .into_iter()
            .map(AdminAccountEntity::into_domain)
            .collect())
    }

    /// Set an account's active flag. Returns the updated account, or `None`
    /// if no such account exists.
    ///
    /// Self-protection (an admin may not deactivate itself) is enforced by
    /// the caller before this runs; the repository applies whatever it is
    /// told.
    pub async fn set_active(
        &self,
        id: Uuid,
        is_active: bool,
    ) -> Result<Option<AdminAccount>, sqlx::Error> {
        let entity = sqlx::query_as::<_, AdminAccountEntity>(&format!(
            r#"
            UPDATE admin_accounts
            SET is_active = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            ACCOUNT_COLUMNS
        ))
        .bind(id)
        .bind(is_active)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(AdminAccountEntity::into_domain))
    }

    /// Delete an account. Returns whether a row was removed.
    ///
    /// Activity log rows keep their `admin_id` as a dangling soft reference;
    /// the account's own sessions and notifications are removed with it.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM sessions WHERE admin_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM notifications WHERE admin_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM admin_accounts WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    /// Best-effort bump of `last_login_at` after a successful credential
    /// check. Failures are the caller's to ignore.
    pub async fn touch_last_login(&self, id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE admin_accounts SET last_login_at = $1 WHERE id = $2")
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
