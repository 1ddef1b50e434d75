//! Authentication service: credential verification and session lifecycle.

use chrono::{Duration, Utc};
use domain::models::{NewLoginAttempt, SessionPrincipal};
use domain::services::activity::ActivityRecord;
use persistence::repositories::{
    ActivityLogRepository, AdminAccountRepository, LoginAttemptRepository, SessionRepository,
};
use shared::password::{verify_password, PasswordError};
use shared::token::{generate_session_token, token_digest};
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username, inactive account or wrong password; callers must
    /// not be able to tell these apart.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub principal: SessionPrincipal,
    /// Opaque token to place in the session cookie. Only its digest is
    /// stored server-side.
    pub session_token: String,
}

/// Database row for the credential lookup.
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    username: String,
    email: String,
    full_name: String,
    role: String,
    password_hash: String,
}

/// Authentication service.
pub struct AuthService {
    pool: PgPool,
    session_ttl_secs: i64,
}

impl AuthService {
    pub fn new(pool: PgPool, session_ttl_secs: i64) -> Self {
        Self {
            pool,
            session_ttl_secs,
        }
    }

    /// Verify credentials and open a session.
    ///
    /// One login attempt row is appended for every call, successful or not,
    /// carrying the literal submitted username; if that append itself fails
    /// the error is logged and the login result is unaffected.
    ///
    /// The lookup is restricted to active accounts, so an inactive account
    /// with a correct password answers exactly like a nonexistent one.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        client_ip: Option<String>,
        user_agent: Option<String>,
    ) -> Result<LoginOutcome, AuthError> {
        let account: Option<AccountRow> = sqlx::query_as(
            r#"
            SELECT id, username, email, full_name, role, password_hash
            FROM admin_accounts
            WHERE username = $1 AND is_active = TRUE
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        let verified = match &account {
            Some(row) => verify_password(password, &row.password_hash)?,
            None => false,
        };

        self.record_attempt(username, client_ip.clone(), user_agent, verified)
            .await;

        let account = match (account, verified) {
            (Some(row), true) => row,
            _ => return Err(AuthError::InvalidCredentials),
        };

        // Best effort; a failed timestamp bump must not cancel the login.
        if let Err(e) = AdminAccountRepository::new(self.pool.clone())
            .touch_last_login(account.id)
            .await
        {
            tracing::warn!(admin_id = %account.id, "Failed to update last_login_at: {}", e);
        }

        let token = generate_session_token();
        let expires_at = Utc::now() + Duration::seconds(self.session_ttl_secs);
        let sessions = SessionRepository::new(self.pool.clone());
        sessions
            .create(account.id, &token_digest(&token), expires_at)
            .await?;

        // Opportunistic housekeeping, detached from the request.
        let cleanup = SessionRepository::new(self.pool.clone());
        tokio::spawn(async move {
            if let Err(e) = cleanup.delete_expired().await {
                tracing::debug!("Expired-session cleanup failed: {}", e);
            }
        });

        ActivityLogRepository::new(self.pool.clone()).record_detached({
            let mut record = ActivityRecord::new(account.id, "login")
                .with_description("Admin logged in successfully");
            if let Some(ip) = client_ip {
                record = record.with_ip(ip);
            }
            record.build()
        });

        Ok(LoginOutcome {
            principal: SessionPrincipal {
                id: account.id,
                username: account.username,
                email: account.email,
                full_name: account.full_name,
                role: account.role.parse().ok(),
            },
            session_token: token,
        })
    }

    /// Destroy the session behind `token`. Returns whether a live session
    /// existed. Records a `logout` activity entry when one did.
    pub async fn logout(
        &self,
        token: &str,
        client_ip: Option<String>,
    ) -> Result<bool, AuthError> {
        let digest = token_digest(token);
        let sessions = SessionRepository::new(self.pool.clone());

        // Resolve the principal before deleting so the activity entry can
        // name the account.
        let principal = sessions.find_principal(&digest).await?;
        let existed = sessions.delete(&digest).await?;

        if let Some(principal) = principal {
            ActivityLogRepository::new(self.pool.clone()).record_detached({
                let mut record =
                    ActivityRecord::new(principal.id, "logout").with_description("Admin logged out");
                if let Some(ip) = client_ip {
                    record = record.with_ip(ip);
                }
                record.build()
            });
        }

        Ok(existed)
    }

    /// Append a login attempt, swallowing storage failures: when the
    /// persistence layer is down the login already fails closed, and attempt
    /// logging must never decide the outcome.
    async fn record_attempt(
        &self,
        username: &str,
        client_ip: Option<String>,
        user_agent: Option<String>,
        success: bool,
    ) {
        let attempt =
            NewLoginAttempt::new(username, success).with_client(client_ip, user_agent);

        if let Err(e) = LoginAttemptRepository::new(self.pool.clone())
            .insert(&attempt)
            .await
        {
            tracing::error!(username = %username, "Failed to record login attempt: {}", e);
        }
    }
}
