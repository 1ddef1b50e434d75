//! Session lookup row.

use domain::models::SessionPrincipal;
use sqlx::FromRow;
use uuid::Uuid;

/// Row produced by the session-to-principal join.
///
/// The principal fields are re-read from the accounts table on every lookup,
/// so a deactivated account loses access on its next request rather than at
/// session expiry.
#[derive(Debug, Clone, FromRow)]
pub struct SessionPrincipalRow {
    pub admin_id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: String,
}

impl SessionPrincipalRow {
    pub fn into_principal(self) -> SessionPrincipal {
        SessionPrincipal {
            id: self.admin_id,
            username: self.username,
            email: self.email,
            full_name: self.full_name,
            role: self.role.parse().ok(),
        }
    }
}
