//! The authenticated principal derived from a server-side session.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::admin::AdminRole;

/// The identity attached to a request once its session cookie resolves.
///
/// Mirrors what the session exposes to page handlers: the account fields
/// needed for display plus the role for gating. The role is `None` when the
/// stored role string is unrecognised, which ranks below every requirement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SessionPrincipal {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: Option<AdminRole>,
}

impl SessionPrincipal {
    /// Privilege rank of this principal (0 when the role is missing).
    pub fn rank(&self) -> u8 {
        AdminRole::rank_of(self.role)
    }

    /// Whether this principal satisfies `required`, i.e. holds a role at
    /// least as privileged.
    pub fn has_role(&self, required: AdminRole) -> bool {
        self.rank() >= required.rank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(role: Option<AdminRole>) -> SessionPrincipal {
        SessionPrincipal {
            id: Uuid::new_v4(),
            username: "jane".to_string(),
            email: "jane@example.com".to_string(),
            full_name: "Jane Doe".to_string(),
            role,
        }
    }

    #[test]
    fn test_super_admin_implies_lower_roles() {
        let p = principal(Some(AdminRole::SuperAdmin));
        assert!(p.has_role(AdminRole::SuperAdmin));
        assert!(p.has_role(AdminRole::Admin));
        assert!(p.has_role(AdminRole::Viewer));
    }

    #[test]
    fn test_admin_does_not_imply_super_admin() {
        let p = principal(Some(AdminRole::Admin));
        assert!(!p.has_role(AdminRole::SuperAdmin));
        assert!(p.has_role(AdminRole::Admin));
        assert!(p.has_role(AdminRole::Viewer));
    }

    #[test]
    fn test_viewer_only_satisfies_viewer() {
        let p = principal(Some(AdminRole::Viewer));
        assert!(p.has_role(AdminRole::Viewer));
        assert!(!p.has_role(AdminRole::Admin));
        assert!(!p.has_role(AdminRole::SuperAdmin));
    }

    #[test]
    fn test_missing_role_fails_every_check() {
        let p = principal(None);
        assert_eq!(p.rank(), 0);
        assert!(!p.has_role(AdminRole::Viewer));
        assert!(!p.has_role(AdminRole::Admin));
        assert!(!p.has_role(AdminRole::SuperAdmin));
    }
}
