//! Admin account domain models and the role hierarchy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

/// Admin roles, totally ordered by privilege.
///
/// The ordering is `Viewer < Admin < SuperAdmin`; comparisons go through
/// [`AdminRole::rank`] so that a missing or unrecognised role (rank 0) fails
/// every check instead of silently passing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    Viewer,
    Admin,
    SuperAdmin,
}

impl AdminRole {
    /// Privilege rank used for `>=` comparisons. Starts at 1 so that the
    /// "no valid role" case can rank 0 below everything.
    pub fn rank(self) -> u8 {
        match self {
            AdminRole::Viewer => 1,
            AdminRole::Admin => 2,
            AdminRole::SuperAdmin => 3,
        }
    }

    /// Rank of an optional role: `None` (absent or unrecognised) is 0.
    pub fn rank_of(role: Option<AdminRole>) -> u8 {
        role.map(AdminRole::rank).unwrap_or(0)
    }
}

impl FromStr for AdminRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "viewer" => Ok(AdminRole::Viewer),
            "admin" => Ok(AdminRole::Admin),
            "super_admin" => Ok(AdminRole::SuperAdmin),
            _ => Err(format!("Unknown admin role: {}", s)),
        }
    }
}

impl std::fmt::Display for AdminRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminRole::Viewer => write!(f, "viewer"),
            AdminRole::Admin => write!(f, "admin"),
            AdminRole::SuperAdmin => write!(f, "super_admin"),
        }
    }
}

/// An admin account as exposed to the rest of the system.
///
/// The password hash never leaves the persistence layer; credential checks go
/// through the auth service instead of this model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AdminAccount {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: String,
    /// `None` when the stored role string is not a recognised role; such
    /// accounts can log in but pass no role check.
    pub role: Option<AdminRole>,
    pub is_active: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new admin account.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateAdminAccountInput {
    #[validate(custom(function = "shared::validation::validate_username"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(custom(function = "shared::validation::validate_new_password"))]
    pub password: String,

    #[validate(length(min = 1, max = 100, message = "Full name must be 1-100 characters"))]
    pub full_name: String,

    pub role: AdminRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_ordering_is_total_and_transitive() {
        let roles = [AdminRole::Viewer, AdminRole::Admin, AdminRole::SuperAdmin];
        for (i, a) in roles.iter().enumerate() {
            for b in &roles[i + 1..] {
                assert!(a.rank() < b.rank());
            }
        }

        // super_admin >= admin >= viewer
        assert!(AdminRole::SuperAdmin.rank() >= AdminRole::Admin.rank());
        assert!(AdminRole::Admin.rank() >= AdminRole::Viewer.rank());
        assert!(AdminRole::SuperAdmin.rank() >= AdminRole::Viewer.rank());
    }

    #[test]
    fn test_missing_role_ranks_below_everything() {
        assert_eq!(AdminRole::rank_of(None), 0);
        assert!(AdminRole::rank_of(None) < AdminRole::Viewer.rank());
    }

    #[test]
    fn test_role_parse_roundtrip() {
        for role in [AdminRole::Viewer, AdminRole::Admin, AdminRole::SuperAdmin] {
            assert_eq!(role.to_string().parse::<AdminRole>().unwrap(), role);
        }
    }

    #[test]
    fn test_role_parse_rejects_unknown() {
        assert!("owner".parse::<AdminRole>().is_err());
        assert!("SUPER_ADMIN".parse::<AdminRole>().is_err());
        assert!("".parse::<AdminRole>().is_err());
    }

    #[test]
    fn test_create_input_validation() {
        let input = CreateAdminAccountInput {
            username: "jane.doe".to_string(),
            email: "jane@example.com".to_string(),
            password: "Str0ngPass".to_string(),
            full_name: "Jane Doe".to_string(),
            role: AdminRole::Admin,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_create_input_rejects_short_username() {
        let input = CreateAdminAccountInput {
            username: "jd".to_string(),
            email: "jane@example.com".to_string(),
            password: "Str0ngPass".to_string(),
            full_name: "Jane Doe".to_string(),
            role: AdminRole::Viewer,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_input_rejects_weak_password() {
        let input = CreateAdminAccountInput {
            username: "jane.doe".to_string(),
            email: "jane@example.com".to_string(),
            password: "password".to_string(),
            full_name: "Jane Doe".to_string(),
            role: AdminRole::Viewer,
        };
        assert!(input.validate().is_err());
    }
}
