//! Self-protection rules for operations on admin accounts.
//!
//! Role ordering itself lives on [`crate::models::AdminRole`] and
//! [`crate::models::SessionPrincipal`]; this module holds the rule that an
//! account may never deactivate or delete itself, regardless of role.

use thiserror::Error;
use uuid::Uuid;

/// Operations an admin is forbidden to apply to their own account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfProtectedOp {
    Deactivate,
    Delete,
}

impl SelfProtectedOp {
    /// The user-facing refusal message for this operation.
    pub fn message(self) -> &'static str {
        match self {
            SelfProtectedOp::Deactivate => "You cannot deactivate your own account",
            SelfProtectedOp::Delete => "You cannot delete your own account",
        }
    }
}

/// Error returned when an operation targets the acting principal itself.
#[derive(Debug, Error)]
#[error("{}", .op.message())]
pub struct SelfActionDenied {
    pub op: SelfProtectedOp,
}

/// Rejects destructive operations whose target is the acting principal.
///
/// Applies to every role, including super_admin.
pub fn forbid_self_action(
    actor_id: Uuid,
    target_id: Uuid,
    op: SelfProtectedOp,
) -> Result<(), SelfActionDenied> {
    if actor_id == target_id {
        Err(SelfActionDenied { op })
    } else {
        Ok(())
    }
}
