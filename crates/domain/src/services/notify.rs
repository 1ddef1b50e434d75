//! Notification event constructors.
//!
//! Each function maps a site event to the target selector and draft content
//! the dispatcher expands at call time. Keeping the mapping here means every
//! call site produces the same wording for the same event.

use crate::models::{NotificationDraft, NotificationKind, NotificationTarget};
use uuid::Uuid;

/// A new message arrived through the public contact form.
pub fn contact_message_received(
    name: &str,
    email: &str,
    subject: &str,
    contact_id: i64,
) -> (NotificationTarget, NotificationDraft) {
    let draft = NotificationDraft::new(
        "New Contact Message",
        format!("From: {} ({})\nSubject: {}", name, email, subject),
        NotificationKind::Info,
    )
    .with_action_url(format!("/admin/contacts?id={}", contact_id));

    (NotificationTarget::AllActive, draft)
}

/// Someone subscribed to the newsletter.
pub fn subscriber_added(email: &str) -> (NotificationTarget, NotificationDraft) {
    let draft = NotificationDraft::new(
        "New Newsletter Subscriber",
        format!("Email: {}", email),
        NotificationKind::Success,
    )
    .with_action_url("/admin/subscribers");

    (NotificationTarget::AllActive, draft)
}

/// A team member entry was added, updated or deleted.
///
/// `change` is the past-tense verb shown to admins ("added", "updated",
/// "deleted"). Pass `Some(admin_id)` to notify one account instead of all.
pub fn team_member_changed(
    change: &str,
    member_name: &str,
    recipient: Option<Uuid>,
) -> (NotificationTarget, NotificationDraft) {
    let mut title_change = change.to_string();
    if let Some(first) = title_change.get_mut(0..1) {
        first.make_ascii_uppercase();
    }

    let draft = NotificationDraft::new(
        format!("Team Member {}", title_change),
        format!("Team member '{}' has been {}.", member_name, change),
        NotificationKind::Info,
    )
    .with_action_url("/admin/team");

    let target = match recipient {
        Some(id) => NotificationTarget::Admin(id),
        None => NotificationTarget::AllActive,
    };

    (target, draft)
}

/// A system-level event worth surfacing to operators. Goes to active
/// super_admins only.
pub fn system_event(event: &str, kind: NotificationKind) -> (NotificationTarget, NotificationDraft) {
    (
        NotificationTarget::ActiveSuperAdmins,
        NotificationDraft::new("System Event", event, kind),
    )
}

/// Outcome of a backup run, success or failure.
pub fn backup_completed(success: bool, details: &str) -> (NotificationTarget, NotificationDraft) {
    let (title, kind) = if success {
        ("Backup Completed Successfully", NotificationKind::Success)
    } else {
        ("Backup Failed", NotificationKind::Error)
    };

    system_event(&format!("{}: {}", title, details), kind)
}

/// An admin account was created, toggled or removed. Goes to active
/// super_admins, who own account management.
pub fn account_changed(summary: &str) -> (NotificationTarget, NotificationDraft) {
    (
        NotificationTarget::ActiveSuperAdmins,
        NotificationDraft::new("Admin Account Change", summary, NotificationKind::Warning)
            .with_action_url("/admin/admins"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_message_broadcasts_to_all() {
        let (target, draft) =
            contact_message_received("Jane", "jane@example.com", "Quote request", 42);

        assert_eq!(target, NotificationTarget::AllActive);
        assert_eq!(draft.title, "New Contact Message");
        assert!(draft.message.contains("jane@example.com"));
        assert_eq!(draft.action_url.as_deref(), Some("/admin/contacts?id=42"));
    }

    #[test]
    fn test_subscriber_added_is_success_kind() {
        let (target, draft) = subscriber_added("sub@example.com");
        assert_eq!(target, NotificationTarget::AllActive);
        assert_eq!(draft.kind, NotificationKind::Success);
    }

    #[test]
    fn test_team_member_changed_capitalizes_title() {
        let (target, draft) = team_member_changed("updated", "Alex Smith", None);
        assert_eq!(target, NotificationTarget::AllActive);
        assert_eq!(draft.title, "Team Member Updated");
        assert_eq!(draft.message, "Team member 'Alex Smith' has been updated.");
    }

    #[test]
    fn test_team_member_changed_single_recipient() {
        let id = Uuid::new_v4();
        let (target, _) = team_member_changed("added", "Alex Smith", Some(id));
        assert_eq!(target, NotificationTarget::Admin(id));
    }

    #[test]
    fn test_system_event_targets_super_admins() {
        let (target, draft) = system_event("Disk usage above 90%", NotificationKind::Warning);
        assert_eq!(target, NotificationTarget::ActiveSuperAdmins);
        assert_eq!(draft.title, "System Event");
        assert_eq!(draft.kind, NotificationKind::Warning);
    }

    #[test]
    fn test_backup_outcome_kinds() {
        let (_, ok) = backup_completed(true, "42 MB archived");
        assert_eq!(ok.kind, NotificationKind::Success);
        assert!(ok.message.starts_with("Backup Completed Successfully"));

        let (_, failed) = backup_completed(false, "disk full");
        assert_eq!(failed.kind, NotificationKind::Error);
        assert!(failed.message.starts_with("Backup Failed"));
    }
}
