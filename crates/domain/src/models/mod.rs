//! Domain models.

pub mod activity_log;
pub mod admin;
pub mod login_attempt;
pub mod notification;
pub mod session;

pub use activity_log::{ActivityLogEntry, ActivityLogItem, ActivityLogPage, ListActivityLogsQuery, NewActivityEntry};
pub use admin::{AdminAccount, AdminRole, CreateAdminAccountInput};
pub use login_attempt::{LoginAttempt, NewLoginAttempt};
pub use notification::{Notification, NotificationDraft, NotificationKind, NotificationTarget};
pub use session::SessionPrincipal;
