//! Database entity definitions (row mappings).

pub mod activity_log;
pub mod admin_account;
pub mod login_attempt;
pub mod notification;
pub mod session;

pub use activity_log::{ActivityLogEntity, ActivityLogJoinedEntity};
pub use admin_account::AdminAccountEntity;
pub use login_attempt::LoginAttemptEntity;
pub use notification::NotificationEntity;
pub use session::SessionPrincipalRow;
