//! Repository implementations for database operations.

pub mod activity_log;
pub mod admin_account;
pub mod login_attempt;
pub mod notification;
pub mod session;

pub use activity_log::ActivityLogRepository;
pub use admin_account::AdminAccountRepository;
pub use login_attempt::LoginAttemptRepository;
pub use notification::{NotificationCounts, NotificationRepository, ReadFilter};
pub use session::SessionRepository;
