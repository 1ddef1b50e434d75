//! HTTP middleware.

pub mod auth;
pub mod logging;
pub mod rbac;
pub mod security_headers;

pub use auth::require_session;
pub use rbac::{require_admin, require_super_admin};
pub use security_headers::security_headers_middleware;
