//! HTTP route handlers.

pub mod activity_logs;
pub mod admins;
pub mod auth;
pub mod health;
pub mod notifications;

use axum::http::HeaderMap;

/// Client address as reported by the reverse proxy.
///
/// Captured once per mutating handler and handed to the audit logger; never
/// re-derived after the fact.
pub(crate) fn client_ip(headers: &HeaderMap) -> Option<String> {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    forwarded.or_else(|| {
        headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    })
}

/// User agent string, if the client sent one.
pub(crate) fn user_agent(headers: &HeaderMap) -> Option<String> {
    headers
        .get(axum::http::header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_client_ip_prefers_first_forwarded_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.9, 10.0.0.1"),
        );
        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.2"));

        assert_eq!(client_ip(&headers).as_deref(), Some("203.0.113.9"));
    }

    #[test]
    fn test_client_ip_falls_back_to_real_ip() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.4"));

        assert_eq!(client_ip(&headers).as_deref(), Some("198.51.100.4"));
    }

    #[test]
    fn test_client_ip_absent() {
        assert!(client_ip(&HeaderMap::new()).is_none());
    }

    #[test]
    fn test_user_agent_passthrough() {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::USER_AGENT,
            HeaderValue::from_static("Mozilla/5.0"),
        );

        assert_eq!(user_agent(&headers).as_deref(), Some("Mozilla/5.0"));
    }
}
