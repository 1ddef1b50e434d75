//! Session cookie helper.
//!
//! Builds and reads the single httpOnly cookie carrying the opaque session
//! token. The token is the only thing the browser holds; everything else
//! about the session lives server-side.

use axum::http::{header::SET_COOKIE, HeaderMap, HeaderValue};

use crate::config::SessionConfig;

/// Helper for the session cookie.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    name: String,
    ttl_secs: i64,
    secure: bool,
    same_site: String,
    domain: String,
}

impl SessionCookie {
    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            name: config.cookie_name.clone(),
            ttl_secs: config.ttl_secs,
            secure: config.secure,
            same_site: config.same_site.clone(),
            domain: config.domain.clone(),
        }
    }

    /// Build a Set-Cookie value carrying `token`.
    pub fn build(&self, token: &str) -> String {
        let mut cookie = format!(
            "{}={}; Path=/; Max-Age={}; HttpOnly",
            self.name, token, self.ttl_secs
        );

        if self.secure {
            cookie.push_str("; Secure");
        }

        cookie.push_str(&format!("; SameSite={}", self.same_site));

        if !self.domain.is_empty() {
            cookie.push_str(&format!("; Domain={}", self.domain));
        }

        cookie
    }

    /// Build a Set-Cookie value that clears the session cookie (logout).
    pub fn build_clear(&self) -> String {
        let mut cookie = format!(
            "{}=; Path=/; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT; HttpOnly",
            self.name
        );

        if self.secure {
            cookie.push_str("; Secure");
        }

        cookie.push_str(&format!("; SameSite={}", self.same_site));

        if !self.domain.is_empty() {
            cookie.push_str(&format!("; Domain={}", self.domain));
        }

        cookie
    }

    /// Append the session cookie to response headers.
    pub fn add_to(&self, headers: &mut HeaderMap, token: &str) {
        if let Ok(value) = HeaderValue::from_str(&self.build(token)) {
            headers.append(SET_COOKIE, value);
        }
    }

    /// Append the clearing cookie to response headers.
    pub fn add_clear_to(&self, headers: &mut HeaderMap) {
        if let Ok(value) = HeaderValue::from_str(&self.build_clear()) {
            headers.append(SET_COOKIE, value);
        }
    }

    /// Extract the session token from request headers, if present.
    pub fn extract_token<'a>(&self, headers: &'a HeaderMap) -> Option<&'a str> {
        headers
            .get(axum::http::header::COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|cookie_header| {
                cookie_header
                    .split(';')
                    .map(|s| s.trim())
                    .find_map(|cookie| {
                        let (name, value) = cookie.split_once('=')?;
                        if name == self.name {
                            Some(value)
                        } else {
                            None
                        }
                    })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SessionConfig {
        SessionConfig {
            cookie_name: "admin_session".to_string(),
            ttl_secs: 86400,
            secure: true,
            same_site: "Strict".to_string(),
            domain: String::new(),
        }
    }

    #[test]
    fn test_build_cookie_attributes() {
        let cookie = SessionCookie::from_config(&test_config()).build("tok123");

        assert!(cookie.contains("admin_session=tok123"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=86400"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=Strict"));
    }

    #[test]
    fn test_build_clear_cookie() {
        let cookie = SessionCookie::from_config(&test_config()).build_clear();

        assert!(cookie.contains("admin_session="));
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("Expires=Thu, 01 Jan 1970 00:00:00 GMT"));
    }

    #[test]
    fn test_cookie_without_secure() {
        let mut config = test_config();
        config.secure = false;

        let cookie = SessionCookie::from_config(&config).build("tok");
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_cookie_with_domain() {
        let mut config = test_config();
        config.domain = "admin.example.com".to_string();

        let cookie = SessionCookie::from_config(&config).build("tok");
        assert!(cookie.contains("Domain=admin.example.com"));
    }

    #[test]
    fn test_extract_token() {
        let helper = SessionCookie::from_config(&test_config());
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::COOKIE,
            HeaderValue::from_static("theme=dark; admin_session=abc123; lang=en"),
        );

        assert_eq!(helper.extract_token(&headers), Some("abc123"));
    }

    #[test]
    fn test_extract_token_absent() {
        let helper = SessionCookie::from_config(&test_config());
        let headers = HeaderMap::new();
        assert_eq!(helper.extract_token(&headers), None);
    }
}
