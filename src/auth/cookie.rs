// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Job Portal Contributors

//! Session cookie adapter.
//!
//! The signed token travels in an HTTP-only cookie named `token`. HTTP-only
//! is unconditional; the `Secure` flag and the same-site policy come from
//! configuration because they depend on how the service is deployed:
//!
//! - single-origin (frontend served from the same host:port): `SameSite=Strict`
//! - cross-origin (frontend on another origin): `SameSite=None`, which
//!   browsers only accept together with `Secure`
//!
//! Presence of the cookie is not validity; callers must verify the token.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::config::Config;

/// Name of the session cookie.
pub const TOKEN_COOKIE: &str = "token";

/// Transport attributes for the session cookie.
#[derive(Debug, Clone, Copy)]
pub struct CookiePolicy {
    /// Send the cookie over HTTPS only.
    pub secure: bool,
    /// Same-site policy; `None` is required for cross-origin deployments.
    pub same_site: SameSite,
    /// Cookie lifetime; matches the token lifetime.
    pub ttl: Duration,
}

impl Default for CookiePolicy {
    fn default() -> Self {
        Self {
            secure: false,
            same_site: SameSite::Strict,
            ttl: Duration::days(super::token::DEFAULT_TOKEN_TTL_DAYS),
        }
    }
}

impl CookiePolicy {
    /// Derive the policy from the loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        let cross_origin = config.client_origin.is_some();
        Self {
            // SameSite=None without Secure is rejected by browsers.
            secure: config.cookie_secure || cross_origin,
            same_site: if cross_origin {
                SameSite::None
            } else {
                SameSite::Strict
            },
            ttl: Duration::days(config.token_ttl_days),
        }
    }

    /// Build the session cookie carrying a freshly issued token.
    pub fn session_cookie(&self, token: impl Into<String>) -> Cookie<'static> {
        Cookie::build((TOKEN_COOKIE, token.into()))
            .http_only(true)
            .secure(self.secure)
            .same_site(self.same_site)
            .path("/")
            .max_age(self.ttl)
            .build()
    }

    /// Build the logout cookie: same name, empty value, immediate expiry.
    ///
    /// Idempotent; setting it with no session present is harmless.
    pub fn clear_cookie(&self) -> Cookie<'static> {
        Cookie::build((TOKEN_COOKIE, ""))
            .http_only(true)
            .secure(self.secure)
            .same_site(self.same_site)
            .path("/")
            .max_age(Duration::ZERO)
            .build()
    }
}

/// Read the raw session token from a cookie jar, if present.
pub fn token_from_jar(jar: &CookieJar) -> Option<String> {
    jar.get(TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_sets_transport_flags() {
        let policy = CookiePolicy {
            secure: true,
            same_site: SameSite::None,
            ttl: Duration::days(10),
        };

        let cookie = policy.session_cookie("tok-123");
        assert_eq!(cookie.name(), TOKEN_COOKIE);
        assert_eq!(cookie.value(), "tok-123");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::days(10)));
    }

    #[test]
    fn default_policy_is_strict_single_origin() {
        let policy = CookiePolicy::default();
        let cookie = policy.session_cookie("tok");
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        let policy = CookiePolicy::default();
        let cookie = policy.clear_cookie();
        assert_eq!(cookie.name(), TOKEN_COOKIE);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert!(cookie.to_string().contains("Max-Age=0"));
    }

    #[test]
    fn token_from_jar_reads_cookie() {
        let jar = CookieJar::new().add(Cookie::new(TOKEN_COOKIE, "tok-456"));
        assert_eq!(token_from_jar(&jar), Some("tok-456".to_string()));

        let empty = CookieJar::new();
        assert_eq!(token_from_jar(&empty), None);
    }
}
