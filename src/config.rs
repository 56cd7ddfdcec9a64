// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Job Portal Contributors

//! Server configuration from environment variables.
//!
//! | Variable         | Default   | Meaning                                       |
//! |------------------|-----------|-----------------------------------------------|
//! | `HOST`           | `0.0.0.0` | Bind address                                  |
//! | `PORT`           | `5000`    | Bind port                                     |
//! | `DATA_DIR`       | `/data`   | Root directory of the document store          |
//! | `JWT_SECRET`     | required  | Symmetric token signing secret                |
//! | `TOKEN_TTL_DAYS` | `10`      | Token and cookie lifetime in days             |
//! | `COOKIE_SECURE`  | `false`   | Set the `Secure` flag on the session cookie   |
//! | `CLIENT_ORIGIN`  | unset     | Exact allowed CORS origin; unset = same-origin|
//! | `LOG_FORMAT`     | `pretty`  | `json` or `pretty` log output                 |
//! | `RUST_LOG`       | unset     | Log filter, e.g. `info,tower_http=debug`      |

use std::env;
use std::path::PathBuf;

use crate::auth::token::DEFAULT_TOKEN_TTL_DAYS;
use crate::storage::paths::DATA_ROOT;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub jwt_secret: String,
    pub token_ttl_days: i64,
    pub cookie_secure: bool,
    pub client_origin: Option<String>,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Panics when `JWT_SECRET` is absent or a numeric variable fails to
    /// parse; the process must not come up half-configured.
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .expect("PORT must be a valid port number");
        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DATA_ROOT));
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        let token_ttl_days = env::var("TOKEN_TTL_DAYS")
            .map(|v| v.parse().expect("TOKEN_TTL_DAYS must be an integer"))
            .unwrap_or(DEFAULT_TOKEN_TTL_DAYS);
        let cookie_secure = env::var("COOKIE_SECURE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        let client_origin = env::var("CLIENT_ORIGIN").ok().filter(|v| !v.is_empty());

        Self {
            host,
            port,
            data_dir,
            jwt_secret,
            token_ttl_days,
            cookie_secure,
            client_origin,
        }
    }

    /// Bind address in `host:port` form.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
