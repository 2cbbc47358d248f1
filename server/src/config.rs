//! Server configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! `ServerConfig::from_env` is a thin wrapper over `from_lookup`, which takes
//! any key -> value closure. Tests drive `from_lookup` with a `HashMap` so they
//! never touch the process environment.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_ACCESS_TOKEN_TTL_SECS: u64 = 15 * 60;
pub const DEFAULT_REFRESH_TOKEN_TTL_SECS: u64 = 7 * 24 * 60 * 60;
pub const DEFAULT_STATIC_DIR: &str = "client/dist";
/// Upper bound for either token lifetime (10 years).
pub const MAX_TOKEN_TTL_SECS: u64 = 10 * 365 * 24 * 60 * 60;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("ACCESS_TOKEN_SECRET and REFRESH_TOKEN_SECRET must differ")]
    SharedSecret,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSettings {
    pub access_secret: String,
    pub refresh_secret: String,
    pub access_ttl_secs: u64,
    pub refresh_ttl_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub tokens: TokenSettings,
    /// Mark the refresh cookie `Secure`.
    pub cookie_secure: bool,
    pub cors_origin: Option<String>,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Required:
    /// - `ACCESS_TOKEN_SECRET`
    /// - `REFRESH_TOKEN_SECRET`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DATABASE_URL`: in-memory user store when absent
    /// - `DB_MAX_CONNECTIONS`: default 5
    /// - `ACCESS_TOKEN_TTL_SECS`: default 900
    /// - `REFRESH_TOKEN_TTL_SECS`: default 604800 (7 days)
    /// - `APP_ENV`: `production` enables secure cookies
    /// - `COOKIE_SECURE`: explicit override of the above
    /// - `CORS_ORIGIN`: browser origin allowed to send credentials
    /// - `STATIC_DIR`: built SPA directory, default `client/dist`
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let access_secret = get("ACCESS_TOKEN_SECRET").ok_or(ConfigError::Missing("ACCESS_TOKEN_SECRET"))?;
        let refresh_secret = get("REFRESH_TOKEN_SECRET").ok_or(ConfigError::Missing("REFRESH_TOKEN_SECRET"))?;
        if access_secret == refresh_secret {
            return Err(ConfigError::SharedSecret);
        }

        let tokens = TokenSettings {
            access_secret,
            refresh_secret,
            access_ttl_secs: parse_ttl("ACCESS_TOKEN_TTL_SECS", get("ACCESS_TOKEN_TTL_SECS"), DEFAULT_ACCESS_TOKEN_TTL_SECS)?,
            refresh_ttl_secs: parse_ttl(
                "REFRESH_TOKEN_TTL_SECS",
                get("REFRESH_TOKEN_TTL_SECS"),
                DEFAULT_REFRESH_TOKEN_TTL_SECS,
            )?,
        };

        let production = get("APP_ENV").is_some_and(|v| v.trim().eq_ignore_ascii_case("production"));
        let cookie_secure = match get("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { var: "COOKIE_SECURE", value: raw })?,
            None => production,
        };

        Ok(Self {
            port: parse_or("PORT", get("PORT"), DEFAULT_PORT)?,
            database_url: get("DATABASE_URL"),
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), DEFAULT_DB_MAX_CONNECTIONS)?,
            tokens,
            cookie_secure,
            cors_origin: get("CORS_ORIGIN"),
            static_dir: get("STATIC_DIR").map_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from),
        })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Token lifetimes must be at least one second and at most `MAX_TOKEN_TTL_SECS`.
fn parse_ttl(var: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    let secs = parse_or(var, raw.clone(), default)?;
    if (1..=MAX_TOKEN_TTL_SECS).contains(&secs) {
        Ok(secs)
    } else {
        Err(ConfigError::Invalid { var, value: raw.unwrap_or_default() })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
