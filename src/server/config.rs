use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5001;
const DEFAULT_TOKEN_TTL_DAYS: i64 = 7;
const DEFAULT_LOG_LEVEL: &str = "info";

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,

    pub host: String,
    pub port: u16,
    /// Allowed CORS origin, any origin when unset.
    pub cors_origin: Option<String>,

    pub token_ttl_days: i64,
    /// Default tracing directive when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            host: optional("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parsed("PORT", DEFAULT_PORT)?,
            cors_origin: optional("CORS_ORIGIN"),
            token_ttl_days: parsed("TOKEN_TTL_DAYS", DEFAULT_TOKEN_TTL_DAYS)?,
            log_level: optional("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }

    /// `host:port` the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable, treating an empty value as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parsed<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(name) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
            value,
        }),
    }
}
