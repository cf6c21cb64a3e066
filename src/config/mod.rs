//! Configuration module for the node service.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::PgSslMode;

use crate::errors::AppError;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!("Unknown log format: {}", other))),
        }
    }
}

/// Connection settings for the PostgreSQL backend.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    /// libpq-style TLS mode (disable, allow, prefer, require, verify-ca, verify-full)
    pub ssl_mode: PgSslMode,
    pub max_connections: u32,
    /// How long a request waits for a pooled connection before failing
    pub acquire_timeout: Duration,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    pub log_format: LogFormat,
    pub database: DatabaseConfig,
}

impl Config {
    /// Load configuration from the process environment, reading `.env` first.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let bind_addr = parse_var("CMS_BIND_ADDR", &var("CMS_BIND_ADDR", "127.0.0.1:8080"))?;
        let log_level = var("CMS_LOG_LEVEL", "info");
        let log_format = var("CMS_LOG_FORMAT", "pretty").parse()?;

        let database = DatabaseConfig {
            host: var("CMS_DB_HOST", "localhost"),
            port: parse_var("CMS_DB_PORT", &var("CMS_DB_PORT", "5432"))?,
            user: var("CMS_DB_USER", "postgres"),
            password: var("CMS_DB_PASSWORD", "postgres"),
            name: var("CMS_DB_NAME", "cms"),
            ssl_mode: parse_var("CMS_DB_SSLMODE", &var("CMS_DB_SSLMODE", "disable"))?,
            max_connections: parse_var(
                "CMS_DB_MAX_CONNECTIONS",
                &var("CMS_DB_MAX_CONNECTIONS", "5"),
            )?,
            acquire_timeout: Duration::from_secs(parse_var(
                "CMS_DB_ACQUIRE_TIMEOUT_SECS",
                &var("CMS_DB_ACQUIRE_TIMEOUT_SECS", "5"),
            )?),
        };

        if database.max_connections == 0 {
            return Err(AppError::Config(
                "CMS_DB_MAX_CONNECTIONS must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            bind_addr,
            log_level,
            log_format,
            database,
        })
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid {} value {:?}: {}", key, value, e)))
}
