use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context};
use menu_db::PoolConfig;

/// Where restaurants and menus are stored.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// Process-local store; contents are lost on restart.
    Memory,
    /// PostgreSQL via a pooled connection.
    Postgres {
        database_url: String,
        pool: PoolConfig,
    },
}

impl StorageConfig {
    pub fn name(&self) -> &'static str {
        match self {
            StorageConfig::Memory => "memory",
            StorageConfig::Postgres { .. } => "postgres",
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub storage: StorageConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                    |
    /// |---------------------------|----------------------------|
    /// | `HOST`                    | `0.0.0.0`                  |
    /// | `PORT`                    | `3000`                     |
    /// | `CORS_ORIGINS`            | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                       |
    /// | `STORAGE_BACKEND`         | `postgres`                 |
    /// | `DATABASE_URL`            | required for `postgres`    |
    /// | `DB_MAX_CONNECTIONS`      | `20`                       |
    /// | `DB_MIN_CONNECTIONS`      | `2`                        |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `30`                       |
    /// | `DB_IDLE_TIMEOUT_SECS`    | `600`                      |
    /// | `DB_MAX_LIFETIME_SECS`    | `1800`                     |
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reading variables through
    /// `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = parse_or(&lookup, "PORT", 3000)?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30)?;

        let backend = lookup("STORAGE_BACKEND").unwrap_or_else(|| "postgres".into());
        let storage = match backend.to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => StorageConfig::Memory,
            "postgres" | "postgresql" | "pg" => {
                let database_url = lookup("DATABASE_URL")
                    .context("DATABASE_URL must be set when STORAGE_BACKEND=postgres")?;
                let defaults = PoolConfig::default();
                let pool = PoolConfig {
                    max_connections: parse_or(
                        &lookup,
                        "DB_MAX_CONNECTIONS",
                        defaults.max_connections,
                    )?,
                    min_connections: parse_or(
                        &lookup,
                        "DB_MIN_CONNECTIONS",
                        defaults.min_connections,
                    )?,
                    acquire_timeout: secs_or(
                        &lookup,
                        "DB_ACQUIRE_TIMEOUT_SECS",
                        defaults.acquire_timeout,
                    )?,
                    idle_timeout: secs_or(&lookup, "DB_IDLE_TIMEOUT_SECS", defaults.idle_timeout)?,
                    max_lifetime: secs_or(&lookup, "DB_MAX_LIFETIME_SECS", defaults.max_lifetime)?,
                };
                if pool.min_connections > pool.max_connections {
                    bail!(
                        "DB_MIN_CONNECTIONS ({}) must not exceed DB_MAX_CONNECTIONS ({})",
                        pool.min_connections,
                        pool.max_connections
                    );
                }
                StorageConfig::Postgres { database_url, pool }
            }
            other => bail!("STORAGE_BACKEND must be one of: postgres, memory (got '{other}')"),
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            storage,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid {}", std::any::type_name::<T>())),
        None => Ok(default),
    }
}

fn secs_or(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: Duration,
) -> anyhow::Result<Duration> {
    parse_or(lookup, key, default.as_secs()).map(Duration::from_secs)
}
