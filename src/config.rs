use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

const DEFAULT_DATABASE_URL: &str = "sqlite://activities.db?mode=rwc";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub static_dir: String,
    pub max_connections: u32,
    pub busy_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: DEFAULT_STATIC_DIR.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            busy_timeout: Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS),
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment. Call `dotenvy::dotenv()`
    /// first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup. Unset or blank
    /// variables fall back to defaults; set-but-unparseable ones are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            database_url: var("DATABASE_URL").unwrap_or(defaults.database_url),
            host: var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT", var("PORT"))?.unwrap_or(defaults.port),
            static_dir: var("STATIC_DIR").unwrap_or(defaults.static_dir),
            max_connections: parse_var("DB_MAX_CONNECTIONS", var("DB_MAX_CONNECTIONS"))?
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_connections),
            busy_timeout: parse_var::<u64>("DB_BUSY_TIMEOUT_MS", var("DB_BUSY_TIMEOUT_MS"))?
                .map(Duration::from_millis)
                .unwrap_or(defaults.busy_timeout),
        })
    }
}

fn parse_var<T: FromStr>(
    name: &'static str,
    raw: Option<String>,
) -> Result<Option<T>, ConfigError> {
    match raw {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidVar { name, value }),
    }
}
