// config.rs
use std::{env, fmt::Display, net::SocketAddr, path::PathBuf, str::FromStr};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub workers: usize,
    /// When set, reviews are read from this SQLite file instead of the
    /// built-in fixture set.
    pub db_path: Option<PathBuf>,
    pub schema_path: PathBuf,
}

impl Config {
    /// Read configuration from the environment (and `.env`, if present).
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            info!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::load`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            addr: try_load(&lookup, "REVIEW_BOARD_ADDR", "127.0.0.1:3000")?,
            workers: try_load(&lookup, "REVIEW_BOARD_WORKERS", "8")?,
            db_path: lookup("REVIEW_BOARD_DB")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            schema_path: try_load(&lookup, "REVIEW_BOARD_SCHEMA", "sql/schema.sql")?,
        })
    }
}

fn try_load<T, F>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value: raw.clone(),
    })
}
