//! Database configuration from the environment.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use vasari_error::ConfigError;

/// Default connection pool size.
pub const DEFAULT_POOL_SIZE: u32 = 10;

/// Connection settings for the gallery database.
///
/// Read from the environment (a `.env` file is honored): `DATABASE_URL`
/// names the PostgreSQL instance and `DATABASE_POOL_SIZE` optionally sizes
/// the connection pool.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection string.
    url: String,
    /// Maximum connections held by the pool.
    #[serde(default = "default_pool_size")]
    pool_size: u32,
}

fn default_pool_size() -> u32 {
    DEFAULT_POOL_SIZE
}

impl DatabaseConfig {
    /// Build a configuration directly.
    pub fn new(url: impl Into<String>, pool_size: u32) -> Self {
        Self {
            url: url.into(),
            pool_size,
        }
    }

    /// Read configuration from the environment.
    ///
    /// Returns `Ok(None)` when `DATABASE_URL` is not set; the caller decides
    /// whether an unconfigured database is an error. A malformed
    /// `DATABASE_POOL_SIZE` is reported rather than silently defaulted.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        dotenvy::dotenv().ok();

        let Ok(url) = std::env::var("DATABASE_URL") else {
            return Ok(None);
        };
        let pool_size = match std::env::var("DATABASE_POOL_SIZE") {
            Ok(raw) => raw
                .parse::<u32>()
                .map_err(|_| ConfigError::new(format!("invalid DATABASE_POOL_SIZE '{raw}'")))?,
            Err(_) => DEFAULT_POOL_SIZE,
        };

        Ok(Some(Self { url, pool_size }))
    }
}
