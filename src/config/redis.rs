//! Key-value store and cache configuration.

use serde::Serialize;
use std::time::Duration;

use super::duration::{self, SECOND};
use super::{ConfigError, EnvSource};

/// Redis connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedisConfig {
    pub host: String,
    pub port: i64,
    #[serde(skip_serializing)]
    pub password: String,
    /// Logical database index.
    pub db: i64,
}

impl RedisConfig {
    pub(crate) fn from_source(src: &EnvSource<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: src.string("REDIS_HOST", "localhost"),
            port: src.int("REDIS_PORT", 6379)?,
            password: src.string("REDIS_PASSWORD", ""),
            db: src.int("REDIS_DB", 0)?,
        })
    }

    /// Server address in `host:port` form.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Cache entry settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheConfig {
    /// Entry lifetime in seconds (CACHE_EXPIRATION_SECONDS).
    pub expiration_secs: i64,
}

impl CacheConfig {
    pub(crate) fn from_source(src: &EnvSource<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            expiration_secs: src.int("CACHE_EXPIRATION_SECONDS", 3600)?,
        })
    }

    pub fn expiration(&self) -> Duration {
        duration::from_units(self.expiration_secs, SECOND)
    }
}
