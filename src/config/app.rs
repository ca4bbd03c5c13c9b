//! Application-level configuration.

use serde::Serialize;
use std::time::Duration;

use super::duration::{self, SECOND};
use super::{ConfigError, EnvSource};

/// Network binding and runtime environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    /// Listen address, e.g. ":8080" (PORT).
    pub port: String,
    /// Environment name: "development", "staging", "production" (APP_ENV).
    pub env: String,
    /// Per-request context timeout in seconds (CONTEXT_TIMEOUT_SECONDS).
    pub context_timeout_secs: i64,
}

impl AppConfig {
    pub(crate) fn from_source(src: &EnvSource<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            port: src.string("PORT", ":8080"),
            env: src.string("APP_ENV", "development"),
            context_timeout_secs: src.int("CONTEXT_TIMEOUT_SECONDS", 10)?,
        })
    }

    pub fn context_timeout(&self) -> Duration {
        duration::from_units(self.context_timeout_secs, SECOND)
    }
}
