//! Configuration loading for the service.
//!
//! Every setting comes from an environment variable, optionally seeded from a
//! local `.env` file. Absent variables fall back to built-in defaults. Only
//! `DB_URI` is required.

mod app;
mod auth;
mod collections;
mod database;
mod duration;
mod email;
mod error;
mod integrations;
mod overlay;
mod pagination;
mod redis;
mod source;

pub use app::AppConfig;
pub use auth::{OtpConfig, TokenConfig};
pub use collections::CollectionsConfig;
pub use database::DatabaseConfig;
pub use email::{PasswordResetConfig, SmtpConfig};
pub use error::ConfigError;
pub use integrations::{GeminiConfig, GoogleOAuthConfig, ImageKitConfig};
pub use pagination::PaginationConfig;
pub use redis::{CacheConfig, RedisConfig};
pub(crate) use source::EnvSource;

use serde::Serialize;
use std::{
    env::{self, VarError},
    path::Path,
};
use tracing::info;

/// Root configuration structure.
///
/// Built once at startup and read-only afterwards; share it behind an `Arc`
/// or by clone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Listen address, environment name and request timeout.
    pub app: AppConfig,
    /// Datastore connection.
    pub database: DatabaseConfig,
    /// Session token secrets and expiries.
    pub tokens: TokenConfig,
    /// List query defaults.
    pub pagination: PaginationConfig,
    /// Collection names.
    pub collections: CollectionsConfig,
    /// Password reset links.
    pub password_reset: PasswordResetConfig,
    /// Outbound email.
    pub smtp: SmtpConfig,
    pub gemini: GeminiConfig,
    pub imagekit: ImageKitConfig,
    /// One-time passcode policy.
    pub otp: OtpConfig,
    pub redis: RedisConfig,
    pub cache: CacheConfig,
    pub google: GoogleOAuthConfig,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Variables from `.env` in the working directory are added first if the
    /// file exists. They never replace variables that are already set, and a
    /// missing or malformed file is ignored.
    pub fn load() -> Result<Self, ConfigError> {
        overlay::apply(Path::new(overlay::DEFAULT_PATH));
        Self::from_lookup(process_env)
    }

    /// Same as [`Config::load`] with an explicit overlay file.
    pub fn load_with_overlay(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        overlay::apply(path.as_ref());
        Self::from_lookup(process_env)
    }

    /// Resolve every setting through `lookup`.
    ///
    /// Integer settings are parsed as they are read, so the first malformed
    /// one aborts the load. The `DB_URI` check runs last.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let src = EnvSource::new(&lookup);

        let database = DatabaseConfig::from_source(&src);
        let tokens = TokenConfig::from_source(&src)?;
        let app = AppConfig::from_source(&src)?;
        let pagination = PaginationConfig::from_source(&src)?;
        let collections = CollectionsConfig::from_source(&src);
        let password_reset = PasswordResetConfig::from_source(&src)?;
        let smtp = SmtpConfig::from_source(&src)?;
        let gemini = GeminiConfig::from_source(&src);
        let imagekit = ImageKitConfig::from_source(&src);
        let otp = OtpConfig::from_source(&src)?;
        let redis = RedisConfig::from_source(&src)?;
        let cache = CacheConfig::from_source(&src)?;
        let google = GoogleOAuthConfig::from_source(&src);

        let config = Config {
            app,
            database,
            tokens,
            pagination,
            collections,
            password_reset,
            smtp,
            gemini,
            imagekit,
            otp,
            redis,
            cache,
            google,
        };

        if config.is_development() {
            info!("The app is running in development env");
        }

        if config.database.uri.is_empty() {
            return Err(ConfigError::MissingRequired { key: "DB_URI" });
        }

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.app.env == "development"
    }
}

// Non-UTF-8 values count as present; invalid bytes become U+FFFD.
fn process_env(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) => Some(value),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(raw)) => Some(raw.to_string_lossy().into_owned()),
    }
}
