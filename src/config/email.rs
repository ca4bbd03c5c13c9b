//! Outbound email and password reset configuration.

use serde::Serialize;
use std::time::Duration;

use super::duration::{self, MINUTE};
use super::{ConfigError, EnvSource};

/// Password reset link settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordResetConfig {
    /// Reset token lifetime in minutes (PASSWORD_RESET_TOKEN_EXPIRE_MINUTES).
    pub expire_minutes: i64,
    /// Frontend page the reset link points at (RESET_URL).
    pub url: String,
}

impl PasswordResetConfig {
    pub(crate) fn from_source(src: &EnvSource<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            expire_minutes: src.int("PASSWORD_RESET_TOKEN_EXPIRE_MINUTES", 15)?,
            url: src.string("RESET_URL", "http://localhost:3000/reset-password"),
        })
    }

    pub fn ttl(&self) -> Duration {
        duration::from_units(self.expire_minutes, MINUTE)
    }
}

/// SMTP relay settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmtpConfig {
    pub host: String,
    pub port: i64,
    /// Sender address.
    pub from: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl SmtpConfig {
    pub(crate) fn from_source(src: &EnvSource<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: src.string("SMTP_HOST", "smtp.gmail.com"),
            port: src.int("SMTP_PORT", 587)?,
            from: src.string("SMTP_FROM", ""),
            username: src.string("SMTP_USERNAME", ""),
            password: src.string("SMTP_PASSWORD", ""),
        })
    }

    /// Relay address in `host:port` form.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
