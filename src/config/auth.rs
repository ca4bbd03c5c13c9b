//! Token and one-time-passcode configuration.

use serde::Serialize;
use std::time::Duration;

use super::duration::{self, HOUR, MINUTE};
use super::{ConfigError, EnvSource};

/// Session token secrets and lifetimes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenConfig {
    /// Signing secret for refresh tokens (REFRESH_TOKEN_SECRET).
    #[serde(skip_serializing)]
    pub refresh_secret: String,
    /// Signing secret for access tokens (ACCESS_TOKEN_SECRET).
    #[serde(skip_serializing)]
    pub access_secret: String,
    /// Refresh token lifetime in hours (REFRESH_TOKEN_EXPIRE_HOURS, default: one week).
    pub refresh_expire_hours: i64,
    /// Access token lifetime in minutes (ACCESS_TOKEN_EXPIRE_MINUTES).
    pub access_expire_minutes: i64,
}

impl TokenConfig {
    pub(crate) fn from_source(src: &EnvSource<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            refresh_secret: src.string("REFRESH_TOKEN_SECRET", ""),
            access_secret: src.string("ACCESS_TOKEN_SECRET", ""),
            refresh_expire_hours: src.int("REFRESH_TOKEN_EXPIRE_HOURS", 24 * 7)?,
            access_expire_minutes: src.int("ACCESS_TOKEN_EXPIRE_MINUTES", 15)?,
        })
    }

    pub fn refresh_ttl(&self) -> Duration {
        duration::from_units(self.refresh_expire_hours, HOUR)
    }

    pub fn access_ttl(&self) -> Duration {
        duration::from_units(self.access_expire_minutes, MINUTE)
    }
}

/// One-time passcode policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtpConfig {
    /// Salt mixed into passcode hashes (MY_SUPER_SECRET_SALT).
    #[serde(skip_serializing)]
    pub secret_salt: String,
    /// Passcode lifetime in minutes (OTP_EXPIRE_MINUTES).
    pub expire_minutes: i64,
    /// Verification attempts allowed per passcode (OTP_MAXIMUM_ATTEMPTS).
    pub maximum_attempts: i64,
}

impl OtpConfig {
    pub(crate) fn from_source(src: &EnvSource<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            secret_salt: src.string("MY_SUPER_SECRET_SALT", ""),
            expire_minutes: src.int("OTP_EXPIRE_MINUTES", 5)?,
            maximum_attempts: src.int("OTP_MAXIMUM_ATTEMPTS", 3)?,
        })
    }

    pub fn ttl(&self) -> Duration {
        duration::from_units(self.expire_minutes, MINUTE)
    }
}
