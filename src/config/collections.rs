//! Collection names.

use serde::Serialize;

use super::EnvSource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionsConfig {
    pub users: String,
    pub refresh_tokens: String,
    pub password_resets: String,
    pub otps: String,
}

impl CollectionsConfig {
    pub(crate) fn from_source(src: &EnvSource<'_>) -> Self {
        Self {
            users: src.string("USER_COLLECTION", "users"),
            refresh_tokens: src.string("REFRESH_TOKEN_COLLECTION", "refresh_tokens"),
            password_resets: src.string("PASSWORD_RESET_TOKEN_COLLECTION", "password_resets"),
            otps: src.string("OTP_COLLECTION", "otps"),
        }
    }
}
