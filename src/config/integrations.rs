//! Third-party API credentials.
//!
//! None of these are validated: an empty key means the integration is not
//! configured, and callers decide whether that is fatal.

use serde::Serialize;

use super::EnvSource;

/// Generative model API settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeminiConfig {
    #[serde(skip_serializing)]
    pub api_key: String,
    pub model_name: String,
}

impl GeminiConfig {
    pub(crate) fn from_source(src: &EnvSource<'_>) -> Self {
        Self {
            api_key: src.string("GEMINI_API_KEY", ""),
            model_name: src.string("GEMINI_MODEL_NAME", "gemini-2.0-flash"),
        }
    }
}

/// Image hosting credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageKitConfig {
    #[serde(skip_serializing)]
    pub private_key: String,
    pub public_key: String,
    pub url_endpoint: String,
}

impl ImageKitConfig {
    pub(crate) fn from_source(src: &EnvSource<'_>) -> Self {
        Self {
            private_key: src.string("IMAGEKIT_PRIVATE_KEY", ""),
            public_key: src.string("IMAGEKIT_PUBLIC_KEY", ""),
            url_endpoint: src.string("IMAGEKIT_URL_ENDPOINT", ""),
        }
    }
}

/// Google OAuth2 client settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    #[serde(skip_serializing)]
    pub client_secret: String,
    pub redirect_url: String,
}

impl GoogleOAuthConfig {
    pub(crate) fn from_source(src: &EnvSource<'_>) -> Self {
        Self {
            client_id: src.string("GOOGLE_CLIENT_ID", ""),
            client_secret: src.string("GOOGLE_CLIENT_SECRET", ""),
            redirect_url: src.string("GOOGLE_REDIRECT_URL", ""),
        }
    }
}
