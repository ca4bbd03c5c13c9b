//! Datastore configuration.

use serde::Serialize;

use super::EnvSource;

/// Datastore connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseConfig {
    /// Connection string (DB_URI). The only required setting.
    #[serde(skip_serializing)]
    pub uri: String,
    /// Database name (DB_NAME).
    pub name: String,
}

impl DatabaseConfig {
    pub(crate) fn from_source(src: &EnvSource<'_>) -> Self {
        Self {
            uri: src.string("DB_URI", ""),
            name: src.string("DB_NAME", ""),
        }
    }
}
