//! Pagination defaults.

use serde::Serialize;

use super::{ConfigError, EnvSource};

/// Defaults applied to list queries that omit paging parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationConfig {
    pub page: i64,
    pub page_size: i64,
    /// Sort order keyword, "new" by default.
    pub recency: String,
}

impl PaginationConfig {
    pub(crate) fn from_source(src: &EnvSource<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            page: src.int("PAGE", 1)?,
            page_size: src.int("PAGE_SIZE", 10)?,
            recency: src.string("RECENCY", "new"),
        })
    }
}
