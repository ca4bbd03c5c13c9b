//! Configuration error types.

use std::num::ParseIntError;

use thiserror::Error;

/// Configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a base-10 integer, got {value:?}: {source}")]
    InvalidInteger {
        key: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("{key} is required but empty; set it in .env or environment")]
    MissingRequired { key: &'static str },
}
