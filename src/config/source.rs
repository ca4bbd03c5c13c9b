//! Key-value lookup the loader resolves every setting through.

use super::ConfigError;

/// Wraps a lookup function (usually the process environment) and applies
/// defaults and integer parsing on top of it.
pub(crate) struct EnvSource<'a> {
    lookup: &'a dyn Fn(&str) -> Option<String>,
}

impl<'a> EnvSource<'a> {
    pub(crate) fn new(lookup: &'a dyn Fn(&str) -> Option<String>) -> Self {
        Self { lookup }
    }

    /// Returns the value for `key`, or `default` when the key is absent.
    /// A present but empty value is returned as-is.
    pub(crate) fn string(&self, key: &str, default: &str) -> String {
        (self.lookup)(key).unwrap_or_else(|| default.to_string())
    }

    /// Returns the value for `key` parsed as a base-10 integer, or `default`
    /// when the key is absent.
    pub(crate) fn int(&self, key: &'static str, default: i64) -> Result<i64, ConfigError> {
        match (self.lookup)(key) {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidInteger { key, value, source }),
            None => Ok(default),
        }
    }
}
