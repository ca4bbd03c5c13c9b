//! Conversion of integer settings into `Duration`.

use std::time::Duration;

pub(crate) const SECOND: u64 = 1;
pub(crate) const MINUTE: u64 = 60;
pub(crate) const HOUR: u64 = 3600;

/// Interprets `value` as a count of `unit` seconds. Negative values map to zero.
pub(crate) fn from_units(value: i64, unit: u64) -> Duration {
    let count = u64::try_from(value).unwrap_or(0);
    Duration::from_secs(count.saturating_mul(unit))
}
