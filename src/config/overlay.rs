//! Best-effort `.env` overlay.

use std::{env, path::Path};
use tracing::debug;

/// Overlay file read by [`super::Config::load`], relative to the working directory.
pub(crate) const DEFAULT_PATH: &str = ".env";

/// Adds the variables in `path` to the process environment.
///
/// Nothing is applied unless the whole file parses. Variables that are
/// already set keep their value; within the file the last assignment wins.
pub(crate) fn apply(path: &Path) {
    let entries = match dotenvy::from_path_iter(path)
        .and_then(|iter| iter.collect::<Result<Vec<_>, _>>())
    {
        Ok(entries) => entries,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Skipping env overlay");
            return;
        }
    };

    let fresh: Vec<(String, String)> = entries
        .into_iter()
        .filter(|(key, _)| env::var_os(key).is_none())
        .collect();

    for (key, value) in fresh {
        // SAFETY: runs during startup, before any other thread reads the environment.
        unsafe { env::set_var(key, value) };
    }
}
