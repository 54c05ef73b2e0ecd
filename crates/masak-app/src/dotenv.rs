//! `.env` loading.

use std::path::Path;

/// Load `path` into the process environment. Variables that are already
/// set are left alone. Returns whether a file was read.
pub fn load(path: &Path) -> Result<bool, dotenvy::Error> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(e),
    }
}
