//! Resolve platform directories for `gisthub`.
//!
//! The helpers in this module respect environment overrides while falling back
//! to platform-appropriate locations provided by the `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "gisthub";
const APPLICATION: &str = "gisthub";

const CACHE_DIR_ENV: &str = "GISTHUB_CACHE_DIR";

/// Return the platform-specific directory layout for the application.
fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| anyhow!("unable to determine project directories for gisthub"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty string is treated the same as an unset value so that callers can
/// use shell defaults without worrying about trailing whitespace.
fn dir_from_env(name: &str) -> Option<PathBuf> {
    let value = env::var_os(name)?;
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

/// Return the cache directory used for log output and other scratch files.
pub fn get_cache_dir() -> Result<PathBuf> {
    if let Some(dir) = dir_from_env(CACHE_DIR_ENV) {
        return Ok(dir);
    }

    Ok(project_dirs()?.cache_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn cache_dir_env_override_wins() {
        let dir = tempdir().unwrap();
        // Safety: no other test reads or writes this variable.
        unsafe { env::set_var(CACHE_DIR_ENV, dir.path()) };
        let resolved = get_cache_dir().unwrap();
        unsafe { env::remove_var(CACHE_DIR_ENV) };
        assert_eq!(resolved, dir.path());
    }

    #[test]
    fn empty_env_value_is_ignored() {
        assert_eq!(dir_from_env("GISTHUB_UNSET_DIR"), None);
    }
}
