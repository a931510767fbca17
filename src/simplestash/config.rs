use crate::error::{Result, StashError};
use directories::BaseDirs;
use std::io;
use std::path::{Path, PathBuf};

pub const STORE_FILENAME: &str = ".simplestash.yml";
pub const LOG_FILENAME: &str = ".simplestash.log";

/// Environment variable overriding the directory both files live in.
/// Integration tests point this at a temp dir instead of the real home.
pub const HOME_ENV: &str = "SIMPLESTASH_HOME";

/// Where the stash keeps its two files. Passed explicitly into the store
/// and the CLI wiring instead of living as process-wide globals.
#[derive(Debug, Clone)]
pub struct StashPaths {
    pub store_file: PathBuf,
    pub log_file: PathBuf,
}

impl StashPaths {
    /// Resolve against `SIMPLESTASH_HOME` if set, otherwise the user's home
    /// directory.
    pub fn resolve() -> Result<Self> {
        if let Some(dir) = std::env::var_os(HOME_ENV) {
            return Ok(Self::in_dir(Path::new(&dir)));
        }
        let base = BaseDirs::new().ok_or_else(|| {
            StashError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine the home directory",
            ))
        })?;
        Ok(Self::in_dir(base.home_dir()))
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self {
            store_file: dir.join(STORE_FILENAME),
            log_file: dir.join(LOG_FILENAME),
        }
    }
}
