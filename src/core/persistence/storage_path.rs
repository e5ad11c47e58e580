use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Location of the interests log relative to the working directory,
/// used when no override is configured.
pub const DEFAULT_INTERESTS_LOG_PATH: &str = "../Interests/tracked/interests.log";

/// Resolves the interests log against the process working directory.
///
/// Absolute paths are returned as-is.
pub fn interests_log_path(configured: &Path) -> Result<PathBuf> {
    if configured.is_absolute() {
        return Ok(configured.to_path_buf());
    }

    let cwd = env::current_dir().context("Failed to resolve working directory")?;
    Ok(cwd.join(configured))
}
