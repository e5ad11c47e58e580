use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::interests_log_fs_adapter_trait::InterestsLogFsAdapterTrait;

/// FS adapter for the append-only interests log.
///
/// The file is owned by an external tracker; this adapter never writes to it.
pub struct InterestsLogFsAdapter {
    path: PathBuf,
}

impl InterestsLogFsAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InterestsLogFsAdapterTrait for InterestsLogFsAdapter {
    fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read interests log at {}", self.path.display()))
    }
}
