use anyhow::Result;
use tracing::debug;

use crate::core::persistence::interests::interests_log_api_repository_trait::InterestsLogApiRepository;

/// Reads the interests log and turns it into entries, one per non-blank line.
///
/// Nothing is cached: every call reflects the file as it is at call time.
pub struct InterestsService<R: InterestsLogApiRepository> {
    repo: R,
}

impl<R: InterestsLogApiRepository> InterestsService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn list_interests(&self) -> Result<Vec<String>> {
        let text = self.repo.read()?;
        let entries = split_entries(&text);
        debug!(count = entries.len(), "Read interests log");
        Ok(entries)
    }
}

/// Splits log text into entries in file order, dropping whitespace-only lines.
pub fn split_entries(text: &str) -> Vec<String> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
