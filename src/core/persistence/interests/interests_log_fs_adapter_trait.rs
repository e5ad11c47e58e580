use anyhow::Result;

/// Read-only access to the raw text of the interests log.
pub trait InterestsLogFsAdapterTrait: Send + Sync {
    fn read(&self) -> Result<String>;
}
