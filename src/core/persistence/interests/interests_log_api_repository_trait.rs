use super::interests_log_fs_adapter_trait::InterestsLogFsAdapterTrait;

/// API-facing repository abstraction for the interests log.
pub trait InterestsLogApiRepository: Send + Sync {
    fn fs_adapter(&self) -> &dyn InterestsLogFsAdapterTrait;

    fn read(&self) -> anyhow::Result<String> {
        self.fs_adapter().read()
    }
}
