use std::path::PathBuf;

use super::interests_log_api_repository_trait::InterestsLogApiRepository;
use super::interests_log_fs_adapter::InterestsLogFsAdapter;
use super::interests_log_fs_adapter_trait::InterestsLogFsAdapterTrait;

pub struct InterestsLogRepository {
    adapter: InterestsLogFsAdapter,
}

impl InterestsLogRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            adapter: InterestsLogFsAdapter::new(path),
        }
    }
}

impl InterestsLogApiRepository for InterestsLogRepository {
    fn fs_adapter(&self) -> &dyn InterestsLogFsAdapterTrait {
        &self.adapter
    }
}
