pub mod interests_log_api_repository_trait;
pub mod interests_log_fs_adapter;
pub mod interests_log_fs_adapter_trait;
pub mod interests_log_repository;
