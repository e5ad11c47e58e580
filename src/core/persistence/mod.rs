pub mod interests;
pub mod storage_path;
