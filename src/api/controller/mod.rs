pub mod interests;
pub mod viewer;
