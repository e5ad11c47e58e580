pub mod interests_service;
