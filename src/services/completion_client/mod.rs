pub mod completion_service;
pub mod types;
