pub mod chat_completion;
pub mod completion_service_error;
