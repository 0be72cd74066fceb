/// Generic error type carrying a message.
pub mod custom_error;
