/// Errors raised while reading, writing or validating the configuration.
pub mod configuration_error;

/// Format used for the dated history keys.
pub mod history_key_format;
