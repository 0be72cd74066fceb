/// Loading, saving and validating `Configuration`.
pub mod configuration;

/// Display and Error implementations for `ConfigurationError`.
pub mod configuration_error;

/// History key derivation.
pub mod history_key_format;
