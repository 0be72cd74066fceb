//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the counter
//! configuration from a TOML file.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains:
//! - **log_level** / **log_console_interval**: Logging verbosity and console stats cadence
//! - **stats_password**: Shared secret guarding the stats endpoint
//! - **http_server**: Listener address, proxy header and worker settings
//! - **database**: Storage file, bucket, checkpoint interval and history key format
//! - **sentry_config**: Optional error reporting
//!
//! # Example
//!
//! ```rust,ignore
//! use view_counter::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating a default one if asked to
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations (history key format, errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
