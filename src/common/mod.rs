//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! the other modules of the counter.
//!
//! # Utilities
//!
//! - Log level parsing
//! - Logging setup
//!
//! # Data Structures
//!
//! - `CustomError` - Generic error carrying a message

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
