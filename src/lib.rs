//! # view-counter
//!
//! A small page view counter. Every hit on `/count/{page_id}` bumps the view
//! count of that page and remembers the client, whose distinct number is
//! reported as unique views. The counters live in memory and are
//! checkpointed to an embedded [redb](https://docs.rs/redb) database at a
//! fixed interval, so a restart picks up where the last checkpoint left off.
//!
//! ## Modules
//!
//! - [`aggregate`] - Live page counters and visitor set behind one lock
//! - [`codec`] - JSON form of a snapshot
//! - [`common`] - Logging setup and shared error type
//! - [`config`] - TOML configuration loading and validation
//! - [`database`] - Bucketed key-value storage on redb
//! - [`http`] - actix-web endpoints
//! - [`restore`] - Startup rehydration and history export
//! - [`scheduler`] - Periodic checkpoint task
//! - [`structs`] - Command line arguments

pub mod aggregate;

pub mod codec;

/// Logging setup and the shared `CustomError`.
pub mod common;

/// Configuration loading, defaults and validation.
pub mod config;

pub mod database;

pub mod http;

pub mod restore;

pub mod scheduler;

/// Command line arguments.
pub mod structs;
