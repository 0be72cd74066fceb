//! Durable storage for checkpoints.
//!
//! The persistence layer is a single-writer embedded key-value store
//! ([redb](https://docs.rs/redb)) exposing transactional put/get over named
//! buckets. All keys of the counter live in one bucket (`historicData` by
//! default):
//!
//! | Key          | Value                       |
//! |--------------|-----------------------------|
//! | `<dateCode>` | save point of that day      |
//! | `current`    | latest save point           |
//! | `IPs`        | latest visitor list         |
//!
//! # Architecture
//!
//! - `DatabaseBackend` trait defines the raw bucket operations
//! - `DatabaseConnectorRedb` implements it on top of a redb file
//! - `DatabaseConnector` maps the counter's keys onto a backend
//!
//! # Single writer
//!
//! At most one write transaction is open at any instant. The redb connector
//! holds an exclusive guard for the whole transaction, and reads take the
//! shared side of the same guard so they never overlap a write.

/// Error types for storage operations.
pub mod errors;

/// Implementation blocks for the connectors.
pub mod impls;

/// Data structures for the connectors.
pub mod structs;

/// Storage backend trait definitions.
pub mod traits;
