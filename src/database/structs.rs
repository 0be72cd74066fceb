/// Counter-level view of a storage backend.
pub mod database_connector;

/// redb file backend.
pub mod database_connector_redb;
