pub mod aggregate_store;
pub mod snapshot;
