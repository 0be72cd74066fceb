/// The shared, lock-protected aggregate store.
pub mod aggregate_store;

/// The composite of page counters and visitor set guarded by one lock.
pub mod aggregates;

/// Cheap counters read from the live aggregates.
pub mod aggregate_summary;

/// Immutable point-in-time copy of the aggregates.
pub mod snapshot;
