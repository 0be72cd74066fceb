//! In-memory page view aggregates.
//!
//! This module owns the two live aggregates of the counter:
//! - **Page counters**: page identifier to number of visits
//! - **Visitor set**: every client identifier seen so far
//!
//! # Concurrency
//!
//! Both aggregates live in one composite `Aggregates` struct behind a single
//! `parking_lot::RwLock`. Recording a visit takes the write lock, taking a
//! snapshot takes the read lock, so a snapshot always sees counters and
//! visitors from the same instant. The lock is never held across I/O.
//!
//! # Example
//!
//! ```rust,ignore
//! use view_counter::aggregate::structs::aggregate_store::AggregateStore;
//!
//! let store = AggregateStore::new();
//! store.record_visit("index", "127.0.0.1");
//! let snapshot = store.snapshot();
//! assert_eq!(snapshot.unique_views, 1);
//! ```

/// Data structures for the aggregates and their snapshots.
pub mod structs;

/// Implementation blocks for the aggregate store and snapshots.
pub mod impls;

/// Hash map and set aliases used by the live aggregates.
pub mod types;

#[cfg(test)]
mod tests;
