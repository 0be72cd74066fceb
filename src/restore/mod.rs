//! Startup rehydration of the aggregates.
//!
//! Before the HTTP service accepts traffic the last checkpoint is read back
//! from storage and merged into the `AggregateStore`. A missing bucket or a
//! missing `current` key is a normal first run. A payload that does not
//! decode is fatal: starting with silently zeroed counters would overwrite
//! the history on the next checkpoint.

pub mod structs;

pub mod impls;
