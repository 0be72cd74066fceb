//! Periodic checkpointing of the aggregates.
//!
//! The scheduler wakes up every `persistent_interval` seconds, copies the
//! aggregates under their read lock, encodes the copy and issues three
//! independent writes:
//!
//! 1. the dated history record (`<dateCode>`)
//! 2. the latest save point (`current`)
//! 3. the visitor list (`IPs`)
//!
//! A failed write is logged and reported, and the remaining writes still
//! run. Failures never stop the scheduler; the next tick retries with a
//! fresh snapshot. When the shutdown channel flips to `true` one final
//! checkpoint is written before the task exits.

pub mod enums;

pub mod structs;

pub mod impls;
