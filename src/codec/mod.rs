//! Snapshot codec.
//!
//! Converts aggregate snapshots to and from their durable JSON form. An
//! encoded snapshot is made of two payloads stored under separate keys:
//!
//! - **Save point** (`{"PageCounts": {...}, "UniqueViews": n}`), written to the
//!   dated history key and to `current`
//! - **Visitor list** (`{"IPs": {"<client>": true, ...}}`), written to `IPs`
//!
//! Both payloads are field-tagged: unknown fields are ignored and missing
//! fields fall back to their defaults, so the layout can grow without
//! breaking older data. Structurally broken payloads decode to
//! `CodecError::CorruptData`.

/// Error types for encoding and decoding.
pub mod errors;

/// Serialized payload structures.
pub mod structs;

/// Implementation blocks for the codec.
pub mod impls;
