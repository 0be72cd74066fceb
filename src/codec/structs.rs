/// Both payloads of one encoded snapshot.
pub mod encoded_snapshot;

/// Page counts and unique view count payload.
pub mod save_point;

/// The codec entry point.
pub mod snapshot_codec;

/// Visitor identifiers payload.
pub mod visitor_list;
