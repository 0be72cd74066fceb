pub mod null_as_default;
pub mod save_point;
pub mod snapshot_codec;
pub mod visitor_list;
