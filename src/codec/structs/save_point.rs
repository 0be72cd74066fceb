use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::codec::impls::null_as_default::null_as_default;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SavePoint {
    #[serde(rename = "PageCounts", default, deserialize_with = "null_as_default")]
    pub page_counts: BTreeMap<String, u64>,
    #[serde(rename = "UniqueViews", default)]
    pub unique_views: u64,
}
