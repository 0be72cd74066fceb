use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::codec::impls::null_as_default::null_as_default;

/// Visitor identifiers keyed by client, the value is always `true`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct VisitorList {
    #[serde(rename = "IPs", default, deserialize_with = "null_as_default")]
    pub ips: BTreeMap<String, bool>,
}
