use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RestoredState {
    pub page_counts: BTreeMap<String, u64>,
    pub visitor_ids: BTreeSet<String>,
    pub found: bool,
}
