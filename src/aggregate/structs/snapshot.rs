use std::collections::{BTreeMap, BTreeSet};

/// Consistent copy of the aggregates at one instant.
///
/// Ordered collections keep the encoded form deterministic, so encoding the
/// same state twice yields the same bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    pub page_counts: BTreeMap<String, u64>,
    pub unique_views: u64,
    pub visitor_ids: BTreeSet<String>,
}
