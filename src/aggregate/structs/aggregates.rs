use crate::aggregate::types::ahash_map::{AHashMap, AHashSet};

#[derive(Debug, Default)]
pub struct Aggregates {
    pub page_counters: AHashMap<String, u64>,
    pub visitors: AHashSet<String>,
}
