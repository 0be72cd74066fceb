use crate::aggregate::structs::snapshot::Snapshot;

impl Snapshot {
    pub fn is_empty(&self) -> bool
    {
        self.page_counts.is_empty() && self.visitor_ids.is_empty()
    }

    pub fn total_views(&self) -> u64
    {
        self.page_counts.values().fold(0u64, |total, count| total.saturating_add(*count))
    }
}
