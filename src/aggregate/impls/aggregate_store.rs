use std::collections::{BTreeMap, BTreeSet};
use crate::aggregate::structs::aggregate_store::AggregateStore;
use crate::aggregate::structs::aggregate_summary::AggregateSummary;
use crate::aggregate::structs::snapshot::Snapshot;

impl AggregateStore {
    pub fn new() -> AggregateStore
    {
        AggregateStore::default()
    }

    #[tracing::instrument(level = "debug", skip(self))]
    #[inline]
    pub fn record_visit(&self, page_id: &str, client_id: &str)
    {
        let mut lock = self.aggregates.write();
        match lock.page_counters.get_mut(page_id) {
            Some(count) => { *count = count.saturating_add(1); }
            None => { lock.page_counters.insert(page_id.to_string(), 1); }
        }
        if !lock.visitors.contains(client_id) {
            lock.visitors.insert(client_id.to_string());
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn snapshot(&self) -> Snapshot
    {
        let lock = self.aggregates.read();
        Snapshot {
            page_counts: lock.page_counters.iter().map(|(page, count)| (page.clone(), *count)).collect(),
            unique_views: lock.visitors.len() as u64,
            visitor_ids: lock.visitors.iter().cloned().collect(),
        }
    }

    /// Merges previously persisted aggregates into the live ones.
    ///
    /// Must run before the store is shared with request handlers. A restored
    /// count replaces any live count under the same page.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn restore(&self, page_counts: BTreeMap<String, u64>, visitor_ids: BTreeSet<String>)
    {
        let mut lock = self.aggregates.write();
        lock.page_counters.extend(page_counts);
        lock.visitors.extend(visitor_ids);
    }

    pub fn summary(&self) -> AggregateSummary
    {
        let lock = self.aggregates.read();
        AggregateSummary {
            pages: lock.page_counters.len() as u64,
            views: lock.page_counters.values().fold(0u64, |total, count| total.saturating_add(*count)),
            unique_views: lock.visitors.len() as u64,
        }
    }

    pub fn get_page_count(&self, page_id: &str) -> u64
    {
        let lock = self.aggregates.read();
        lock.page_counters.get(page_id).copied().unwrap_or(0)
    }
}
