use std::collections::BTreeSet;
use crate::aggregate::structs::snapshot::Snapshot;
use crate::codec::structs::visitor_list::VisitorList;

impl VisitorList {
    pub fn from_snapshot(snapshot: &Snapshot) -> VisitorList
    {
        VisitorList {
            ips: snapshot.visitor_ids.iter().map(|client| (client.clone(), true)).collect(),
        }
    }

    /// Every client key of the list, whatever its flag.
    pub fn visitor_ids(&self) -> BTreeSet<String>
    {
        self.ips.keys().cloned().collect()
    }
}
