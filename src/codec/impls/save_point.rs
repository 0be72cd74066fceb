use crate::aggregate::structs::snapshot::Snapshot;
use crate::codec::structs::save_point::SavePoint;

impl SavePoint {
    pub fn from_snapshot(snapshot: &Snapshot) -> SavePoint
    {
        SavePoint {
            page_counts: snapshot.page_counts.clone(),
            unique_views: snapshot.unique_views,
        }
    }
}
