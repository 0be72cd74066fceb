use crate::aggregate::structs::snapshot::Snapshot;
use crate::codec::errors::CodecError;
use crate::codec::structs::encoded_snapshot::EncodedSnapshot;
use crate::codec::structs::save_point::SavePoint;
use crate::codec::structs::snapshot_codec::SnapshotCodec;
use crate::codec::structs::visitor_list::VisitorList;

impl SnapshotCodec {
    pub fn encode_save_point(&self, snapshot: &Snapshot) -> Result<Vec<u8>, CodecError>
    {
        serde_json::to_vec(&SavePoint::from_snapshot(snapshot))
            .map_err(|e| CodecError::SerializationError(e.to_string()))
    }

    pub fn encode_visitors(&self, snapshot: &Snapshot) -> Result<Vec<u8>, CodecError>
    {
        serde_json::to_vec(&VisitorList::from_snapshot(snapshot))
            .map_err(|e| CodecError::SerializationError(e.to_string()))
    }

    pub fn encode(&self, snapshot: &Snapshot) -> Result<EncodedSnapshot, CodecError>
    {
        Ok(EncodedSnapshot {
            save_point: self.encode_save_point(snapshot)?,
            visitors: self.encode_visitors(snapshot)?,
        })
    }

    pub fn decode_save_point(&self, data: &[u8]) -> Result<SavePoint, CodecError>
    {
        serde_json::from_slice(data)
            .map_err(|e| CodecError::CorruptData(format!("save point: {e}")))
    }

    pub fn decode_visitors(&self, data: &[u8]) -> Result<VisitorList, CodecError>
    {
        serde_json::from_slice(data)
            .map_err(|e| CodecError::CorruptData(format!("visitor list: {e}")))
    }

    pub fn decode(&self, encoded: &EncodedSnapshot) -> Result<Snapshot, CodecError>
    {
        let save_point = self.decode_save_point(&encoded.save_point)?;
        let visitors = self.decode_visitors(&encoded.visitors)?;
        Ok(Snapshot {
            page_counts: save_point.page_counts,
            unique_views: save_point.unique_views,
            visitor_ids: visitors.visitor_ids(),
        })
    }
}
