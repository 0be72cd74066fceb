use std::sync::Arc;
use crate::codec::structs::snapshot_codec::SnapshotCodec;
use crate::database::structs::database_connector::DatabaseConnector;

#[derive(Debug, Clone)]
pub struct RestoreLoader {
    pub(crate) database: Arc<DatabaseConnector>,
    pub(crate) codec: SnapshotCodec,
}
