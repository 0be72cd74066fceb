use std::sync::Arc;
use std::time::Duration;
use parking_lot::RwLock;
use crate::aggregate::structs::aggregate_store::AggregateStore;
use crate::codec::structs::snapshot_codec::SnapshotCodec;
use crate::config::enums::history_key_format::HistoryKeyFormat;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::scheduler::enums::checkpoint_state::CheckpointState;

#[derive(Debug)]
pub struct CheckpointScheduler {
    pub(crate) aggregate_store: Arc<AggregateStore>,
    pub(crate) database: Arc<DatabaseConnector>,
    pub(crate) codec: SnapshotCodec,
    pub(crate) interval: Duration,
    pub(crate) history_key: HistoryKeyFormat,
    pub(crate) state: RwLock<CheckpointState>,
}
