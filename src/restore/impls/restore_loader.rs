use std::collections::BTreeSet;
use std::sync::Arc;
use log::{info, warn};
use crate::aggregate::structs::aggregate_store::AggregateStore;
use crate::codec::structs::snapshot_codec::SnapshotCodec;
use crate::database::errors::DatabaseError;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::restore::structs::restore_loader::RestoreLoader;
use crate::restore::structs::restored_state::RestoredState;

impl RestoreLoader {
    pub fn new(database: Arc<DatabaseConnector>) -> RestoreLoader
    {
        RestoreLoader {
            database,
            codec: SnapshotCodec,
        }
    }

    /// Reads the latest checkpoint.
    ///
    /// Returns `found = false` with empty aggregates when nothing was ever
    /// checkpointed. Fails with `CorruptData` when a stored payload does not
    /// decode, and with `StorageUnavailable` when the store cannot be read.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn load(&self) -> Result<RestoredState, DatabaseError>
    {
        if !self.database.bucket_exists()? {
            info!("[RESTORE] Bucket {} not found, starting with empty counters", self.database.bucket());
            return Ok(RestoredState::default());
        }

        let save_point = match self.database.get_current()? {
            None => {
                info!("[RESTORE] No previous checkpoint found, starting with empty counters");
                return Ok(RestoredState::default());
            }
            Some(data) => self.codec.decode_save_point(&data)?,
        };

        let visitor_ids = match self.database.get_visitors()? {
            None => {
                warn!("[RESTORE] Checkpoint has no visitor list, unique views restart at 0");
                BTreeSet::new()
            }
            Some(data) => self.codec.decode_visitors(&data)?.visitor_ids(),
        };

        if save_point.unique_views != visitor_ids.len() as u64 {
            warn!(
                "[RESTORE] Stored unique views ({}) differ from visitor list size ({}), using the visitor list",
                save_point.unique_views,
                visitor_ids.len()
            );
        }

        Ok(RestoredState {
            page_counts: save_point.page_counts,
            visitor_ids,
            found: true,
        })
    }

    /// Loads the latest checkpoint and merges it into `store`.
    pub fn restore_into(&self, store: &AggregateStore) -> Result<bool, DatabaseError>
    {
        let state = self.load()?;
        if !state.found {
            return Ok(false);
        }
        let pages = state.page_counts.len();
        let visitors = state.visitor_ids.len();
        store.restore(state.page_counts, state.visitor_ids);
        info!("[RESTORE] Restored {pages} pages and {visitors} unique visitors");
        Ok(true)
    }
}
