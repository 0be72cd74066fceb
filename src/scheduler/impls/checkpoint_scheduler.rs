use std::sync::Arc;
use std::time::Duration;
use chrono::NaiveDate;
use log::{debug, error, info};
use parking_lot::RwLock;
use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior};
use crate::aggregate::structs::aggregate_store::AggregateStore;
use crate::codec::structs::snapshot_codec::SnapshotCodec;
use crate::config::enums::history_key_format::HistoryKeyFormat;
use crate::database::errors::DatabaseError;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::scheduler::enums::checkpoint_state::CheckpointState;
use crate::scheduler::structs::checkpoint_report::CheckpointReport;
use crate::scheduler::structs::checkpoint_scheduler::CheckpointScheduler;

impl CheckpointScheduler {
    pub fn new(aggregate_store: Arc<AggregateStore>, database: Arc<DatabaseConnector>, interval: Duration, history_key: HistoryKeyFormat) -> CheckpointScheduler
    {
        CheckpointScheduler {
            aggregate_store,
            database,
            codec: SnapshotCodec,
            interval,
            history_key,
            state: RwLock::new(CheckpointState::Idle),
        }
    }

    pub fn state(&self) -> CheckpointState
    {
        *self.state.read()
    }

    fn set_state(&self, state: CheckpointState)
    {
        *self.state.write() = state;
    }

    /// Captures and persists the aggregates, keyed by today's local date.
    pub fn checkpoint(&self) -> CheckpointReport
    {
        self.checkpoint_at(chrono::Local::now().date_naive())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn checkpoint_at(&self, date: NaiveDate) -> CheckpointReport
    {
        let history_key = self.history_key.history_key(date);
        let mut report = CheckpointReport {
            history_key: history_key.clone(),
            ..Default::default()
        };

        self.set_state(CheckpointState::Capturing);
        let snapshot = self.aggregate_store.snapshot();
        let encoded = match self.codec.encode(&snapshot) {
            Ok(encoded) => encoded,
            Err(error) => {
                error!("[CHECKPOINT] Unable to encode snapshot: {error}");
                sentry::capture_message(&format!("[CHECKPOINT] Unable to encode snapshot: {error}"), sentry::Level::Error);
                self.set_state(CheckpointState::Idle);
                return report;
            }
        };

        self.set_state(CheckpointState::Persisting);
        report.history_written = Self::persisted(history_key.as_str(), self.database.put_history(history_key.as_str(), &encoded.save_point));
        report.current_written = Self::persisted("current", self.database.put_current(&encoded.save_point));
        report.visitors_written = Self::persisted("IPs", self.database.put_visitors(&encoded.visitors));
        self.set_state(CheckpointState::Idle);

        if report.is_complete() {
            info!(
                "[CHECKPOINT] Saved {} pages and {} unique views under {}",
                snapshot.page_counts.len(),
                snapshot.unique_views,
                history_key
            );
        } else {
            error!("[CHECKPOINT] {} of 3 writes failed, retrying on next tick", report.failed_writes());
        }
        report
    }

    fn persisted(key: &str, result: Result<(), DatabaseError>) -> bool
    {
        match result {
            Ok(_) => {
                debug!("[CHECKPOINT] Wrote key {key}");
                true
            }
            Err(error) => {
                error!("[CHECKPOINT] Unable to write key {key}: {error}");
                sentry::capture_message(&format!("[CHECKPOINT] Unable to write key {key}: {error}"), sentry::Level::Error);
                false
            }
        }
    }

    /// Runs `checkpoint` on the blocking pool so storage I/O stays off the
    /// async workers.
    pub async fn checkpoint_blocking(self: Arc<Self>) -> Option<CheckpointReport>
    {
        match tokio::task::spawn_blocking(move || self.checkpoint()).await {
            Ok(report) => Some(report),
            Err(error) => {
                error!("[CHECKPOINT] Checkpoint task failed: {error}");
                None
            }
        }
    }

    /// Ticks until `shutdown` turns `true` (or its sender is dropped), then
    /// writes one final checkpoint. The first tick fires one full interval
    /// after start.
    pub async fn run(self: Arc<Self>, mut shutdown: watch::Receiver<bool>) -> Option<CheckpointReport>
    {
        info!("[BOOT] Starting thread for checkpoints with {} seconds delay...", self.interval.as_secs());
        let mut interval = tokio::time::interval_at(Instant::now() + self.interval, self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        while !*shutdown.borrow() {
            tokio::select! {
                _ = interval.tick() => {
                    self.clone().checkpoint_blocking().await;
                }
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }

        info!("[BOOT] Shutting down thread for checkpoints, saving final data...");
        self.checkpoint_blocking().await
    }
}
