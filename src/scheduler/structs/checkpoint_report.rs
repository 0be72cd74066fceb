/// Outcome of one checkpoint tick, one flag per durable write.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckpointReport {
    pub history_key: String,
    pub history_written: bool,
    pub current_written: bool,
    pub visitors_written: bool,
}
