use serde::{Deserialize, Serialize};
use crate::config::enums::history_key_format::HistoryKeyFormat;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseConfig {
    pub path: String,
    pub bucket: String,
    pub persistent_interval: u64,
    #[serde(default)]
    pub history_key: HistoryKeyFormat
}
