use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AggregateSummary {
    pub pages: u64,
    pub views: u64,
    pub unique_views: u64,
}
