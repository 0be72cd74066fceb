use serde::{Deserialize, Serialize};

/// How the dated history key of a checkpoint is derived.
///
/// `day_year` keeps the on-disk layout of earlier deployments
/// (`dayOfYear * 10000 + year`, so day 45 of 2024 becomes `452024`). These keys
/// do not sort chronologically across years; `iso_date` (`2024-02-14`) does.
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum HistoryKeyFormat {
    #[default]
    day_year,
    iso_date,
}
