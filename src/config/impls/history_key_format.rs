use chrono::{Datelike, NaiveDate};
use crate::config::enums::history_key_format::HistoryKeyFormat;

impl HistoryKeyFormat {
    pub fn history_key(&self, date: NaiveDate) -> String
    {
        match self {
            HistoryKeyFormat::day_year => {
                (date.ordinal() as u64 * 10000 + date.year() as u64).to_string()
            }
            HistoryKeyFormat::iso_date => {
                date.format("%Y-%m-%d").to_string()
            }
        }
    }
}
