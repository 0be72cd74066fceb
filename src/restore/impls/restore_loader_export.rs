use std::collections::BTreeMap;
use std::fs;
use log::info;
use crate::codec::structs::save_point::SavePoint;
use crate::database::errors::DatabaseError;
use crate::restore::structs::restore_loader::RestoreLoader;

impl RestoreLoader {
    /// Decodes every dated history record.
    pub fn history(&self) -> Result<BTreeMap<String, SavePoint>, DatabaseError>
    {
        let mut history = BTreeMap::new();
        for (date_key, data) in self.database.history()? {
            let save_point = self.codec.decode_save_point(&data)
                .map_err(|e| DatabaseError::CorruptData(format!("history {date_key}: {e}")))?;
            history.insert(date_key, save_point);
        }
        Ok(history)
    }

    /// Writes the history as one JSON object keyed by date key and returns
    /// the number of exported records.
    pub fn export_history(&self, file: &str) -> Result<usize, DatabaseError>
    {
        info!("[EXPORT] Exporting history to file {}", file);
        let history = self.history()?;
        let data = serde_json::to_vec_pretty(&history)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;
        fs::write(file, data).map_err(|e| DatabaseError::ExportFailed(format!("{file}: {e}")))?;
        info!("[EXPORT] {} history records have been exported", history.len());
        Ok(history.len())
    }
}
