use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use log::info;
use crate::config::structs::database_config::DatabaseConfig;
use crate::database::errors::DatabaseError;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_redb::DatabaseConnectorRedb;
use crate::database::traits::database_backend::DatabaseBackend;

/// Key holding the most recent save point.
pub const CURRENT_KEY: &str = "current";

/// Key holding the most recent visitor list.
pub const VISITORS_KEY: &str = "IPs";

impl DatabaseConnector {
    pub fn new(backend: Arc<dyn DatabaseBackend>, bucket: &str) -> DatabaseConnector
    {
        DatabaseConnector {
            backend,
            bucket: bucket.to_string(),
        }
    }

    /// Opens the configured storage file and makes sure the bucket exists.
    pub fn open(config: &DatabaseConfig) -> Result<DatabaseConnector, DatabaseError>
    {
        let backend = DatabaseConnectorRedb::open(Path::new(config.path.as_str()))?;
        let connector = DatabaseConnector::new(Arc::new(backend), config.bucket.as_str());
        connector.create_bucket()?;
        Ok(connector)
    }

    pub fn bucket(&self) -> &str
    {
        self.bucket.as_str()
    }

    pub fn create_bucket(&self) -> Result<(), DatabaseError>
    {
        self.backend.create_bucket_if_not_exists(self.bucket.as_str())?;
        info!("[DATABASE] Bucket {} ready", self.bucket);
        Ok(())
    }

    pub fn put_history(&self, date_key: &str, save_point: &[u8]) -> Result<(), DatabaseError>
    {
        self.backend.put(self.bucket.as_str(), date_key.as_bytes(), save_point)
    }

    pub fn put_current(&self, save_point: &[u8]) -> Result<(), DatabaseError>
    {
        self.backend.put(self.bucket.as_str(), CURRENT_KEY.as_bytes(), save_point)
    }

    pub fn put_visitors(&self, visitors: &[u8]) -> Result<(), DatabaseError>
    {
        self.backend.put(self.bucket.as_str(), VISITORS_KEY.as_bytes(), visitors)
    }

    pub fn get_current(&self) -> Result<Option<Vec<u8>>, DatabaseError>
    {
        self.backend.get(self.bucket.as_str(), CURRENT_KEY.as_bytes())
    }

    pub fn get_visitors(&self) -> Result<Option<Vec<u8>>, DatabaseError>
    {
        self.backend.get(self.bucket.as_str(), VISITORS_KEY.as_bytes())
    }

    pub fn get_history(&self, date_key: &str) -> Result<Option<Vec<u8>>, DatabaseError>
    {
        self.backend.get(self.bucket.as_str(), date_key.as_bytes())
    }

    pub fn bucket_exists(&self) -> Result<bool, DatabaseError>
    {
        self.backend.bucket_exists(self.bucket.as_str())
    }

    /// Every dated history record, keyed by its date key.
    pub fn history(&self) -> Result<BTreeMap<String, Vec<u8>>, DatabaseError>
    {
        let mut history = BTreeMap::new();
        for (key, value) in self.backend.entries(self.bucket.as_str())? {
            let key = String::from_utf8(key)
                .map_err(|e| DatabaseError::CorruptData(format!("history key: {e}")))?;
            if key == CURRENT_KEY || key == VISITORS_KEY {
                continue;
            }
            history.insert(key, value);
        }
        Ok(history)
    }
}

impl fmt::Debug for DatabaseConnector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConnector")
            .field("bucket", &self.bucket)
            .finish()
    }
}
