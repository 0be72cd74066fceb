use std::fmt;
use std::path::Path;
use log::info;
use parking_lot::RwLock;
use redb::{ReadableDatabase, ReadableTable, TableDefinition, TableError};
use crate::database::errors::DatabaseError;
use crate::database::structs::database_connector_redb::DatabaseConnectorRedb;
use crate::database::traits::database_backend::DatabaseBackend;

fn storage_error<E: fmt::Display>(error: E) -> DatabaseError
{
    DatabaseError::StorageUnavailable(format!("{error}"))
}

fn bucket_definition(bucket: &str) -> TableDefinition<'_, &'static [u8], &'static [u8]>
{
    TableDefinition::new(bucket)
}

impl DatabaseConnectorRedb {
    pub fn open(path: &Path) -> Result<DatabaseConnectorRedb, DatabaseError>
    {
        let database = redb::Database::create(path).map_err(storage_error)?;
        info!("[DATABASE] Opened storage file {}", path.display());
        Ok(DatabaseConnectorRedb {
            database,
            path: path.to_path_buf(),
            write_guard: RwLock::new(()),
        })
    }

    pub fn path(&self) -> &Path
    {
        self.path.as_path()
    }
}

impl fmt::Debug for DatabaseConnectorRedb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConnectorRedb")
            .field("path", &self.path)
            .finish()
    }
}

impl DatabaseBackend for DatabaseConnectorRedb {
    fn create_bucket_if_not_exists(&self, bucket: &str) -> Result<(), DatabaseError>
    {
        let _guard = self.write_guard.write();
        let write_txn = self.database.begin_write().map_err(storage_error)?;
        {
            write_txn.open_table(bucket_definition(bucket)).map_err(storage_error)?;
        }
        write_txn.commit().map_err(storage_error)?;
        Ok(())
    }

    fn bucket_exists(&self, bucket: &str) -> Result<bool, DatabaseError>
    {
        let _guard = self.write_guard.read();
        let read_txn = self.database.begin_read().map_err(storage_error)?;
        match read_txn.open_table(bucket_definition(bucket)) {
            Ok(_) => Ok(true),
            Err(TableError::TableDoesNotExist(_)) => Ok(false),
            Err(error) => Err(storage_error(error)),
        }
    }

    fn put(&self, bucket: &str, key: &[u8], value: &[u8]) -> Result<(), DatabaseError>
    {
        let _guard = self.write_guard.write();
        let write_txn = self.database.begin_write().map_err(storage_error)?;
        {
            let mut table = write_txn.open_table(bucket_definition(bucket)).map_err(storage_error)?;
            table.insert(key, value).map_err(storage_error)?;
        }
        write_txn.commit().map_err(storage_error)?;
        Ok(())
    }

    fn get(&self, bucket: &str, key: &[u8]) -> Result<Option<Vec<u8>>, DatabaseError>
    {
        let _guard = self.write_guard.read();
        let read_txn = self.database.begin_read().map_err(storage_error)?;
        let table = match read_txn.open_table(bucket_definition(bucket)) {
            Ok(table) => table,
            Err(TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(error) => return Err(storage_error(error)),
        };
        let entry = table.get(key).map_err(storage_error)?;
        Ok(entry.map(|value| value.value().to_vec()))
    }

    fn entries(&self, bucket: &str) -> Result<Vec<(Vec<u8>, Vec<u8>)>, DatabaseError>
    {
        let _guard = self.write_guard.read();
        let read_txn = self.database.begin_read().map_err(storage_error)?;
        let table = match read_txn.open_table(bucket_definition(bucket)) {
            Ok(table) => table,
            Err(TableError::TableDoesNotExist(_)) => return Ok(Vec::new()),
            Err(error) => return Err(storage_error(error)),
        };
        let mut entries = Vec::new();
        for item in table.iter().map_err(storage_error)? {
            let (key, value) = item.map_err(storage_error)?;
            entries.push((key.value().to_vec(), value.value().to_vec()));
        }
        Ok(entries)
    }
}
