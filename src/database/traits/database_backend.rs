use crate::database::errors::DatabaseError;

/// Transactional key-value operations over named buckets.
///
/// Every `put` is its own transaction: it either commits fully or leaves the
/// bucket untouched. Implementations allow one writer at a time.
#[cfg_attr(test, mockall::automock)]
pub trait DatabaseBackend: Send + Sync {
    fn create_bucket_if_not_exists(&self, bucket: &str) -> Result<(), DatabaseError>;

    fn bucket_exists(&self, bucket: &str) -> Result<bool, DatabaseError>;

    fn put(&self, bucket: &str, key: &[u8], value: &[u8]) -> Result<(), DatabaseError>;

    fn get(&self, bucket: &str, key: &[u8]) -> Result<Option<Vec<u8>>, DatabaseError>;

    fn entries(&self, bucket: &str) -> Result<Vec<(Vec<u8>, Vec<u8>)>, DatabaseError>;
}
