use thiserror::Error;
use crate::codec::errors::CodecError;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Corrupt data: {0}")]
    CorruptData(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Export failed: {0}")]
    ExportFailed(String),
}

impl From<CodecError> for DatabaseError {
    fn from(error: CodecError) -> Self {
        match error {
            CodecError::CorruptData(message) => DatabaseError::CorruptData(message),
            CodecError::SerializationError(message) => DatabaseError::SerializationError(message),
        }
    }
}
