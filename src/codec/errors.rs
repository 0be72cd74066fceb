use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Corrupt data: {0}")]
    CorruptData(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}
