use std::sync::Arc;
use crate::database::traits::database_backend::DatabaseBackend;

#[derive(Clone)]
pub struct DatabaseConnector {
    pub(crate) backend: Arc<dyn DatabaseBackend>,
    pub(crate) bucket: String,
}
