use std::path::PathBuf;
use parking_lot::RwLock;

pub struct DatabaseConnectorRedb {
    pub(crate) database: redb::Database,
    pub(crate) path: PathBuf,
    pub(crate) write_guard: RwLock<()>,
}
