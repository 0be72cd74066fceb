pub mod restore_loader;
pub mod restore_loader_export;
