/// Raw bucket operations every storage engine provides.
pub mod database_backend;
