pub mod database_connector;
pub mod database_connector_redb;
