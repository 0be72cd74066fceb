#![allow(dead_code)]
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use view_counter::aggregate::structs::aggregate_store::AggregateStore;
use view_counter::config::structs::configuration::Configuration;
use view_counter::config::structs::database_config::DatabaseConfig;
use view_counter::config::structs::http_server_config::HttpServerConfig;
use view_counter::database::structs::database_connector::DatabaseConnector;
use view_counter::http::structs::http_service_data::HttpServiceData;
use view_counter::scheduler::structs::checkpoint_scheduler::CheckpointScheduler;

pub const TEST_PASSWORD: &str = "opensaysame";

pub type TestConfig = Arc<Configuration>;

pub fn create_test_config(dir: &TempDir) -> TestConfig {
    let mut config = Configuration::init();
    config.database.path = dir.path().join("viewCounter.db").to_string_lossy().to_string();
    config.stats_password = TEST_PASSWORD.to_string();
    Arc::new(config)
}

pub fn create_test_database_config(dir: &TempDir) -> DatabaseConfig {
    create_test_config(dir).database.clone()
}

pub fn create_test_http_config(real_ip: &str) -> Arc<HttpServerConfig> {
    Arc::new(HttpServerConfig {
        bind_address: "127.0.0.1:3000".to_string(),
        real_ip: real_ip.to_string(),
        keep_alive: 5,
        request_timeout: 5,
        disconnect_timeout: 5,
        threads: 1,
    })
}

pub fn create_test_service_data(store: Arc<AggregateStore>, real_ip: &str) -> Arc<HttpServiceData> {
    Arc::new(HttpServiceData {
        aggregate_store: store,
        http_server_config: create_test_http_config(real_ip),
        stats_password: TEST_PASSWORD.to_string(),
    })
}

pub fn open_database(config: &DatabaseConfig) -> Arc<DatabaseConnector> {
    Arc::new(DatabaseConnector::open(config).expect("database should open"))
}

pub fn create_test_scheduler(store: Arc<AggregateStore>, database: Arc<DatabaseConnector>, config: &DatabaseConfig) -> Arc<CheckpointScheduler> {
    Arc::new(CheckpointScheduler::new(
        store,
        database,
        Duration::from_secs(config.persistent_interval),
        config.history_key,
    ))
}
