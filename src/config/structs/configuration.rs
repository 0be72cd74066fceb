use serde::{Deserialize, Serialize};
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::sentry_config::SentryConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub stats_password: String,
    pub http_server: HttpServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub sentry_config: SentryConfig
}
