use std::sync::Arc;
use crate::aggregate::structs::aggregate_store::AggregateStore;
use crate::config::structs::http_server_config::HttpServerConfig;

#[derive(Debug)]
pub struct HttpServiceData {
    pub aggregate_store: Arc<AggregateStore>,
    pub http_server_config: Arc<HttpServerConfig>,
    pub stats_password: String,
}
