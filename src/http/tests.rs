#[cfg(test)]
mod http_tests {
    mod render_stats_tests {
        use crate::aggregate::structs::snapshot::Snapshot;
        use crate::http::http::http_service_render_stats;

        #[test]
        fn test_render_stats_sorted() {
            let snapshot = Snapshot {
                page_counts: [("test2".to_string(), 1), ("test1".to_string(), 2)].into_iter().collect(),
                unique_views: 2,
                visitor_ids: ["a".to_string(), "b".to_string()].into_iter().collect(),
            };
            assert_eq!(
                http_service_render_stats(&snapshot),
                "Hi there, heres your stats\ntest1: 2\ntest2: 1\nunique ips: 2\n"
            );
        }

        #[test]
        fn test_render_stats_empty() {
            assert_eq!(
                http_service_render_stats(&Snapshot::default()),
                "Hi there, heres your stats\nunique ips: 0\n"
            );
        }
    }

    mod client_id_tests {
        use std::net::SocketAddr;
        use std::sync::Arc;
        use actix_web::test::TestRequest;
        use crate::aggregate::structs::aggregate_store::AggregateStore;
        use crate::config::structs::configuration::Configuration;
        use crate::http::http::{http_service_retrieve_client_id, UNKNOWN_CLIENT};
        use crate::http::structs::http_service_data::HttpServiceData;

        fn service_data(real_ip: &str) -> HttpServiceData {
            let mut config = Configuration::init().http_server;
            config.real_ip = real_ip.to_string();
            HttpServiceData {
                aggregate_store: Arc::new(AggregateStore::new()),
                http_server_config: Arc::new(config),
                stats_password: String::from("opensaysame"),
            }
        }

        #[test]
        fn test_peer_address_without_port() {
            let addr: SocketAddr = "10.0.0.7:51234".parse().unwrap();
            let request = TestRequest::get().peer_addr(addr).to_http_request();
            assert_eq!(http_service_retrieve_client_id(&request, &service_data("")), "10.0.0.7");
        }

        #[test]
        fn test_real_ip_header_wins_when_configured() {
            let addr: SocketAddr = "127.0.0.1:4000".parse().unwrap();
            let request = TestRequest::get()
                .peer_addr(addr)
                .insert_header(("X-Real-IP", "203.0.113.9"))
                .to_http_request();
            assert_eq!(http_service_retrieve_client_id(&request, &service_data("X-Real-IP")), "203.0.113.9");
            assert_eq!(http_service_retrieve_client_id(&request, &service_data("")), "127.0.0.1");
        }

        #[test]
        fn test_missing_header_falls_back_to_peer() {
            let addr: SocketAddr = "[::1]:4000".parse().unwrap();
            let request = TestRequest::get().peer_addr(addr).to_http_request();
            assert_eq!(http_service_retrieve_client_id(&request, &service_data("X-Real-IP")), "::1");
        }

        #[test]
        fn test_unknown_client() {
            let request = TestRequest::get().to_http_request();
            assert_eq!(http_service_retrieve_client_id(&request, &service_data("")), UNKNOWN_CLIENT);
        }
    }
}
