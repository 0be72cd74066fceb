use std::fmt::Write;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, info};
use crate::aggregate::structs::snapshot::Snapshot;
use crate::http::structs::http_service_data::HttpServiceData;

pub const UNKNOWN_CLIENT: &str = "unknown";

pub fn http_service_cors() -> Cors
{
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/count/{page_id}")
            .route(web::get().to(http_service_count))
            .default_service(web::route().to(http_service_not_found)));
        cfg.service(web::resource("/stats/{password}")
            .route(web::get().to(http_service_stats))
            .default_service(web::route().to(http_service_not_found)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

pub async fn http_service(
    addr: SocketAddr,
    data: Arc<HttpServiceData>
) -> Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>), std::io::Error>
{
    let config = data.http_server_config.clone();
    info!("[HTTP] Starting server listener on {}", addr);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(config.keep_alive))
        .client_request_timeout(Duration::from_secs(config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(config.disconnect_timeout))
        .workers(config.threads as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn http_service_count(request: HttpRequest, path: web::Path<String>, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let page_id = path.into_inner();
    let client_id = http_service_retrieve_client_id(&request, &data);
    debug!("[HTTP] {} requests {}", client_id, page_id);
    data.aggregate_store.record_visit(page_id.as_str(), client_id.as_str());
    HttpResponse::Ok().finish()
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn http_service_stats(request: HttpRequest, path: web::Path<String>, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let client_id = http_service_retrieve_client_id(&request, &data);
    info!("[STATS] Stats request from {}", client_id);

    if path.into_inner() != data.stats_password {
        return HttpResponse::Ok().content_type(ContentType::plaintext()).body("access denied\n");
    }
    let snapshot = data.aggregate_store.snapshot();
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(http_service_render_stats(&snapshot))
}

pub async fn http_service_not_found(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let client_id = http_service_retrieve_client_id(&request, &data);
    debug!("[HTTP] Request from {}: 404 Not Found", client_id);
    HttpResponse::NotFound().content_type(ContentType::plaintext()).body("not found\n")
}

/// Greeting line, one `page: count` line per page in key order, then the
/// unique view count.
pub fn http_service_render_stats(snapshot: &Snapshot) -> String
{
    let mut body = String::from("Hi there, heres your stats\n");
    for (page_id, count) in &snapshot.page_counts {
        let _ = writeln!(body, "{page_id}: {count}");
    }
    let _ = writeln!(body, "unique ips: {}", snapshot.unique_views);
    body
}

/// Resolves the visitor identifier of a request.
///
/// With `real_ip` configured and present on the request its value wins,
/// otherwise the peer IP is used. Requests without either are attributed to
/// `UNKNOWN_CLIENT`.
pub fn http_service_retrieve_client_id(request: &HttpRequest, data: &HttpServiceData) -> String
{
    let real_ip = data.http_server_config.real_ip.as_str();
    if !real_ip.is_empty() {
        if let Some(value) = request.headers().get(real_ip).and_then(|header| header.to_str().ok()) {
            let value = value.trim();
            if !value.is_empty() {
                return value.to_string();
            }
        }
    }
    match request.peer_addr() {
        Some(addr) => addr.ip().to_string(),
        None => UNKNOWN_CLIENT.to_string(),
    }
}
