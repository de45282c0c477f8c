use std::fs::File;
use std::io::BufReader;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::{Server, ServerHandle};
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, info};
use crate::api::api_metrics::{api_service_index_get, api_service_metrics_get};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::common::structs::custom_error::CustomError;

pub fn api_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET"])
        .allowed_header(http::header::ACCEPT)
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn api_service_routes(data: Arc<ApiServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.default_service(web::route().to(api_service_not_found));
        cfg.service(web::resource("/").route(web::get().to(api_service_index_get)));
        cfg.service(web::resource(data.config.web.metrics_path.as_str()).route(web::get().to(api_service_metrics_get)));
    })
}

pub fn api_service_tls_config(ssl_cert: &str, ssl_key: &str) -> Result<rustls::ServerConfig, CustomError>
{
    let certs_file = File::open(ssl_cert)
        .map_err(|error| CustomError::new(&format!("unable to open SSL certificate '{ssl_cert}': {error}")))?;
    let key_file = File::open(ssl_key)
        .map_err(|error| CustomError::new(&format!("unable to open SSL key '{ssl_key}': {error}")))?;

    let tls_certs = rustls_pemfile::certs(&mut BufReader::new(certs_file))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|error| CustomError::new(&format!("invalid SSL certificate '{ssl_cert}': {error}")))?;
    let tls_key = rustls_pemfile::private_key(&mut BufReader::new(key_file))
        .map_err(|error| CustomError::new(&format!("invalid SSL key '{ssl_key}': {error}")))?
        .ok_or_else(|| CustomError::new(&format!("no private key found in '{ssl_key}'")))?;

    rustls::ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(tls_certs, tls_key)
        .map_err(|error| CustomError::new(&format!("unable to build the TLS configuration: {error}")))
}

pub fn api_service(addr: SocketAddr, data: Arc<ApiServiceData>) -> Result<(ServerHandle, Server), CustomError>
{
    let web_config = data.config.web.clone();
    let app_data = data.clone();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(sentry_actix::Sentry::new())
            .wrap(api_service_cors())
            .configure(api_service_routes(app_data.clone()))
    })
        .keep_alive(Duration::from_secs(web_config.keep_alive))
        .client_request_timeout(Duration::from_secs(web_config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(web_config.disconnect_timeout))
        .workers(web_config.threads as usize);

    let server = if web_config.ssl {
        info!("[API] Starting server listener with SSL on {addr}");
        let tls_config = api_service_tls_config(&web_config.ssl_cert, &web_config.ssl_key)?;
        server.bind_rustls_0_23((addr.ip(), addr.port()), tls_config)
    } else {
        info!("[API] Starting server listener on {addr}");
        server.bind((addr.ip(), addr.port()))
    }
        .map_err(|error| CustomError::new(&format!("unable to bind {addr}: {error}")))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn api_service_not_found(request: HttpRequest) -> HttpResponse
{
    debug!("[API] No route for {}", request.path());
    HttpResponse::NotFound().content_type(ContentType::plaintext()).body("404 page not found\n")
}
