use std::sync::Arc;
use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use log::error;
use prometheus::{Encoder, TextEncoder};
use crate::api::structs::api_service_data::ApiServiceData;

#[tracing::instrument(level = "debug", skip(data))]
pub async fn api_service_metrics_get(data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    match data.registry.render().await {
        Ok(body) => HttpResponse::Ok().content_type(TextEncoder::new().format_type()).body(body),
        Err(metrics_error) => {
            error!("[METRICS] Unable to render metrics: {metrics_error}");
            sentry::capture_error(&metrics_error);
            HttpResponse::InternalServerError().content_type(ContentType::plaintext()).body(metrics_error.to_string())
        }
    }
}

#[tracing::instrument(level = "debug", skip(data))]
pub async fn api_service_index_get(data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    HttpResponse::Ok().content_type(ContentType::html()).body(api_service_index_page(&data.config.web.metrics_path))
}

pub fn api_service_index_page(metrics_path: &str) -> String
{
    format!(
        "<html>\n<head><title>Transmission Exporter</title></head>\n<body>\n<h1>Transmission Exporter</h1>\n<p><a href=\"{metrics_path}\">Metrics</a></p>\n</body>\n</html>\n"
    )
}
