mod common;

use std::sync::Arc;
use actix_web::{test, App};
use actix_web::http::StatusCode;
use transmission_exporter::api::api::api_service_routes;
use transmission_exporter::api::structs::api_service_data::ApiServiceData;
use transmission_exporter::client::structs::transmission_client::TransmissionClient;
use transmission_exporter::collector::structs::session_collector::SessionCollector;
use transmission_exporter::collector::structs::session_stats_collector::SessionStatsCollector;
use transmission_exporter::collector::structs::torrent_collector::TorrentCollector;
use transmission_exporter::common::traits::clock::Clock;
use transmission_exporter::config::structs::configuration::Configuration;
use transmission_exporter::metrics::structs::metrics_config::MetricsConfig;
use transmission_exporter::metrics::structs::metrics_registry::MetricsRegistry;

struct FixedClock(i64);

impl Clock for FixedClock {
    fn timestamp(&self) -> i64 {
        self.0
    }
}

fn registry(config: &Configuration) -> MetricsRegistry {
    let backends = TransmissionClient::from_config(config).unwrap();
    let metrics_config = MetricsConfig::from_config(config);
    let mut registry = MetricsRegistry::new();
    registry.register(Arc::new(TorrentCollector::new(metrics_config.clone(), backends.clone()).unwrap())).unwrap();
    registry.register(Arc::new(SessionCollector::new(metrics_config.clone(), backends.clone()).unwrap())).unwrap();
    registry.register(Arc::new(SessionStatsCollector::new(metrics_config, backends, Arc::new(FixedClock(1_700_000_000))).unwrap())).unwrap();
    registry
}

#[actix_web::test]
async fn test_single_backend_scrape() {
    let daemon = common::MockDaemon::start(false, "4.0.5").await;
    let config = common::configuration(vec![daemon.backend("")]);
    let output = registry(&config).render().await.unwrap();

    assert!(output.contains("# TYPE transmission_torrent_status gauge"));
    assert!(output.contains("transmission_torrent_status{id=\"1\",name=\"debian-12.5.0-amd64-netinst.iso\"} 6"));
    assert!(output.contains("transmission_torrent_downloads_total{id=\"1\",name=\"debian-12.5.0-amd64-netinst.iso\",tracker=\"bttracker.debian.org\"} 42"));
    assert!(output.contains("transmission_torrent_seeders{id=\"1\",name=\"debian-12.5.0-amd64-netinst.iso\",tracker=\"bttracker.debian.org\"} 120"));
    assert!(output.contains("transmission_free_space{download_dir=\"/downloads/complete\",incomplete_dir=\"/downloads/incomplete\"} 1099511627776"));
    assert!(output.contains("transmission_alt_speed_down{enabled=\"0\"} 50"));
    assert!(output.contains("transmission_seed_ratio_limit{enabled=\"1\"} 2"));
    assert!(output.contains("transmission_cache_size_bytes 4194304"));
    assert!(output.contains("transmission_session_stats_active{type=\"current\"} 1699996400"));
    assert!(output.contains("transmission_session_stats_uploaded_bytes{type=\"cumulative\"} 900000"));
    assert!(!output.contains("backend="));
    assert!(daemon.handshakes() >= 1);
    daemon.stop().await;
}

#[actix_web::test]
async fn test_multi_backend_scrape_isolates_failures() {
    let healthy = common::MockDaemon::start(false, "4.0.5").await;
    let failing = common::MockDaemon::start(true, "3.00").await;
    failing.fail_torrents();
    let config = common::configuration(vec![healthy.backend("living-room"), failing.backend("seedbox")]);
    let output = registry(&config).render().await.unwrap();

    assert!(output.contains("transmission_torrent_status{backend=\"living-room\",id=\"1\",name=\"debian-12.5.0-amd64-netinst.iso\"} 6"));
    assert!(!output.contains("transmission_torrent_status{backend=\"seedbox\""));
    assert!(output.contains("transmission_version{backend=\"living-room\",version=\"4.0.5\"} 1"));
    assert!(output.contains("transmission_version{backend=\"seedbox\",version=\"3.00\"} 1"));
    assert!(output.contains("transmission_session_stats_torrents_total{backend=\"seedbox\"} 2"));
    healthy.stop().await;
    failing.stop().await;
}

#[actix_web::test]
async fn test_unreachable_backend_drops_only_its_series() {
    let daemon = common::MockDaemon::start(false, "4.0.5").await;
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let dead = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let mut gone = daemon.backend("gone");
    gone.address = dead;
    let config = common::configuration(vec![daemon.backend("alive"), gone]);
    let output = registry(&config).render().await.unwrap();

    assert!(output.contains("backend=\"alive\""));
    assert!(!output.contains("backend=\"gone\""));
    daemon.stop().await;
}

#[actix_web::test]
async fn test_metrics_route_end_to_end() {
    let daemon = common::MockDaemon::start(false, "4.0.5").await;
    let mut config = common::configuration(vec![daemon.backend("seedbox")]);
    config.always_label_backend = true;
    let data = Arc::new(ApiServiceData {
        registry: Arc::new(registry(&config)),
        config: Arc::new(config),
    });

    let app = test::init_service(App::new().configure(api_service_routes(data))).await;
    let response = test::call_service(&app, test::TestRequest::get().uri("/metrics").to_request()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(response).await.to_vec()).unwrap();
    assert!(body.contains("transmission_session_stats_torrents_active{backend=\"seedbox\"} 1"));
    daemon.stop().await;
}

#[actix_web::test]
async fn test_scrapes_are_stable() {
    let daemon = common::MockDaemon::start(false, "4.0.5").await;
    let config = common::configuration(vec![daemon.backend("seedbox")]);
    let registry = registry(&config);

    let first = registry.render().await.unwrap();
    let handshakes = daemon.handshakes();
    let second = registry.render().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(daemon.handshakes(), handshakes);
    daemon.stop().await;
}
