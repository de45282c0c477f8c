use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use log::{error, info};
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use transmission_exporter::api::api::api_service;
use transmission_exporter::api::structs::api_service_data::ApiServiceData;
use transmission_exporter::client::structs::transmission_client::TransmissionClient;
use transmission_exporter::client::traits::backend_query::BackendQuery;
use transmission_exporter::collector::structs::session_collector::SessionCollector;
use transmission_exporter::collector::structs::session_stats_collector::SessionStatsCollector;
use transmission_exporter::collector::structs::torrent_collector::TorrentCollector;
use transmission_exporter::common::common::{load_environment_file, parse_bind_address, setup_logging};
use transmission_exporter::common::structs::system_clock::SystemClock;
use transmission_exporter::config::structs::configuration::Configuration;
use transmission_exporter::metrics::errors::MetricsError;
use transmission_exporter::metrics::structs::metrics_config::MetricsConfig;
use transmission_exporter::metrics::structs::metrics_registry::MetricsRegistry;
use transmission_exporter::metrics::traits::metric_collector::MetricCollector;
use transmission_exporter::structs::Cli;

fn build_registry(metrics_config: MetricsConfig, backends: Vec<Arc<dyn BackendQuery>>) -> Result<MetricsRegistry, MetricsError>
{
    let collectors: Vec<Arc<dyn MetricCollector>> = vec![
        Arc::new(TorrentCollector::new(metrics_config.clone(), backends.clone())?),
        Arc::new(SessionCollector::new(metrics_config.clone(), backends.clone())?),
        Arc::new(SessionStatsCollector::new(metrics_config, backends, Arc::new(SystemClock))?),
    ];
    let mut registry = MetricsRegistry::new();
    for collector in collectors {
        registry.register(collector)?;
    }
    Ok(registry)
}

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let environment_file = load_environment_file(None).ok();
    let args = Cli::parse();

    let config = match Configuration::load_from_cli(&args) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("[BOOT] {error}");
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    if let Some(path) = environment_file {
        info!("[CONFIG] Loaded environment from {}", path.display());
    }

    let _sentry_guard: Option<ClientInitGuard> = match config.sentry_config.enabled {
        true => Some(sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        }))),
        false => None
    };

    let bind_address = match parse_bind_address(&config.web.bind_address) {
        Ok(address) => address,
        Err(error) => {
            error!("[BOOT] {error}");
            exit(101);
        }
    };

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let backends = match TransmissionClient::from_config(&config) {
                Ok(backends) => backends,
                Err(error) => {
                    error!("[BOOT] Unable to create the RPC client: {error}");
                    exit(101);
                }
            };
            for backend in &backends {
                info!("[BOOT] Polling Transmission backend '{}'", backend.name());
            }

            let registry = match build_registry(MetricsConfig::from_config(&config), backends) {
                Ok(registry) => registry,
                Err(error) => {
                    error!("[BOOT] {error}");
                    exit(101);
                }
            };

            let data = Arc::new(ApiServiceData {
                registry: Arc::new(registry),
                config: config.clone(),
            });

            let (handle, server) = match api_service(bind_address, data) {
                Ok(server) => server,
                Err(error) => {
                    error!("[API] {error}");
                    exit(1);
                }
            };
            let server_task = tokio::spawn(server);
            info!("[BOOT] Serving metrics on {}{}", bind_address, config.web.metrics_path);

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");
                    handle.stop(true).await;
                    Ok(())
                }
                result = server_task => {
                    match result {
                        Ok(Ok(())) => Ok(()),
                        Ok(Err(error)) => {
                            sentry::capture_error(&error);
                            error!("[API] Listener stopped: {error}");
                            Err(error)
                        }
                        Err(error) => {
                            error!("[API] Listener task failed: {error}");
                            Err(std::io::Error::other(error))
                        }
                    }
                }
            }
        })
}
