pub mod metrics_config;
pub mod metrics_registry;
pub mod shared_collector;
