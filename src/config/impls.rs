pub mod backend_config;
pub mod configuration;
pub mod sentry_config;
