use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

pub fn parse_log_level(level: &str) -> Option<log::LevelFilter> {
    match level {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), CustomError>
{
    let level = match parse_log_level(config.log_level.as_str()) {
        Some(level) => level,
        None => {
            return Err(CustomError::new(&format!("Unknown log level encountered: '{}'", config.log_level)));
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(error) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
    {
        return Err(CustomError::new(&format!("Failed to initialize logging: {error}")));
    }
    info!("logging initialized.");
    Ok(())
}

/// Renders a daemon flag the way it is attached to a gauge: `"1"` or `"0"`.
pub fn bool_to_label(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// Parses a listener address. A leading `:` (for example `:19091`) binds all
/// IPv4 interfaces.
pub fn parse_bind_address(bind_address: &str) -> Result<SocketAddr, CustomError> {
    let candidate = if bind_address.starts_with(':') {
        format!("0.0.0.0{bind_address}")
    } else {
        bind_address.to_string()
    };
    candidate.parse::<SocketAddr>().map_err(|error| {
        CustomError::new(&format!("invalid bind address '{bind_address}': {error}"))
    })
}

/// Loads `KEY=value` pairs into the process environment before the command
/// line is parsed. Without a path the first `.env` found from the working
/// directory upwards is used. Variables already set are left untouched.
pub fn load_environment_file(path: Option<&Path>) -> Result<PathBuf, dotenvy::Error> {
    match path {
        Some(path) => dotenvy::from_path(path).map(|_| path.to_path_buf()),
        None => dotenvy::dotenv(),
    }
}
