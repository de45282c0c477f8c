use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the TOML configuration file.
    #[arg(long, env = "CONFIG_FILE", default_value = "config.toml")]
    pub config: String,
    /// Create the configuration file with default values if it does not exist.
    #[arg(long)]
    pub create_config: bool,
    /// Transmission address, used when no configuration file is present.
    #[arg(long, env = "TRANSMISSION_ADDR")]
    pub transmission_addr: Option<String>,
    #[arg(long, env = "TRANSMISSION_USERNAME")]
    pub transmission_username: Option<String>,
    #[arg(long, env = "TRANSMISSION_PASSWORD", hide_env_values = true)]
    pub transmission_password: Option<String>,
    /// Label value of the backend, defaults to its address.
    #[arg(long, env = "CLIENT_NAME")]
    pub client_name: Option<String>,
    /// Listener address, overrides `web.bind_address`.
    #[arg(long, env = "WEB_ADDR")]
    pub web_addr: Option<String>,
    /// Metrics path, overrides `web.metrics_path`.
    #[arg(long, env = "WEB_PATH")]
    pub web_path: Option<String>,
}
