use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use regex::Regex;
use crate::common::common::{parse_bind_address, parse_log_level};
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::backend_config::BackendConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::web_config::WebConfig;
use crate::structs::Cli;

pub const DEFAULT_TRANSMISSION_ADDR: &str = "http://localhost:9091";

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            namespace: Self::default_namespace(),
            always_label_backend: false,
            rpc_request_timeout: Self::default_rpc_request_timeout(),
            web: WebConfig {
                bind_address: String::from(":19091"),
                metrics_path: String::from("/metrics"),
                keep_alive: 60,
                request_timeout: 30,
                disconnect_timeout: 30,
                threads: 2,
                ssl: false,
                ssl_key: String::new(),
                ssl_cert: String::new(),
            },
            backends: vec![
                BackendConfig {
                    name: String::new(),
                    address: String::from(DEFAULT_TRANSMISSION_ADDR),
                    username: String::new(),
                    password: String::new(),
                }
            ],
            sentry_config: SentryConfig::default(),
        }
    }

    pub fn default_namespace() -> String {
        String::from("transmission")
    }

    pub fn default_rpc_request_timeout() -> u64 {
        10
    }

    pub fn load(data: &[u8]) -> Result<Configuration, ConfigurationError> {
        Ok(toml::from_str(&String::from_utf8_lossy(data))?)
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Self::load(data.as_slice())
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    pub fn save_from_config(config: &Configuration, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config)?;
        Self::save_file(path, config_toml)
    }

    /// Builds the single-backend configuration used when no file is present.
    pub fn from_environment(args: &Cli) -> Configuration {
        let mut config = Configuration::init();
        config.backends = vec![
            BackendConfig {
                name: args.client_name.clone().unwrap_or_default(),
                address: args.transmission_addr.clone().unwrap_or_else(|| String::from(DEFAULT_TRANSMISSION_ADDR)),
                username: args.transmission_username.clone().unwrap_or_default(),
                password: args.transmission_password.clone().unwrap_or_default(),
            }
        ];
        config
    }

    pub fn load_from_cli(args: &Cli) -> Result<Configuration, CustomError> {
        let mut config = if Path::new(&args.config).exists() {
            match Configuration::load_file(&args.config) {
                Ok(config) => config,
                Err(error) => {
                    eprintln!("[CONFIG] Config file '{}' could not be loaded.", args.config);
                    eprintln!("[ERROR] {error}");
                    return Err(CustomError::new("corrupt configuration file"));
                }
            }
        } else if args.create_config {
            eprintln!("[CONFIG] Creating config file '{}'..", args.config);
            return match Configuration::save_from_config(&Configuration::init(), &args.config) {
                Ok(_) => {
                    eprintln!("Please edit '{}' and start the exporter again, exiting now...", args.config);
                    Err(CustomError::new("created configuration file"))
                }
                Err(error) => {
                    eprintln!("[CONFIG] Config file could not be created, check permissions...");
                    eprintln!("[ERROR] {error}");
                    Err(CustomError::new("could not create configuration file"))
                }
            };
        } else {
            eprintln!("[CONFIG] No config file found at '{}', using defaults and environment.", args.config);
            Configuration::from_environment(args)
        };

        config.apply_web_overrides(args);
        config.apply_backend_defaults();

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("[ERROR] {error}");
            return Err(CustomError::new("invalid configuration"));
        }
        Ok(config)
    }

    pub fn apply_web_overrides(&mut self, args: &Cli) {
        if let Some(web_addr) = &args.web_addr {
            self.web.bind_address = web_addr.clone();
        }
        if let Some(web_path) = &args.web_path {
            self.web.metrics_path = web_path.clone();
        }
    }

    /// An unnamed backend is labeled with its address.
    pub fn apply_backend_defaults(&mut self) {
        for backend in self.backends.iter_mut() {
            if backend.name.is_empty() {
                backend.name = backend.address.clone();
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if parse_log_level(&self.log_level).is_none() {
            return Err(ConfigurationError::ValidationError(format!("unknown log level '{}'", self.log_level)));
        }

        Self::validate_value("namespace", &self.namespace, r"^[a-zA-Z_][a-zA-Z0-9_]*$")?;
        Self::validate_value("web.metrics_path", &self.web.metrics_path, r"^/[A-Za-z0-9._~\-/]+$")?;

        if let Err(error) = parse_bind_address(&self.web.bind_address) {
            return Err(ConfigurationError::ValidationError(error.to_string()));
        }
        if self.web.threads == 0 {
            return Err(ConfigurationError::ValidationError(String::from("web.threads must be at least 1")));
        }
        if self.web.ssl && (self.web.ssl_key.is_empty() || self.web.ssl_cert.is_empty()) {
            return Err(ConfigurationError::ValidationError(String::from("web.ssl requires ssl_key and ssl_cert")));
        }
        if self.rpc_request_timeout == 0 {
            return Err(ConfigurationError::ValidationError(String::from("rpc_request_timeout must be at least 1 second")));
        }

        if self.backends.is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("at least one backend must be configured")));
        }

        let mut names = HashSet::new();
        for backend in &self.backends {
            Self::validate_value(&format!("[BACKEND: {}] address", backend.name), &backend.address, r"^https?://[^\s/?#]+(/[^\s?#]*)?$")?;
            if backend.name.is_empty() {
                return Err(ConfigurationError::ValidationError(format!("[BACKEND: {}] name is empty", backend.address)));
            }
            if !names.insert(backend.name.as_str()) {
                return Err(ConfigurationError::ValidationError(format!("duplicate backend name '{}'", backend.name)));
            }
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex).map_err(|error| ConfigurationError::ValidationError(error.to_string()))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!(
                "error checking {name} [:] value: \"{value}\" [:] regex: \"{regex_check}\""
            )));
        }
        Ok(())
    }
}
