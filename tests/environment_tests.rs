use clap::Parser;
use transmission_exporter::common::common::load_environment_file;
use transmission_exporter::config::structs::configuration::Configuration;
use transmission_exporter::structs::Cli;

// The only test in this binary that writes to the process environment.
#[test]
fn test_environment_file_feeds_the_command_line() {
    let dir = tempfile::tempdir().unwrap();
    let env_file = dir.path().join(".env");
    std::fs::write(&env_file, concat!(
        "TRANSMISSION_ADDR=http://10.0.0.9:9091\n",
        "CLIENT_NAME=attic\n",
        "WEB_PATH=/prometheus\n",
    )).unwrap();

    let loaded = load_environment_file(Some(&env_file)).unwrap();
    assert_eq!(loaded, env_file);

    let config_path = dir.path().join("missing.toml");
    let args = Cli::parse_from(["transmission-exporter", "--config", config_path.to_str().unwrap()]);
    assert_eq!(args.transmission_addr.as_deref(), Some("http://10.0.0.9:9091"));

    let config = Configuration::load_from_cli(&args).unwrap();
    assert_eq!(config.backends.len(), 1);
    assert_eq!(config.backends[0].address, "http://10.0.0.9:9091");
    assert_eq!(config.backends[0].name, "attic");
    assert_eq!(config.web.metrics_path, "/prometheus");
}

#[test]
fn test_missing_environment_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_environment_file(Some(&dir.path().join(".env"))).is_err());
}
