use std::fs;
use std::path::PathBuf;

use opencenter::error::{ConfigError, Error};
use opencenter::infrastructure::config::logging::LogFormat;
use opencenter::infrastructure::config::settings::{Config, StoreBackend};
use tempfile::TempDir;

fn write_temp_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn full_config_parses() {
    let toml = r#"
[server]
addr = "127.0.0.1:3000"
request_timeout_secs = 10

[database]
url = "sqlite://clusters.db"
max_connections = 8
busy_timeout_ms = 1000

[logging]
level = "debug"
format = "json"
"#;

    let config = Config::parse_toml_with_env(toml, no_env).unwrap();
    assert_eq!(config.server.socket_addr().unwrap().port(), 3000);
    assert_eq!(config.server.request_timeout().as_secs(), 10);
    assert_eq!(config.backend(), StoreBackend::Sqlite);
    assert_eq!(config.database.pool_options().max_connections, 8);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn config_rejects_invalid_addr() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(&dir, "[server]\naddr = \"nowhere\"\n");

    match Config::load(&path) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "server.addr",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid addr error, got {err}"),
        Ok(_) => panic!("Expected invalid addr error, got Ok"),
    }
}

#[test]
fn config_rejects_zero_connections() {
    let result = Config::parse_toml_with_env("[database]\nmax_connections = 0\n", no_env);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "database.max_connections",
            ..
        }))
    ));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let result = Config::parse_toml_with_env("[server\naddr=", no_env);
    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::load(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}

#[test]
fn env_database_url_selects_sqlite() {
    let config = Config::parse_toml_with_env("", |key| {
        (key == "DATABASE_URL").then(|| "sqlite://env.db".to_string())
    })
    .unwrap();
    assert_eq!(config.backend(), StoreBackend::Sqlite);
    assert_eq!(config.database.url(), Some("sqlite://env.db"));
}

#[test]
fn env_addr_accepts_bare_port() {
    let config =
        Config::parse_toml_with_env("", |key| (key == "BACKEND_ADDR").then(|| ":7070".into()))
            .unwrap();
    assert_eq!(config.server.socket_addr().unwrap().to_string(), "0.0.0.0:7070");
}
