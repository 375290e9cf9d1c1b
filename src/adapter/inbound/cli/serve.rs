//! Handler for the `serve` command.

use tracing::info;

use crate::adapter::inbound::cli::command::ServeArgs;
use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::logging::LogFormat;
use crate::infrastructure::config::settings::Config;

/// Execute the serve command.
pub async fn execute(args: &ServeArgs) -> Result<()> {
    let config = resolve_config(args)?;
    config.init_logging();

    if !output::is_quiet() && !config_is_json(&config) {
        output::header(env!("CARGO_PKG_VERSION"));
    }
    info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = config.backend().as_str(),
        "opencenter starting"
    );

    bootstrap::serve(&config).await
}

/// Load the config file and layer command-line flags over it.
fn resolve_config(args: &ServeArgs) -> Result<Config> {
    let mut config = Config::load_or_default(&args.config)?;

    if let Some(addr) = &args.addr {
        config.server.addr.clone_from(addr);
    }
    if let Some(url) = &args.database_url {
        let url = url.trim();
        config.database.url = (!url.is_empty()).then(|| url.to_string());
    }
    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    }
    if args.json_logs || output::is_json() {
        config.logging.format = LogFormat::Json;
    }

    config.validate()?;
    Ok(config)
}

fn config_is_json(config: &Config) -> bool {
    config.logging.format == LogFormat::Json
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::infrastructure::config::settings::StoreBackend;

    fn args(config: PathBuf) -> ServeArgs {
        ServeArgs {
            config,
            addr: None,
            database_url: None,
            log_level: None,
            json_logs: false,
        }
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[server]\naddr = \"127.0.0.1:1\"\n[database]\nurl = \"sqlite://file.db\"\n",
        )
        .unwrap();

        let mut serve = args(path);
        serve.addr = Some("127.0.0.1:2".into());
        serve.database_url = Some(String::new());
        serve.json_logs = true;

        let config = resolve_config(&serve).unwrap();
        assert_eq!(config.server.addr, "127.0.0.1:2");
        assert_eq!(config.backend(), StoreBackend::Memory);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn invalid_addr_flag_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut serve = args(dir.path().join("missing.toml"));
        serve.addr = Some("not an address".into());

        assert!(resolve_config(&serve).is_err());
    }
}
