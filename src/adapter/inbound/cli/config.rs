//! Handler for the `config` command group.

use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::{Config, StoreBackend};

/// Execute `config show`.
///
/// A missing file shows the defaults. The database URL is never printed,
/// only the backend it selects.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load_or_default(path)?;

    output::section("Effective Configuration");
    if path.exists() {
        output::field("Source", path.display());
    } else {
        output::field("Source", "(defaults)");
    }

    output::section("Server");
    output::field("Address", &config.server.addr);
    output::field(
        "Request timeout",
        format!("{}s", config.server.request_timeout_secs),
    );

    output::section("Database");
    output::field("Backend", config.backend().as_str());
    if config.backend() == StoreBackend::Sqlite {
        output::field("Max connections", config.database.max_connections);
        output::field(
            "Busy timeout",
            format!("{}ms", config.database.busy_timeout_ms),
        );
    } else {
        output::warning("In-memory store: data is lost on restart");
    }

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);
    Ok(())
}

/// Execute `config validate`.
///
/// Unlike `show` and `serve`, the file must exist.
pub fn execute_validate(path: &Path) -> Result<()> {
    let config = Config::load(path)?;
    output::success(&format!("{} is valid", path.display()));
    output::field("Backend", config.backend().as_str());
    Ok(())
}
