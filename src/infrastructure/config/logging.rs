//! Logging configuration and initialization.

use std::fmt;

use serde::Deserialize;
use tracing_subscriber::{fmt as subscriber_fmt, EnvFilter};

use crate::error::ConfigError;

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable multi-field lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `opencenter=debug,tower_http=info`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
        }
    }
}

impl LoggingConfig {
    /// Check that `level` is a valid filter directive.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] for `logging.level`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| ConfigError::InvalidValue {
                field: "logging.level",
                reason: format!("'{}': {e}", self.level),
            })
    }

    /// Install the global tracing subscriber.
    ///
    /// `RUST_LOG` takes precedence over the configured level. Does nothing if
    /// a subscriber is already installed.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let installed = match self.format {
            LogFormat::Json => subscriber_fmt().json().with_env_filter(filter).try_init(),
            LogFormat::Pretty => subscriber_fmt().with_env_filter(filter).try_init(),
        };
        if installed.is_err() {
            tracing::debug!("Tracing subscriber already installed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parses_lowercase_names() {
        let config: LoggingConfig = toml::from_str("format = \"json\"").unwrap();
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "info");
        assert!(toml::from_str::<LoggingConfig>("format = \"xml\"").is_err());
    }

    #[test]
    fn level_directives_are_validated() {
        let ok = LoggingConfig {
            level: "opencenter=debug,tower_http=info".into(),
            ..LoggingConfig::default()
        };
        assert!(ok.validate().is_ok());

        let bad = LoggingConfig {
            level: "opencenter=loud".into(),
            ..LoggingConfig::default()
        };
        assert!(matches!(
            bad.validate(),
            Err(ConfigError::InvalidValue {
                field: "logging.level",
                ..
            })
        ));
    }
}
