//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ConfigValidationError};

/// Environment variable overriding the listener port.
pub const PORT_ENV: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid PORT value `{0}`")]
    Port(String),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ConfigValidationError>),
}

fn join(errors: &[ConfigValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a TOML document. Missing sections and fields take their defaults.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Read and parse a TOML file without semantic validation.
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Replace the port of the listener's bind address, keeping its host.
pub fn apply_port_override(config: &mut AppConfig, port: &str) -> Result<(), ConfigError> {
    let port: u16 = port
        .trim()
        .parse()
        .map_err(|_| ConfigError::Port(port.to_string()))?;

    let address = &config.listener.bind_address;
    let host = address
        .rsplit_once(':')
        .map(|(host, _)| host)
        .unwrap_or(address);
    config.listener.bind_address = format!("{host}:{port}");
    Ok(())
}

/// Build the effective configuration.
///
/// Precedence, lowest first: built-in defaults, the TOML file at `path`,
/// the `PORT` environment variable, then `bind_override` (the command line).
/// The result is validated before it is returned.
pub fn load_config(path: Option<&Path>, bind_override: Option<String>) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => AppConfig::default(),
    };

    if let Ok(port) = std::env::var(PORT_ENV) {
        apply_port_override(&mut config, &port)?;
    }

    if let Some(bind) = bind_override {
        config.listener.bind_address = bind;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFormat;

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config(
            r#"
            [listener]
            bind_address = "127.0.0.1:4000"

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:4000");
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.observability.log_level, "info");
        assert_eq!(config.timeouts.request_secs, 30);
    }

    #[test]
    fn test_parse_rejects_unknown_log_format() {
        let result = parse_config("[observability]\nlog_format = \"xml\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_port_override_keeps_host() {
        let mut config = AppConfig::default();
        apply_port_override(&mut config, "8080").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");

        config.listener.bind_address = "[::1]:3333".into();
        apply_port_override(&mut config, " 9000 ").unwrap();
        assert_eq!(config.listener.bind_address, "[::1]:9000");
    }

    #[test]
    fn test_port_override_rejects_garbage() {
        let mut config = AppConfig::default();
        let err = apply_port_override(&mut config, "http").unwrap_err();
        assert_eq!(err.to_string(), "invalid PORT value `http`");
        assert_eq!(config.listener.bind_address, "0.0.0.0:3333");
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let result = read_config(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
