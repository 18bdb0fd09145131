//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse `{0}`")]
    Toml(PathBuf, #[source] toml::de::Error),

    #[error("no {0} given, pass it as an argument or set it in the config file")]
    MissingPath(&'static str),

    #[error("Config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("glossa.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("glossa.toml"));

        let missing = ConfigError::MissingPath("input file");
        assert!(format!("{missing}").starts_with("no input file given"));

        let validation_err = ConfigError::Validation("[render.separators] is empty".to_string());
        assert!(format!("{validation_err}").contains("[render.separators] is empty"));
    }

    #[test]
    fn test_toml_error_keeps_source() {
        use std::error::Error as _;

        let source = toml::from_str::<toml::Value>("[broken").unwrap_err();
        let err = ConfigError::Toml(PathBuf::from("glossa.toml"), source);
        assert!(format!("{err}").contains("glossa.toml"));
        assert!(err.source().is_some());
    }
}
