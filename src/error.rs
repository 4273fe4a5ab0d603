use std::path::PathBuf;

/// A display color that is not a `#rrggbb` hex string.
#[derive(Debug, thiserror::Error)]
#[error("invalid color '{0}': expected '#rrggbb'")]
pub struct ColorParseError(pub String);

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parse_error_display() {
        let err = ColorParseError("red".to_string());
        assert_eq!(err.to_string(), "invalid color 'red': expected '#rrggbb'");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("width must be > 0".to_string());
        assert_eq!(err.to_string(), "config validation error: width must be > 0");
    }
}
