//! Error types for the arcade

use thiserror::Error;

/// The main error type for arcade operations
#[derive(Debug, Error)]
pub enum ArcadeError {
    #[error("Input closed: end of stream reached")]
    InputClosed,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Scheduler error: {0}")]
    SchedulerError(String),
}

/// Result type alias for arcade operations
pub type Result<T> = std::result::Result<T, ArcadeError>;

impl From<toml::de::Error> for ArcadeError {
    fn from(err: toml::de::Error) -> Self {
        ArcadeError::TomlParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: ArcadeError = io.into();
        assert!(matches!(err, ArcadeError::IoError(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_toml_error_converts() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("width = ");
        let err: ArcadeError = parsed.unwrap_err().into();
        assert!(matches!(err, ArcadeError::TomlParseError(_)));
    }
}
