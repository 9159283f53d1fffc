use std::fmt;

/// Error types for sitesweep operations
#[derive(Debug)]
pub enum SweepError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// HTML scanning error
    Scan(String),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::Io(err) => write!(f, "IO error: {err}"),
            SweepError::Config(msg) => write!(f, "Configuration error: {msg}"),
            SweepError::Scan(msg) => write!(f, "Scan error: {msg}"),
            SweepError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            SweepError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for SweepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SweepError::Io(err) => Some(err),
            SweepError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SweepError {
    fn from(err: std::io::Error) -> Self {
        SweepError::Io(err)
    }
}

impl From<toml::de::Error> for SweepError {
    fn from(err: toml::de::Error) -> Self {
        SweepError::TomlParsing(err)
    }
}

/// Type alias for Results using SweepError
pub type Result<T> = std::result::Result<T, SweepError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let config_error = SweepError::Config("missing uploads_dir".to_string());
        assert_eq!(
            format!("{config_error}"),
            "Configuration error: missing uploads_dir"
        );

        let scan_error = SweepError::Scan("index.html: bad encoding".to_string());
        assert_eq!(
            format!("{scan_error}"),
            "Scan error: index.html: bad encoding"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let sweep_error = SweepError::from(io_error);

        match sweep_error {
            SweepError::Io(_) => {} // Expected
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_from_toml() {
        let toml_error = toml::from_str::<toml::Value>("invalid toml [").unwrap_err();
        let sweep_error = SweepError::from(toml_error);

        match sweep_error {
            SweepError::TomlParsing(_) => {} // Expected
            _ => panic!("Expected TomlParsing variant"),
        }
    }

    #[test]
    fn test_error_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let sweep_error = SweepError::Io(io_error);
        assert!(sweep_error.source().is_some());

        let config_error = SweepError::Config("test".to_string());
        assert!(config_error.source().is_none());
    }

    #[test]
    fn test_string_error_variants_display() {
        let errors = vec![
            SweepError::Config("bad config".to_string()),
            SweepError::Scan("bad file".to_string()),
            SweepError::InvalidArgument("bad arg".to_string()),
        ];

        for error in errors {
            let display_str = format!("{error}");
            assert!(!display_str.is_empty());
            assert!(display_str.contains(":"));
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SweepError>();
    }

    #[test]
    fn test_result_type_alias() {
        let success: Result<i32> = Ok(42);
        let error: Result<i32> = Err(SweepError::Config("test".to_string()));

        assert!(success.is_ok());
        assert!(error.is_err());
    }
}
