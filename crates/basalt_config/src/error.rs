//! Error types for project-file loading and validation.

/// Errors that can occur when loading or validating a `basalt.toml`
/// project file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the project file.
    #[error("failed to read project file: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse project file: {0}")]
    ParseError(String),

    /// A required field is missing from the project file.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A project-file value failed validation.
    #[error("validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_missing_field() {
        let err = ConfigError::MissingField("board.name".to_string());
        assert_eq!(format!("{err}"), "missing required field: board.name");
    }

    #[test]
    fn display_parse_error() {
        let err = ConfigError::ParseError("expected '=' at line 3".to_string());
        assert_eq!(
            format!("{err}"),
            "failed to parse project file: expected '=' at line 3"
        );
    }

    #[test]
    fn display_validation_error() {
        let err = ConfigError::ValidationError("bad variant".to_string());
        assert_eq!(format!("{err}"), "validation error: bad variant");
    }

    #[test]
    fn display_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ConfigError::IoError(io_err);
        assert!(format!("{err}").starts_with("failed to read project file:"));
    }
}
