use thiserror::Error;

// The formatter core is total and never constructs these; errors exist
// only at the outer shell (page files, CLI config).
#[derive(Error, Debug)]
pub enum RupiahError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error for {field}: {reason}")]
    ValidationError { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, RupiahError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_json_error_converts() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let converted: RupiahError = err.into();
        assert!(matches!(converted, RupiahError::SerializationError(_)));
    }

    #[test]
    fn test_io_error_converts() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let converted: RupiahError = err.into();
        assert!(matches!(converted, RupiahError::IoError(_)));
    }
}
