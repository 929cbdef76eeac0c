use thiserror::Error;

/// Result type alias for chatpane-core
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for the chatpane controller
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error for file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Endpoint/transport errors (connection refused, DNS, body read)
    #[error("endpoint error: {0}")]
    Endpoint(String),

    /// Parse/serialization errors
    #[error("parse error: {0}")]
    Parse(String),

    /// View binding errors (geometry queries or scroll commands)
    #[error("view error: {0}")]
    View(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Endpoint("connection refused".to_string());
        assert_eq!(err.to_string(), "endpoint error: connection refused");

        let err = Error::Config("missing url".to_string());
        assert_eq!(err.to_string(), "configuration error: missing url");

        let err = Error::Other("boom".to_string());
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("gone"));
    }
}
