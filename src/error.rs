//! Error types for valo_companion

use thiserror::Error;

/// Unified error type for catalog, match and loadout operations
#[derive(Debug, Error)]
pub enum CompanionError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Failed to parse a JSON response or cache file
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// HTTP error status code
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Session credentials are incomplete
    #[error("Missing session credentials")]
    MissingIdentity,
    /// Match detail payload lacks the data needed for a summary
    #[error("Malformed match: {0}")]
    MalformedMatch(String),
    /// A spawned fetch task panicked or was cancelled
    #[error("Task failed: {0}")]
    TaskFailed(String),
}

/// Result alias for valo_companion operations
pub type Result<T> = std::result::Result<T, CompanionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = CompanionError::HttpStatus(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "HTTP error: 404 Not Found");

        let err = CompanionError::MalformedMatch("player not in match".to_string());
        assert_eq!(err.to_string(), "Malformed match: player not in match");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CompanionError = io.into();
        assert!(matches!(err, CompanionError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
