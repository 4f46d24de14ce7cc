//! Feed error types
//!
//! Defines all errors that can occur while reading, mutating or sharing the feed.

use thiserror::Error;

/// Errors that can occur in the feed layer
#[derive(Error, Debug)]
pub enum FeedError {
    /// Backend store failed (unavailable, quota exceeded, rejected write)
    #[error("Storage error: {0}")]
    Storage(String),

    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted value exists but is not a valid post collection
    #[error("Corrupt feed data under key '{key}': {reason}")]
    Corrupt { key: String, reason: String },

    /// User input rejected at the add-post boundary
    #[error("Validation error: {0}")]
    Validation(String),

    /// Shared payload could not be decoded, parsed or validated
    #[error("Share error: {0}")]
    Share(String),

    /// URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Serialization(err.to_string())
    }
}

impl From<url::ParseError> for FeedError {
    fn from(err: url::ParseError) -> Self {
        FeedError::InvalidUrl(err.to_string())
    }
}

impl FeedError {
    /// Whether a reset of the stored feed would recover from this error
    pub fn is_recoverable_by_reset(&self) -> bool {
        matches!(self, FeedError::Corrupt { .. })
    }
}

/// Result type alias for feed operations
pub type FeedResult<T> = Result<T, FeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FeedError::Validation("caption is required".to_string());
        assert_eq!(err.to_string(), "Validation error: caption is required");

        let err = FeedError::Corrupt {
            key: "feed".to_string(),
            reason: "expected value".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Corrupt feed data under key 'feed': expected value"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let feed_err: FeedError = io_err.into();
        assert!(matches!(feed_err, FeedError::Io(_)));
    }

    #[test]
    fn test_recoverable_by_reset() {
        let corrupt = FeedError::Corrupt {
            key: "feed".to_string(),
            reason: "eof".to_string(),
        };
        assert!(corrupt.is_recoverable_by_reset());
        assert!(!FeedError::Share("bad base64".to_string()).is_recoverable_by_reset());
    }
}
