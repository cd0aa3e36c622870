//! Error types for podcast-crud

use thiserror::Error;

/// Result type alias for podcast-crud operations
pub type Result<T> = std::result::Result<T, PodcastError>;

/// Unified error type for all podcast-crud operations
#[derive(Error, Debug, Clone)]
pub enum PodcastError {
    /// Required settings are missing or empty
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("MongoDB error: {0}")]
    MongoDB(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("I/O error: {0}")]
    Io(String),

    /// The run was cancelled before the operation completed
    #[error("Operation cancelled: {0}")]
    Cancelled(String),
}

impl PodcastError {
    /// Returns true if this error comes from missing or invalid settings
    pub fn is_config(&self) -> bool {
        matches!(self, PodcastError::Config(_))
    }

    /// Returns true if this error happened while reaching the server
    pub fn is_connection(&self) -> bool {
        matches!(self, PodcastError::Connection(_))
    }
}

impl From<serde_json::Error> for PodcastError {
    fn from(err: serde_json::Error) -> Self {
        PodcastError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for PodcastError {
    fn from(err: std::io::Error) -> Self {
        PodcastError::Io(err.to_string())
    }
}

// MongoDB-specific error conversions (when mongodb-errors feature is enabled)
#[cfg(feature = "mongodb-errors")]
impl From<mongodb::error::Error> for PodcastError {
    fn from(err: mongodb::error::Error) -> Self {
        PodcastError::MongoDB(err.to_string())
    }
}

#[cfg(feature = "mongodb-errors")]
impl From<bson::ser::Error> for PodcastError {
    fn from(err: bson::ser::Error) -> Self {
        PodcastError::Serialization(format!("BSON serialization error: {}", err))
    }
}

#[cfg(feature = "mongodb-errors")]
impl From<bson::de::Error> for PodcastError {
    fn from(err: bson::de::Error) -> Self {
        PodcastError::Deserialization(format!("BSON deserialization error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let err = PodcastError::Config("TIGRIS_URI is not set".to_string());
        assert_eq!(err.to_string(), "Configuration error: TIGRIS_URI is not set");
    }

    #[test]
    fn test_error_display_connection() {
        let err = PodcastError::Connection("timeout".to_string());
        assert_eq!(err.to_string(), "Connection error: timeout");
    }

    #[test]
    fn test_error_display_mongodb() {
        let err = PodcastError::MongoDB("auth failed".to_string());
        assert_eq!(err.to_string(), "MongoDB error: auth failed");
    }

    #[test]
    fn test_error_display_cancelled() {
        let err = PodcastError::Cancelled("insert podcast".to_string());
        assert_eq!(err.to_string(), "Operation cancelled: insert podcast");
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<String>("invalid").unwrap_err();
        let err: PodcastError = json_err.into();
        assert!(matches!(err, PodcastError::Serialization(_)));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        let err: PodcastError = io_err.into();
        assert_eq!(err.to_string(), "I/O error: stdout closed");
    }

    #[test]
    fn test_error_classification() {
        assert!(PodcastError::Config("x".to_string()).is_config());
        assert!(!PodcastError::Config("x".to_string()).is_connection());
        assert!(PodcastError::Connection("x".to_string()).is_connection());
        assert!(!PodcastError::Database("x".to_string()).is_config());
        assert!(!PodcastError::Cancelled("x".to_string()).is_connection());
    }
}
