//! Error types for Hall of Zero Limits
//!
//! Orchestration itself never fails: unmounted references, degenerate
//! geometry and repeated transitions all degrade to no-op outcomes. Errors
//! only exist on the surfaces around the core (configuration files and the
//! webview bridge).

use thiserror::Error;

/// Main error type for stage configuration and bridge operations
#[derive(Error, Debug)]
pub enum StageError {
    /// Configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration or bridge payload was not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration parsed but holds values the stage cannot use
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Message from the webview runtime could not be understood
    #[error("Bridge error: {0}")]
    Bridge(String),
}

/// Result type alias using StageError
pub type StageResult<T> = Result<T, StageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StageError::InvalidConfig("scrub must be finite".to_string());
        assert_eq!(format!("{}", err), "Invalid config: scrub must be finite");
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: StageError = json_err.into();
        assert!(matches!(err, StageError::Json(_)));
    }
}
