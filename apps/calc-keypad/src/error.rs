//! # API Error Type
//!
//! Unified error type for keypad commands, plus the error returned by the
//! run loop itself.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Keypad                             │
//! │                                                                         │
//! │  stdin word "percent"                                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<Snapshot, ApiError>                                      │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Unknown button? ─── ApiError { UNKNOWN_BUTTON } ───────────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ApiError ──► stderr, session continues                                 │
//! │  RunError ──► process exits (bad config, broken stdout)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Evaluation failures are NOT errors here: the calculator shows the error
//! marker on its display and carries on.

use calc_core::ValidationError;
use serde::Serialize;

use crate::state::ConfigError;

/// Error returned from keypad commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "UNKNOWN_BUTTON",
///   "message": "Unknown button: percent"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Word is not a button id, label or key run
    UnknownButton,

    /// Digit or operator argument out of range
    ValidationError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates an unknown button error.
    pub fn unknown_button(word: &str) -> Self {
        ApiError::new(ErrorCode::UnknownButton, format!("Unknown button: {}", word))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::UnknownAction(word) => ApiError::unknown_button(&word),
            other => ApiError::validation(other.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Errors that end a keypad session.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_conversion() {
        let err: ApiError = ValidationError::UnknownAction("sqrt".to_string()).into();
        assert_eq!(err.code, ErrorCode::UnknownButton);
        assert_eq!(err.message, "Unknown button: sqrt");

        let err: ApiError = ValidationError::InvalidDigit("12".to_string()).into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "'12' is not a digit");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::unknown_button("x")).unwrap();
        assert_eq!(json["code"], "UNKNOWN_BUTTON");
        assert_eq!(json["message"], "Unknown button: x");
    }

    #[test]
    fn test_display() {
        let err = ApiError::validation("'x' is not a digit");
        assert_eq!(err.to_string(), "[ValidationError] 'x' is not a digit");
    }
}
