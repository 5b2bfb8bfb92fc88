//! # API Error Type
//!
//! Error type for Tauri commands, plus the configuration error type.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Calc                                   │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  invoke('press_key', { label: 'MR' })                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Unknown label? ─── ValidationError::UnknownKey ── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  reduce(state, action) ─── never fails ────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  try {                                                                  │
//! │    await invoke('press_key', { label })                                 │
//! │  } catch (e) {                                                          │
//! │    // e.code = "VALIDATION_ERROR"                                       │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tauri Error Serialization
//! Tauri requires errors to be serializable. We implement `Serialize`
//! and include both a machine-readable `code` and human-readable `message`.

use std::path::PathBuf;

use calc_core::ValidationError;
use serde::Serialize;
use thiserror::Error;

/// API error returned from Tauri commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "'MR' is not a keypad button"
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

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
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

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts boundary validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Prints `[ValidationError] <message>` for logs.
///
/// The frontend never sees this text: Tauri sends the serialized
/// `{ code, message }` object instead.
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Config Error
// =============================================================================

/// Failures while loading or validating `calc.toml`.
///
/// Startup logs these and falls back to defaults; no command returns them.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for `ConfigState`.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values parse but make no sense together.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_maps_to_code() {
        let err: ApiError = ValidationError::UnknownKey {
            label: "MR".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "'MR' is not a keypad button");
    }

    #[test]
    fn test_api_error_json_shape() {
        let err = ApiError::from(ValidationError::InvalidDigit {
            value: "x".to_string(),
        });
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": "VALIDATION_ERROR",
                "message": "'x' is not a digit or decimal point"
            })
        );
    }

    #[test]
    fn test_display() {
        let err = ApiError::validation("bad key");
        assert_eq!(err.to_string(), "[ValidationError] bad key");
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::Invalid("separators clash".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: separators clash");

        let err = ConfigError::Io {
            path: PathBuf::from("/nope/calc.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().starts_with("Failed to read config file /nope/calc.toml"));
    }
}
