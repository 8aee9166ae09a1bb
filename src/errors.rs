// SPDX-License-Identifier: MPL-2.0

//! Error types for the shutter control

use std::fmt;

/// Result type alias using ShutterError
pub type ShutterResult<T> = Result<T, ShutterError>;

/// Main error type
#[derive(Debug, Clone, PartialEq)]
pub enum ShutterError {
    /// A configuration value was rejected
    Config(ConfigError),
    /// The configuration store could not be read or written
    Storage(String),
    /// The configuration could not be serialized
    Serialization(String),
    /// The async runtime could not be started
    Runtime(String),
}

/// Rejected configuration values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// A value was NaN or infinite
    NotFinite(&'static str),
    /// The disk diameter must be greater than zero
    NonPositiveDiameter(f32),
    /// A stroke width or gap was negative
    Negative(&'static str, f32),
    /// A length exceeded its upper bound (field, value, maximum)
    TooLarge(&'static str, f32, f32),
    /// The maximum recording length must be at least one second
    ZeroMaxDuration,
}

impl fmt::Display for ShutterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutterError::Config(e) => write!(f, "Configuration error: {}", e),
            ShutterError::Storage(msg) => write!(f, "Storage error: {}", msg),
            ShutterError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            ShutterError::Runtime(msg) => write!(f, "Runtime error: {}", msg),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotFinite(field) => write!(f, "{} must be a finite number", field),
            ConfigError::NonPositiveDiameter(value) => {
                write!(f, "disk diameter must be positive, got {}", value)
            }
            ConfigError::Negative(field, value) => {
                write!(f, "{} must not be negative, got {}", field, value)
            }
            ConfigError::TooLarge(field, value, max) => {
                write!(f, "{} must be at most {}, got {}", field, max, value)
            }
            ConfigError::ZeroMaxDuration => {
                write!(f, "maximum recording length must be at least one second")
            }
        }
    }
}

impl std::error::Error for ShutterError {}
impl std::error::Error for ConfigError {}

impl From<ConfigError> for ShutterError {
    fn from(err: ConfigError) -> Self {
        ShutterError::Config(err)
    }
}

impl From<std::io::Error> for ShutterError {
    fn from(err: std::io::Error) -> Self {
        ShutterError::Runtime(err.to_string())
    }
}

impl From<serde_json::Error> for ShutterError {
    fn from(err: serde_json::Error) -> Self {
        ShutterError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message_names_field() {
        let err = ShutterError::from(ConfigError::Negative("idle ring gap", -2.0));
        let message = err.to_string();
        assert!(message.starts_with("Configuration error"));
        assert!(message.contains("idle ring gap"));
    }

    #[test]
    fn test_too_large_message_names_limit() {
        let err = ConfigError::TooLarge("disk diameter", 5000.0, 1000.0);
        assert_eq!(
            err.to_string(),
            "disk diameter must be at most 1000, got 5000"
        );
    }

    #[test]
    fn test_json_error_converts_to_serialization() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        assert!(matches!(
            ShutterError::from(json_err),
            ShutterError::Serialization(_)
        ));
    }
}
