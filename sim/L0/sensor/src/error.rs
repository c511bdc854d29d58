//! Error types for sensor operations.

use thiserror::Error;

/// Errors that can occur while configuring or registering sensors.
///
/// Sampling itself never fails; these cover the surrounding host API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SensorError {
    /// Invalid sensor configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A definition with this id is already registered.
    #[error("sensor definition already registered: {0}")]
    DuplicateDefinition(String),

    /// No definition with this id is registered.
    #[error("unknown sensor: {0}")]
    UnknownSensor(String),

    /// The description names a registered sensor of a different type.
    #[error("sensor type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Expected sensor type tag.
        expected: String,
        /// Actual sensor type tag.
        actual: String,
    },
}

impl SensorError {
    /// Create an invalid config error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a duplicate definition error.
    pub fn duplicate(id: impl Into<String>) -> Self {
        Self::DuplicateDefinition(id.into())
    }

    /// Create an unknown sensor error.
    pub fn unknown(id: impl Into<String>) -> Self {
        Self::UnknownSensor(id.into())
    }

    /// Create a type mismatch error.
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}
