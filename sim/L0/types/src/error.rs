//! Error types for simulation operations.

use thiserror::Error;

use crate::BodyId;

/// Errors that can occur when reading host simulation state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Body state contains `NaN` or `Inf`.
    #[error("{body} has non-finite {field}")]
    NonFiniteState {
        /// The offending body.
        body: BodyId,
        /// Which part of the state is non-finite.
        field: String,
    },
}

impl SimError {
    /// Create a non-finite state error.
    #[must_use]
    pub fn non_finite(body: BodyId, field: impl Into<String>) -> Self {
        Self::NonFiniteState {
            body,
            field: field.into(),
        }
    }

    /// Check if this is a non-finite state error.
    #[must_use]
    pub fn is_non_finite(&self) -> bool {
        matches!(self, Self::NonFiniteState { .. })
    }
}
