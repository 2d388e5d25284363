//! Error types shared across the simulation crates.

/// Errors raised while constructing simulation components.
///
/// Only configuration problems are errors. Rejected player actions are
/// reported as events and missing battle data degrades to a lost night.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    /// A tuning value is out of range (e.g. a non-positive plant spacing).
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

impl SimError {
    /// Shorthand for building an [`SimError::InvalidConfiguration`].
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Validate that a float setting is finite and strictly positive.
pub fn require_positive(name: &str, value: f32) -> Result<(), SimError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::invalid(format!("{name} must be positive, got {value}")))
    }
}
