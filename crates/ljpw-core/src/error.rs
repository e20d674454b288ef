//! LJPW error types.
//!
//! Every fallible operation in the crate returns [`LjpwResult`]. Scoring
//! functions report degenerate inputs explicitly instead of producing NaN,
//! and the simulator reports numeric divergence with the step it happened at.

use thiserror::Error;

use crate::vector::Dimension;

/// Errors that can occur during LJPW scoring, configuration or simulation.
#[derive(Debug, Error)]
pub enum LjpwError {
    /// A component was zero or negative where a strictly positive value is required.
    #[error("{operation} requires positive components: {dimension}={value}")]
    NonPositiveComponent {
        /// Operation that rejected the input
        operation: &'static str,
        /// Offending dimension
        dimension: Dimension,
        /// Offending value
        value: f64,
    },

    /// A component was NaN or infinite.
    #[error("Non-finite component: {dimension}={value}")]
    NonFiniteComponent {
        /// Offending dimension
        dimension: Dimension,
        /// Offending value
        value: f64,
    },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {value}. {reason}")]
    InvalidParameter {
        /// Parameter name
        name: String,
        /// Parameter value as string
        value: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Integration produced a non-finite state.
    #[error("Integration diverged at step {step} (t={time})")]
    Diverged {
        /// Step index at which the state became non-finite
        step: usize,
        /// Simulation time of that step
        time: f64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Requested run exceeds configured limits.
    #[error("Capacity error: {0}")]
    CapacityError(String),

    /// Text could not be parsed into an LJPW value.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type for LJPW operations.
pub type LjpwResult<T> = Result<T, LjpwError>;

impl From<serde_json::Error> for LjpwError {
    fn from(err: serde_json::Error) -> Self {
        LjpwError::SerializationError(err.to_string())
    }
}

impl From<toml::de::Error> for LjpwError {
    fn from(err: toml::de::Error) -> Self {
        LjpwError::ConfigError(err.to_string())
    }
}

impl From<toml::ser::Error> for LjpwError {
    fn from(err: toml::ser::Error) -> Self {
        LjpwError::SerializationError(err.to_string())
    }
}

impl From<config::ConfigError> for LjpwError {
    fn from(err: config::ConfigError) -> Self {
        LjpwError::ConfigError(err.to_string())
    }
}

impl LjpwError {
    /// Create an invalid parameter error.
    pub fn invalid_param(
        name: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        LjpwError::InvalidParameter {
            name: name.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Check if this error is recoverable (can be retried with different inputs).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LjpwError::NonPositiveComponent { .. }
                | LjpwError::NonFiniteComponent { .. }
                | LjpwError::InvalidParameter { .. }
                | LjpwError::ParseError(_)
                | LjpwError::ConfigError(_)
        )
    }

    /// Check if this error indicates a numeric computation issue.
    pub fn is_computation_error(&self) -> bool {
        matches!(
            self,
            LjpwError::NonPositiveComponent { .. }
                | LjpwError::NonFiniteComponent { .. }
                | LjpwError::Diverged { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive_display() {
        let err = LjpwError::NonPositiveComponent {
            operation: "geometric_mean",
            dimension: Dimension::Justice,
            value: 0.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("geometric_mean"));
        assert!(msg.contains("Justice=0"));
    }

    #[test]
    fn test_diverged_display() {
        let err = LjpwError::Diverged {
            step: 42,
            time: 0.42,
        };
        let msg = err.to_string();
        assert!(msg.contains("step 42"));
        assert!(msg.contains("t=0.42"));
    }

    #[test]
    fn test_invalid_param_helper() {
        let err = LjpwError::invalid_param("step_size", -0.1, "Must be > 0");
        let msg = err.to_string();
        assert!(msg.contains("step_size"));
        assert!(msg.contains("-0.1"));
        assert!(msg.contains("Must be > 0"));
    }

    #[test]
    fn test_is_recoverable() {
        assert!(LjpwError::ParseError("x".into()).is_recoverable());
        assert!(LjpwError::invalid_param("a", 1, "b").is_recoverable());
        assert!(!LjpwError::Diverged { step: 1, time: 0.1 }.is_recoverable());
        assert!(!LjpwError::CapacityError("too many".into()).is_recoverable());
    }

    #[test]
    fn test_is_computation_error() {
        assert!(LjpwError::Diverged { step: 1, time: 0.1 }.is_computation_error());
        assert!(LjpwError::NonFiniteComponent {
            dimension: Dimension::Love,
            value: f64::NAN,
        }
        .is_computation_error());
        assert!(!LjpwError::ConfigError("x".into()).is_computation_error());
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<String>("invalid json").unwrap_err();
        let err: LjpwError = json_err.into();
        assert!(matches!(err, LjpwError::SerializationError(_)));
    }

    #[test]
    fn test_from_toml_error() {
        let toml_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err: LjpwError = toml_err.into();
        assert!(matches!(err, LjpwError::ConfigError(_)));
    }
}
