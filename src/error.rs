//! Error types shared by the parameter container and every solver
//!
//! # Taxonomy
//!
//! - [`HeatError::InvalidParameter`]: a value violates its precondition
//!   (non-positive diffusivity, width or time limit, bad grid steps), or a
//!   solve was attempted with incomplete parameters.
//! - [`HeatError::UninitializedAccess`]: a getter was called before its
//!   setter. Sits underneath the `check_initialization()` gate.
//!
//! Failures are never retried nor defaulted: a failed solve returns no grid.

use thiserror::Error;

/// Errors raised while configuring or running a heat conduction solver
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HeatError {
    /// A value violates its precondition
    ///
    /// `value` carries the offending number when there is one (setters, grid
    /// steps) and is `None` for whole-container failures.
    #[error("invalid parameter `{field}` (value: {value:?}): {reason}")]
    InvalidParameter {
        field: &'static str,
        value: Option<f64>,
        reason: String,
    },

    /// A getter was invoked before the corresponding setter
    #[error("parameter `{field}` accessed before initialization")]
    UninitializedAccess { field: &'static str },
}

impl HeatError {
    /// Shorthand for an [`HeatError::InvalidParameter`] carrying a value
    pub fn invalid(field: &'static str, value: f64, reason: impl Into<String>) -> Self {
        HeatError::InvalidParameter {
            field,
            value: Some(value),
            reason: reason.into(),
        }
    }

    /// Error returned by `configure`/`solve` when the parameter set is incomplete
    pub fn not_initialized() -> Self {
        HeatError::InvalidParameter {
            field: "parameters",
            value: None,
            reason: "parameters have not yet been properly initialized".to_string(),
        }
    }
}

/// Result alias used throughout the crate
pub type HeatResult<T> = Result<T, HeatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let error = HeatError::invalid("diffusivity", -1.0, "diffusivity should be positive");
        let message = error.to_string();
        assert!(message.contains("diffusivity"));
        assert!(message.contains("-1"));
        assert!(message.contains("should be positive"));
    }

    #[test]
    fn test_uninitialized_message() {
        let error = HeatError::UninitializedAccess { field: "width" };
        assert_eq!(error.to_string(), "parameter `width` accessed before initialization");
    }

    #[test]
    fn test_not_initialized_has_no_value() {
        match HeatError::not_initialized() {
            HeatError::InvalidParameter { field, value, .. } => {
                assert_eq!(field, "parameters");
                assert!(value.is_none());
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
