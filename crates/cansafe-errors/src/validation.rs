//! Limit and configuration validation errors.

use core::fmt;

/// Validation error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Value out of range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Field name
        field: String,
        /// The invalid value
        value: String,
        /// Minimum allowed value
        min: String,
        /// Maximum allowed value
        max: String,
    },

    /// Two fields disagree with each other
    #[error("Field '{field}' must not exceed '{bound}' ({value} > {bound_value})")]
    Ordering {
        /// Field expected to be the smaller one
        field: String,
        /// Field expected to be the larger one
        bound: String,
        /// Value of `field`
        value: String,
        /// Value of `bound`
        bound_value: String,
    },

    /// Constraint violation
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

impl ValidationError {
    /// Create an out of range error for a numeric value.
    pub fn out_of_range<T: fmt::Debug>(field: impl Into<String>, value: T, min: T, max: T) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            value: format!("{value:?}"),
            min: format!("{min:?}"),
            max: format!("{max:?}"),
        }
    }

    /// Create an ordering error where `field` must be `<=` `bound`.
    pub fn ordering<T: fmt::Debug>(
        field: impl Into<String>,
        value: T,
        bound: impl Into<String>,
        bound_value: T,
    ) -> Self {
        ValidationError::Ordering {
            field: field.into(),
            bound: bound.into(),
            value: format!("{value:?}"),
            bound_value: format!("{bound_value:?}"),
        }
    }

    /// Create a constraint violation error.
    pub fn constraint(msg: impl Into<String>) -> Self {
        ValidationError::ConstraintViolation(msg.into())
    }

    /// Name of the field the error refers to, when there is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::OutOfRange { field, .. } | ValidationError::Ordering { field, .. } => {
                Some(field)
            }
            ValidationError::ConstraintViolation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = ValidationError::out_of_range("max_steer", 5000, 0, 4095);
        assert_eq!(err.to_string(), "max_steer value 5000 is out of range [0, 4095]");
        assert_eq!(err.field(), Some("max_steer"));
    }

    #[test]
    fn test_ordering_message() {
        let err = ValidationError::ordering("min_gas", 900, "max_gas", 800);
        assert!(err.to_string().contains("min_gas"));
        assert!(err.to_string().contains("max_gas"));
    }

    #[test]
    fn test_constraint_has_no_field() {
        assert_eq!(ValidationError::constraint("x").field(), None);
    }
}
