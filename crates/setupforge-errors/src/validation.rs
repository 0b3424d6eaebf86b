//! Input validation error types.
//!
//! These errors are produced while validating a generation request or a
//! template before any stage of the pipeline runs. A request that fails
//! validation produces no partial setup.

use core::fmt;

use crate::common::ErrorSeverity;

/// Validation error types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
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

    /// Value is required but missing
    #[error("Required field '{0}' is missing")]
    Required(String),

    /// Invalid enum value, e.g. an unknown style or session type
    #[error("Invalid value '{value}' for field '{field}', expected one of: {expected}")]
    InvalidEnumValue {
        /// Field name
        field: String,
        /// The invalid value
        value: String,
        /// Expected values
        expected: String,
    },

    /// Numeric value is NaN or infinite
    #[error("Field '{field}' must be a finite number")]
    NonFinite {
        /// Field name
        field: String,
    },

    /// Constraint violation
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

impl ValidationError {
    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Error
    }

    /// Name of the offending field, when the error is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidEnumValue { field, .. }
            | ValidationError::NonFinite { field } => Some(field),
            ValidationError::Required(field) => Some(field),
            ValidationError::ConstraintViolation(_) => None,
        }
    }

    /// Create an out of range error for a numeric value.
    pub fn out_of_range<T: fmt::Debug>(field: impl Into<String>, value: T, min: T, max: T) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            value: format!("{value:?}"),
            min: format!("{min:?}"),
            max: format!("{max:?}"),
        }
    }

    /// Create a required field error.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required(field.into())
    }

    /// Create an invalid enum value error.
    pub fn invalid_enum(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        ValidationError::InvalidEnumValue {
            field: field.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Create a non-finite value error.
    pub fn non_finite(field: impl Into<String>) -> Self {
        ValidationError::NonFinite {
            field: field.into(),
        }
    }

    /// Create a constraint violation error.
    pub fn constraint(msg: impl Into<String>) -> Self {
        ValidationError::ConstraintViolation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_out_of_range() {
        let err = ValidationError::out_of_range("tires.pressure.fl", 75.0_f64, 0.0_f64, 60.0_f64);
        let msg = err.to_string();
        assert!(msg.contains("tires.pressure.fl"));
        assert!(msg.contains("75.0"));
    }

    #[test]
    fn test_validation_error_required() {
        let err = ValidationError::required("vehicle_class");
        assert_eq!(err.to_string(), "Required field 'vehicle_class' is missing");
    }

    #[test]
    fn test_validation_error_invalid_enum() {
        let err = ValidationError::invalid_enum("style", "reckless", "safe, balanced, aggressive");
        let msg = err.to_string();
        assert!(msg.contains("reckless"));
        assert!(msg.contains("safe, balanced, aggressive"));
        assert_eq!(err.field(), Some("style"));
    }

    #[test]
    fn test_validation_error_non_finite() {
        let err = ValidationError::non_finite("length_km");
        assert_eq!(err.to_string(), "Field 'length_km' must be a finite number");
    }

    #[test]
    fn test_validation_error_field_absent_for_constraints() {
        assert_eq!(ValidationError::constraint("x").field(), None);
    }

    #[test]
    fn test_validation_error_severity() {
        assert_eq!(
            ValidationError::required("test").severity(),
            ErrorSeverity::Error
        );
    }

    #[test]
    fn test_validation_error_equality() {
        let err1 = ValidationError::required("field");
        let err2 = ValidationError::required("field");
        assert_eq!(err1, err2);
    }
}
