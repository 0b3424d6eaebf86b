//! Template table error types.
//!
//! The builtin template table cannot fail. These errors only arise when an
//! operator supplies template overrides from a file.

use crate::common::ErrorSeverity;

/// Errors raised while loading or merging template overrides.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TemplateError {
    /// Override file could not be parsed
    #[error("Failed to parse templates: {0}")]
    Parse(String),

    /// Override file could not be read
    #[error("Failed to read templates: {0}")]
    Io(String),

    /// A template failed validation
    #[error("Invalid template '{key}': {reason}")]
    InvalidTemplate {
        /// Template key, `class/track_type`
        key: String,
        /// Why the template was rejected
        reason: String,
    },
}

impl TemplateError {
    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Error
    }

    /// Create an invalid template error.
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        TemplateError::InvalidTemplate {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_template_message() {
        let err = TemplateError::invalid("GT3/road", "tires.pressure.fl must be a finite number");
        assert_eq!(
            err.to_string(),
            "Invalid template 'GT3/road': tires.pressure.fl must be a finite number"
        );
    }

    #[test]
    fn test_parse_error_message() {
        let err = TemplateError::Parse("unexpected key".to_string());
        assert!(err.to_string().starts_with("Failed to parse templates"));
    }
}
