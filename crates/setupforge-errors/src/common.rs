//! The top-level SetupForge error and its classification.
//!
//! Front ends funnel every library error through [`SetupForgeError`] and
//! decide exit codes and report formats from [`ErrorCategory`] and
//! [`ErrorSeverity`] rather than matching on the individual sub-errors.

use core::fmt;

use crate::{CatalogError, TemplateError, ValidationError};

/// Any error a SetupForge operation can report.
#[derive(Debug, thiserror::Error)]
pub enum SetupForgeError {
    /// Caller input failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Template override file problems
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// Catalog lookup or data errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file is missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SetupForgeError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        SetupForgeError::Config(msg.into())
    }

    /// Classify the error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            SetupForgeError::Validation(_) => ErrorCategory::Validation,
            SetupForgeError::Template(_) => ErrorCategory::Template,
            SetupForgeError::Catalog(e) if e.is_not_found() => ErrorCategory::NotFound,
            SetupForgeError::Catalog(_) => ErrorCategory::Catalog,
            SetupForgeError::Io(_) => ErrorCategory::Io,
            SetupForgeError::Config(_) => ErrorCategory::Config,
        }
    }

    /// Severity of the underlying error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SetupForgeError::Validation(e) => e.severity(),
            SetupForgeError::Template(e) => e.severity(),
            SetupForgeError::Catalog(e) => e.severity(),
            SetupForgeError::Io(_) | SetupForgeError::Config(_) => ErrorSeverity::Error,
        }
    }
}

/// What kind of problem an error describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Rejected request or setup
    Validation,
    /// Unknown car or track id
    NotFound,
    /// Broken catalog data
    Catalog,
    /// Bad template override
    Template,
    /// Bad configuration
    Config,
    /// File access
    Io,
}

impl ErrorCategory {
    /// Stable snake_case name, used in machine-readable reports.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCategory::Validation => "validation",
            ErrorCategory::NotFound => "not_found",
            ErrorCategory::Catalog => "catalog",
            ErrorCategory::Template => "template",
            ErrorCategory::Config => "configuration",
            ErrorCategory::Io => "io",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How bad an error is. `Critical` means shipped data is broken and no
/// retry with different input can succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorSeverity {
    /// The operation failed
    Error,
    /// Embedded data is broken
    Critical,
}

impl ErrorSeverity {
    /// Lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorSeverity::Error => "error",
            ErrorSeverity::Critical => "critical",
        }
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_mapping() {
        let err: SetupForgeError = ValidationError::required("vehicle_class").into();
        assert_eq!(err.category(), ErrorCategory::Validation);

        let err: SetupForgeError = CatalogError::CarNotFound(999).into();
        assert_eq!(err.category(), ErrorCategory::NotFound);

        let err: SetupForgeError = CatalogError::Parse("bad".to_string()).into();
        assert_eq!(err.category(), ErrorCategory::Catalog);

        let err: SetupForgeError = TemplateError::Io("gone".to_string()).into();
        assert_eq!(err.category(), ErrorCategory::Template);

        assert_eq!(
            SetupForgeError::config("bad file").category(),
            ErrorCategory::Config
        );
    }

    #[test]
    fn test_severity_follows_source() {
        let err: SetupForgeError = CatalogError::Parse("bad".to_string()).into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);

        let err: SetupForgeError = CatalogError::TrackNotFound(3).into();
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert!(ErrorSeverity::Critical > ErrorSeverity::Error);
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SetupForgeError = io.into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.category().to_string(), "io");
    }
}
