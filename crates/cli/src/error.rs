//! Error types for setupctl

use setupforge_errors::{
    CatalogError, ErrorCategory, ErrorSeverity, SetupForgeError, TemplateError, ValidationError,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    SetupForge(#[from] SetupForgeError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl CliError {
    /// Category of the wrapped library error, if any.
    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            CliError::SetupForge(e) => Some(e.category()),
            CliError::JsonError(_) | CliError::YamlError(_) => None,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CliError::SetupForge(e) => e.severity(),
            CliError::JsonError(_) | CliError::YamlError(_) => ErrorSeverity::Error,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        self.category().map_or(1, category_exit_code)
    }

    /// Short machine-readable name used in `--json` error reports.
    pub fn type_name(&self) -> &'static str {
        self.category().map_or("parse", ErrorCategory::as_str)
    }
}

fn category_exit_code(category: ErrorCategory) -> u8 {
    match category {
        ErrorCategory::NotFound => 2,
        ErrorCategory::Validation => 4,
        _ => 1,
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::SetupForge(err.into())
    }
}

impl From<CatalogError> for CliError {
    fn from(err: CatalogError) -> Self {
        CliError::SetupForge(err.into())
    }
}

impl From<TemplateError> for CliError {
    fn from(err: TemplateError) -> Self {
        CliError::SetupForge(err.into())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::SetupForge(err.into())
    }
}

/// The library error behind an error reaching `main`, whether it was
/// wrapped in a [`CliError`] or not.
pub fn setupforge_error(error: &anyhow::Error) -> Option<&SetupForgeError> {
    match error.downcast_ref::<CliError>() {
        Some(CliError::SetupForge(e)) => Some(e),
        Some(_) => None,
        None => error.downcast_ref::<SetupForgeError>(),
    }
}

/// Exit code for any error reaching `main`.
pub fn exit_code(error: &anyhow::Error) -> u8 {
    setupforge_error(error).map_or(1, |e| category_exit_code(e.category()))
}
