//! Centralized error types for SetupForge
//!
//! This crate provides the error taxonomy shared by the setup generator,
//! the car/track catalog and the `setupctl` front end.
//!
//! # Architecture
//!
//! - [`common`]: Top-level error type, category and severity
//! - [`validation`]: Caller-input validation errors (rejected before generation)
//! - [`template`]: Template table override errors
//! - [`catalog`]: Car/track catalog lookup and parse errors
//!
//! The generation pipeline itself is total: once a request is validated no
//! stage can fail. Unknown vehicle classes and track types are resolved by
//! falling back to another template, never surfaced as errors.
//!
//! # Example
//!
//! ```
//! use setupforge_errors::prelude::*;
//!
//! fn parse_style(value: &str) -> Result<&'static str> {
//!     match value {
//!         "safe" => Ok("safe"),
//!         "balanced" => Ok("balanced"),
//!         "aggressive" => Ok("aggressive"),
//!         other => Err(ValidationError::invalid_enum("style", other, "safe, balanced, aggressive").into()),
//!     }
//! }
//!
//! assert!(parse_style("wild").is_err());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod catalog;
pub mod common;
pub mod prelude;
pub mod template;
pub mod validation;

pub use catalog::CatalogError;
pub use common::{ErrorCategory, ErrorSeverity, SetupForgeError};
pub use template::TemplateError;
pub use validation::ValidationError;

/// A specialized `Result` type for SetupForge operations.
pub type Result<T> = std::result::Result<T, SetupForgeError>;
