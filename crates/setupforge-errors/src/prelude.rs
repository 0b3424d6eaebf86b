//! Prelude module for convenient error handling imports.
//!
//! # Example
//!
//! ```
//! use setupforge_errors::prelude::*;
//!
//! fn require_class(id: &str) -> Result<&str> {
//!     if id.is_empty() {
//!         return Err(ValidationError::required("vehicle_class").into());
//!     }
//!     Ok(id)
//! }
//!
//! assert!(require_class("").is_err());
//! ```

pub use crate::{
    Result,
    catalog::CatalogError,
    common::{ErrorCategory, ErrorSeverity, SetupForgeError},
    template::TemplateError,
    validation::ValidationError,
};
