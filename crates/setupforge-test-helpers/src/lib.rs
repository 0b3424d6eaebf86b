//! Shared test utilities for SetupForge.
//!
//! # Modules
//!
//! - [`mod@must`] - Unwrap helpers with good error messages and `#[track_caller]`
//! - [`assertions`] - Assertion macros for floating-point setup values
//! - [`fixtures`] - Setup and track fixtures
//! - [`prelude`] - Convenience re-exports
//!
//! ```rust,ignore
//! use setupforge_test_helpers::prelude::*;
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::unwrap_used, clippy::panic)]

pub mod assertions;
pub mod must;
pub mod prelude;

#[cfg(feature = "fixtures")]
pub mod fixtures;

pub use must::*;
