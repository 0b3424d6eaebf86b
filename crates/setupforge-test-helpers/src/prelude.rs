//! Convenience re-exports for common test utilities.
//!
//! ```rust,ignore
//! use setupforge_test_helpers::prelude::*;
//! ```

pub use crate::must::{must, must_parse, must_some, must_with};
pub use crate::{assert_approx_eq, assert_in_range, assert_same_shape};

#[cfg(feature = "fixtures")]
pub use crate::fixtures::{
    all_characteristics, all_conditions, raw_setup, scalar_damper_setup, sparse_setup,
};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
