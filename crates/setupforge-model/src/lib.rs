//! Setup model for SetupForge
//!
//! This crate defines the [`Setup`] record the generator produces, the
//! inputs a generation request carries, and the traversal, adjustment,
//! validation and sheet-rendering helpers built on top of them.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod adjust;
pub mod classes;
pub mod inputs;
pub mod precision;
pub mod request;
pub mod sheet;
pub mod types;
pub mod validation;
pub mod visit;

pub use adjust::{Axle, offset, offset_floored, scale};
pub use classes::{TrackType, VehicleClass};
pub use inputs::{
    Conditions, DownforceImportance, GripLevel, SessionType, Style, TrackCharacteristics,
    WearLevel, Weather,
};
pub use precision::{FieldKind, Precision};
pub use request::{GenerationRequest, ValidatedRequest};
pub use sheet::{SheetHeader, render_sheet};
pub use types::*;
pub use validation::{MAX_TIRE_PRESSURE, validate_setup};
pub use visit::NumericField;
