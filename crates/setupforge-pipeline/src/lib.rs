//! Setup generation pipeline for SetupForge
//!
//! A generation runs five stages over an owned [`Setup`]:
//!
//! 1. [`templates`]: pick a baseline for the vehicle class and track type
//! 2. [`adaptation`]: track characteristic and weather deltas
//! 3. [`style`]: safe / balanced / aggressive preset
//! 4. [`session`]: practice / qualifying / race deltas
//! 5. [`normalize`]: round every field to instrument precision
//!
//! Every stage is a pure function of its inputs. [`SetupGenerator`] wires
//! them together and reports what it did in [`GenerationMetadata`].
//!
//! [`Setup`]: setupforge_model::Setup

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod adaptation;
pub mod generator;
pub mod hash;
pub mod normalize;
pub mod prelude;
pub mod session;
pub mod style;
pub mod templates;

pub use adaptation::{
    Adaptation, AdaptationOutcome, DIFF_LOCK_FLOOR, LOW_GRIP_PRESSURE_FLOOR, WING_FLOOR, adapt,
    adapt_traced,
};
pub use generator::{
    ALGORITHM, GeneratedSetup, GenerationMetadata, SetupGenerator, confidence_score, generate,
    recommendations,
};
pub use hash::{fingerprint_hex, setup_fingerprint};
pub use normalize::{normalize, normalize_in_place};
pub use session::{QUALIFYING_FUEL_FLOOR, apply_session};
pub use style::{AGGRESSIVE_PRESSURE_FLOOR, apply_style};
pub use templates::{
    FallbackReason, ResolvedTemplate, TemplateEntry, TemplateKey, TemplateTable, resolve,
};
