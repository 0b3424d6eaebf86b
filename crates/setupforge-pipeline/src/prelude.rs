//! Common imports for generator callers.

pub use crate::adaptation::{Adaptation, adapt, adapt_traced};
pub use crate::generator::{GeneratedSetup, GenerationMetadata, SetupGenerator, generate};
pub use crate::normalize::normalize;
pub use crate::session::apply_session;
pub use crate::style::apply_style;
pub use crate::templates::{FallbackReason, ResolvedTemplate, TemplateKey, TemplateTable, resolve};
pub use setupforge_model::{
    Conditions, GenerationRequest, SessionType, Setup, Style, TrackCharacteristics, TrackType,
    ValidatedRequest, VehicleClass,
};
