//! End-to-end setup generation
//!
//! Resolver, adaptation, style and session run in that order; each stage
//! normalizes its output, so the final setup is already normalized.

use std::borrow::Cow;
use std::num::NonZeroUsize;
use std::panic;
use std::thread;

use serde::Serialize;
use setupforge_errors::ValidationError;
use setupforge_model::{
    GenerationRequest, Precision, SessionType, Setup, Style, TrackCharacteristics, TrackType,
    ValidatedRequest, VehicleClass, WearLevel,
};
use tracing::info;

use crate::adaptation::adapt_traced;
use crate::hash::fingerprint_hex;
use crate::session::apply_session;
use crate::style::apply_style;
use crate::templates::{FallbackReason, TemplateTable};

/// Name recorded in every metadata block.
pub const ALGORITHM: &str = "adaptive_v1";

const BASE_CONFIDENCE: f64 = 0.7;
const CHARACTERISTICS_BONUS: f64 = 0.2;
const POPULAR_CLASS_BONUS: f64 = 0.1;

/// How a setup was produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationMetadata {
    pub algorithm: &'static str,
    pub vehicle_class: VehicleClass,
    pub track_type: TrackType,
    pub style: Style,
    pub session_type: SessionType,
    /// Template actually used, `class/track_type`.
    pub template: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_fallback: Option<FallbackReason>,
    pub adaptations_applied: Vec<String>,
    pub confidence_score: f64,
    pub recommendations: Vec<String>,
    pub fingerprint: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedSetup {
    pub setup: Setup,
    pub metadata: GenerationMetadata,
}

/// Runs the generation pipeline against a template table.
#[derive(Debug, Clone)]
pub struct SetupGenerator {
    templates: Cow<'static, TemplateTable>,
}

impl SetupGenerator {
    /// Generator over the builtin templates.
    pub fn new() -> Self {
        Self {
            templates: Cow::Borrowed(TemplateTable::builtin()),
        }
    }

    /// Generator over a custom table, e.g. one with operator overrides.
    pub fn with_templates(templates: TemplateTable) -> Self {
        Self {
            templates: Cow::Owned(templates),
        }
    }

    pub fn templates(&self) -> &TemplateTable {
        &self.templates
    }

    /// Generate a setup. Total: unknown class or track type ids fall back
    /// to another template and are reported in the metadata.
    pub fn generate(&self, request: &ValidatedRequest) -> GeneratedSetup {
        let resolved = self
            .templates
            .resolve_ids(&request.vehicle_class_id, &request.track_type_id);
        let vehicle_class = request
            .vehicle_class()
            .unwrap_or(resolved.key_used.vehicle_class);
        let track_type = request.track_type().unwrap_or(resolved.key_used.track_type);

        let adapted = adapt_traced(
            resolved.setup,
            track_type,
            request.characteristics.as_ref(),
            request.conditions.as_ref(),
        );
        let styled = apply_style(adapted.setup, request.style, vehicle_class, track_type);
        let setup = apply_session(styled, request.session);

        let confidence_score = confidence_score(
            request.characteristics.is_some(),
            request.vehicle_class(),
        );
        let metadata = GenerationMetadata {
            algorithm: ALGORITHM,
            vehicle_class,
            track_type,
            style: request.style,
            session_type: request.session,
            template: resolved.key_used.to_string(),
            template_fallback: resolved.fallback,
            adaptations_applied: adapted
                .applied
                .iter()
                .map(|a| a.description().to_string())
                .collect(),
            confidence_score,
            recommendations: recommendations(track_type, request.characteristics.as_ref()),
            fingerprint: fingerprint_hex(&setup),
        };

        info!(
            vehicle_class = %vehicle_class,
            track_type = %track_type,
            style = %request.style,
            session = %request.session,
            adaptations = metadata.adaptations_applied.len(),
            confidence = metadata.confidence_score,
            "Generated setup"
        );

        GeneratedSetup { setup, metadata }
    }

    /// Generate many setups on scoped worker threads. Output order matches
    /// input order.
    pub fn generate_batch(&self, requests: &[ValidatedRequest]) -> Vec<GeneratedSetup> {
        let workers = thread::available_parallelism().map_or(1, NonZeroUsize::get);
        let chunk_size = requests.len().div_ceil(workers).max(1);

        thread::scope(|scope| {
            let handles: Vec<_> = requests
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || {
                        chunk.iter().map(|r| self.generate(r)).collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|payload| panic::resume_unwind(payload))
                })
                .collect()
        })
    }
}

impl Default for SetupGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a raw request and generate against the builtin templates.
///
/// # Errors
///
/// Returns the [`ValidationError`] from [`GenerationRequest::validate`];
/// nothing runs when validation fails.
pub fn generate(request: &GenerationRequest) -> Result<GeneratedSetup, ValidationError> {
    let validated = request.validate()?;
    Ok(SetupGenerator::new().generate(&validated))
}

/// 0.7 base, +0.2 with track characteristics, +0.1 for a popular class,
/// capped at 1.0 and rounded to two decimals.
pub fn confidence_score(has_characteristics: bool, vehicle_class: Option<VehicleClass>) -> f64 {
    let mut score = BASE_CONFIDENCE;
    if has_characteristics {
        score += CHARACTERISTICS_BONUS;
    }
    if vehicle_class.is_some_and(VehicleClass::is_popular) {
        score += POPULAR_CLASS_BONUS;
    }
    Precision::Hundredths.round(score.min(1.0))
}

/// Advice shown alongside a generated setup.
pub fn recommendations(
    track_type: TrackType,
    characteristics: Option<&TrackCharacteristics>,
) -> Vec<String> {
    let mut advice: Vec<&str> = Vec::new();

    if track_type.is_oval() {
        advice.push("Consider adjusting tire pressures based on track temperature");
        advice.push("Monitor tire wear during longer runs");
    } else if track_type.is_road() {
        advice.push("Fine-tune brake balance for different corner types");
        advice.push("Adjust differential settings based on track layout");
    }

    if let Some(tc) = characteristics {
        if tc.brake_wear == Some(WearLevel::High) {
            advice.push("Consider more conservative brake settings for this track");
        }
        if tc.tire_wear == Some(WearLevel::High) {
            advice.push("Monitor tire temperatures and adjust pressures accordingly");
        }
    }

    advice.push("Test the setup in practice sessions before racing");
    advice.push("Make small adjustments based on your driving style");
    advice.into_iter().map(String::from).collect()
}
