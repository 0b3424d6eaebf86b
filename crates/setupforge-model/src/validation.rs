//! Setup validation

use setupforge_errors::ValidationError;

use crate::precision::FieldKind;
use crate::types::Setup;

pub const MAX_TIRE_PRESSURE: f64 = 60.0;

/// Check that every populated field holds a physically meaningful value.
///
/// Used for operator-supplied templates and setups read from disk; setups
/// produced by the pipeline from valid templates always pass.
pub fn validate_setup(setup: &Setup) -> Result<(), ValidationError> {
    let mut first_error = None;
    setup.visit_numeric(|path, kind, value| {
        if first_error.is_none() {
            first_error = check_field(path, kind, value).err();
        }
    });
    first_error.map_or(Ok(()), Err)
}

fn check_field(path: &str, kind: FieldKind, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::non_finite(path));
    }

    match kind {
        FieldKind::TirePressure if !(0.0..=MAX_TIRE_PRESSURE).contains(&value) => Err(
            ValidationError::out_of_range(path, value, 0.0, MAX_TIRE_PRESSURE),
        ),
        FieldKind::SpringRate
        | FieldKind::AntiRollBar
        | FieldKind::Damper
        | FieldKind::BrakePressure
        | FieldKind::FuelAmount
            if value < 0.0 =>
        {
            Err(ValidationError::constraint(format!(
                "{path} must not be negative, got {value}"
            )))
        }
        FieldKind::BrakeBalance | FieldKind::CrossWeight if !(0.0..=100.0).contains(&value) => {
            Err(ValidationError::out_of_range(path, value, 0.0, 100.0))
        }
        FieldKind::FinalDrive | FieldKind::GearRatio if value <= 0.0 => Err(
            ValidationError::constraint(format!("{path} must be positive, got {value}")),
        ),
        _ => Ok(()),
    }
}
