//! Serialization and traversal tests for the setup model.

use proptest::prelude::*;
use setupforge_model::{Damper, FieldKind, Precision, Setup, TireCompound, validate_setup};

const GT3_YAML: &str = r#"
suspension:
  front:
    spring: 950
    damper: { bump: 65, rebound: 70 }
    antiRollBar: 8
    rideHeight: 55
    camber: -2.8
  rear:
    spring: 1050
    damper: 60
aerodynamics:
  frontWing: 4
  rearWing: 6
tires:
  pressure: { fl: 23.0, fr: 23.0, rl: 22.5, rr: 22.5 }
  compound: medium
gearing:
  finalDrive: 3.73
  ratios:
    1: 2.85
    2: 2.05
"#;

#[test]
fn test_setup_from_yaml() -> Result<(), Box<dyn std::error::Error>> {
    let setup: Setup = serde_yaml::from_str(GT3_YAML)?;

    let rear_damper = setup
        .suspension
        .as_ref()
        .and_then(|s| s.rear.as_ref())
        .and_then(|a| a.damper);
    assert_eq!(rear_damper, Some(Damper::Scalar(60.0)));
    assert_eq!(
        setup.tires.as_ref().and_then(|t| t.compound),
        Some(TireCompound::Medium)
    );
    assert_eq!(
        setup.gearing.as_ref().map(|g| g.ratios.len()),
        Some(2)
    );
    validate_setup(&setup)?;
    Ok(())
}

#[test]
fn test_json_roundtrip_preserves_shape() -> Result<(), Box<dyn std::error::Error>> {
    let setup: Setup = serde_yaml::from_str(GT3_YAML)?;
    let json = serde_json::to_string(&setup)?;
    let back: Setup = serde_json::from_str(&json)?;
    assert_eq!(back.field_paths(), setup.field_paths());
    assert_eq!(back, setup);
    Ok(())
}

#[test]
fn test_every_kind_has_a_precision() -> Result<(), Box<dyn std::error::Error>> {
    let setup: Setup = serde_yaml::from_str(GT3_YAML)?;
    let kinds: Vec<FieldKind> = setup.numeric_fields().iter().map(|f| f.kind).collect();
    assert!(kinds.contains(&FieldKind::Damper));
    assert!(kinds.contains(&FieldKind::GearRatio));
    Ok(())
}

proptest! {
    #[test]
    fn prop_rounding_is_idempotent(value in -5000.0f64..5000.0) {
        for precision in [Precision::Integer, Precision::Tenths, Precision::Hundredths] {
            let once = precision.round(value);
            prop_assert_eq!(precision.round(once).to_bits(), once.to_bits());
        }
    }

    #[test]
    fn prop_rounding_stays_close(value in -5000.0f64..5000.0) {
        prop_assert!((Precision::Integer.round(value) - value).abs() <= 0.5);
        prop_assert!((Precision::Tenths.round(value) - value).abs() <= 0.05 + 1e-9);
    }
}
