//! Track adaptation engine
//!
//! Applies linear deltas keyed on track characteristics and session
//! conditions. Rules run in a fixed order and compound; each touches only
//! fields the setup already has. The result is always normalized.

use core::fmt;

use serde::Serialize;
use setupforge_model::{
    Conditions, DownforceImportance, GripLevel, Setup, TrackCharacteristics, TrackType,
    offset, offset_floored,
};
use tracing::{debug, trace};

use crate::normalize::normalize;

/// Minimum for any wing or splitter after a reduction.
pub const WING_FLOOR: f64 = 1.0;
/// Minimum tire pressure on a low-grip surface, psi. Holds for the final
/// adapted setup, after the condition rules have run.
pub const LOW_GRIP_PRESSURE_FLOOR: f64 = 18.0;
/// Differential locking never drops below fully open.
pub const DIFF_LOCK_FLOOR: f64 = 0.0;

const LONG_TRACK_KM: f64 = 5.0;
const SHORT_TRACK_KM: f64 = 2.0;
const ELEVATION_THRESHOLD_M: f64 = 50.0;
const BANKING_THRESHOLD_DEG: f64 = 15.0;
const HOT_THRESHOLD_C: f64 = 30.0;
const COLD_THRESHOLD_C: f64 = 15.0;

/// A rule that fired during adaptation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Adaptation {
    LongTrack,
    ShortTrack,
    Elevation,
    Banking,
    LowGrip,
    HighGrip,
    HighDownforce,
    WetWeather,
    HotConditions,
    ColdConditions,
}

impl Adaptation {
    /// Human-readable description for generation metadata.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Adaptation::LongTrack => "Reduced tire pressure for long track",
            Adaptation::ShortTrack => "Added downforce and softened springs for short track",
            Adaptation::Elevation => "Stiffened suspension for elevation changes",
            Adaptation::Banking => "Adjusted anti-roll bars for banking",
            Adaptation::LowGrip => "Softened setup for low grip surface",
            Adaptation::HighGrip => "Stiffened setup for high grip surface",
            Adaptation::HighDownforce => "Increased downforce for high-speed track",
            Adaptation::WetWeather => "Rain setup modifications applied",
            Adaptation::HotConditions => "Lowered tire pressures for hot conditions",
            Adaptation::ColdConditions => "Raised tire pressures for cold conditions",
        }
    }
}

impl fmt::Display for Adaptation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Adapted setup plus the rules that fired, in firing order.
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptationOutcome {
    pub setup: Setup,
    pub applied: Vec<Adaptation>,
}

/// Adapt a setup to a track and conditions.
///
/// With neither characteristics nor conditions this is `normalize(setup)`.
#[must_use]
pub fn adapt(
    setup: Setup,
    track_type: TrackType,
    characteristics: Option<&TrackCharacteristics>,
    conditions: Option<&Conditions>,
) -> Setup {
    adapt_traced(setup, track_type, characteristics, conditions).setup
}

/// [`adapt`], also reporting which rules fired.
#[must_use]
pub fn adapt_traced(
    mut setup: Setup,
    track_type: TrackType,
    characteristics: Option<&TrackCharacteristics>,
    conditions: Option<&Conditions>,
) -> AdaptationOutcome {
    let mut applied = Vec::new();

    if let Some(tc) = characteristics {
        apply_track_rules(&mut setup, tc, &mut applied);
    }
    if let Some(conditions) = conditions {
        apply_condition_rules(&mut setup, conditions, &mut applied);
    }
    if applied.contains(&Adaptation::LowGrip) {
        setup.map_tire_pressures(|_, p| p.max(LOW_GRIP_PRESSURE_FLOOR));
    }

    debug!(
        track_type = %track_type,
        rules = applied.len(),
        "Track adaptation complete"
    );

    AdaptationOutcome {
        setup: normalize(setup),
        applied,
    }
}

fn apply_track_rules(setup: &mut Setup, tc: &TrackCharacteristics, applied: &mut Vec<Adaptation>) {
    match tc.length_km {
        Some(length) if length > LONG_TRACK_KM => {
            if let Some(aero) = &mut setup.aerodynamics {
                offset_floored(&mut aero.front_wing, -2.0, WING_FLOOR);
                offset_floored(&mut aero.rear_wing, -3.0, WING_FLOOR);
                offset_floored(&mut aero.front_splitter, -1.0, WING_FLOOR);
            }
            setup.scale_springs(1.05, 1.05);
            setup.offset_tire_pressures(-0.5);
            fired(applied, Adaptation::LongTrack);
        }
        Some(length) if length < SHORT_TRACK_KM => {
            if let Some(aero) = &mut setup.aerodynamics {
                offset(&mut aero.front_wing, 1.0);
                offset(&mut aero.rear_wing, 2.0);
                offset(&mut aero.front_splitter, 1.0);
            }
            setup.scale_springs(0.95, 0.95);
            fired(applied, Adaptation::ShortTrack);
        }
        _ => {}
    }

    if tc.elevation_change_m.is_some_and(|e| e > ELEVATION_THRESHOLD_M) {
        setup.scale_springs(1.08, 1.06);
        setup.offset_ride_heights(2.0, 2.0);
        fired(applied, Adaptation::Elevation);
    }

    if tc.banking_max_deg.is_some_and(|b| b > BANKING_THRESHOLD_DEG) {
        setup.scale_springs(1.15, 1.12);
        setup.offset_anti_roll_bars(3.0, 2.0);
        setup.map_tire_pressures(|corner, p| if corner.is_right_side() { p + 2.0 } else { p });
        fired(applied, Adaptation::Banking);
    }

    match tc.grip_level {
        Some(GripLevel::Low) => {
            setup.scale_springs(0.88, 0.90);
            reduce_diff_locking(setup, 15.0, 8.0);
            setup.map_tire_pressures(|_, p| (p - 1.5).max(LOW_GRIP_PRESSURE_FLOOR));
            fired(applied, Adaptation::LowGrip);
        }
        Some(GripLevel::High) => {
            setup.scale_springs(1.06, 1.04);
            setup.offset_tire_pressures(0.5);
            fired(applied, Adaptation::HighGrip);
        }
        Some(GripLevel::Normal) | None => {}
    }

    if tc.downforce_importance == Some(DownforceImportance::High) {
        if let Some(aero) = &mut setup.aerodynamics {
            offset(&mut aero.front_wing, 2.0);
            offset(&mut aero.rear_wing, 3.0);
        }
        fired(applied, Adaptation::HighDownforce);
    }
}

fn apply_condition_rules(setup: &mut Setup, conditions: &Conditions, applied: &mut Vec<Adaptation>) {
    if conditions.weather.is_some_and(|w| w.is_wet()) {
        setup.offset_tire_pressures(1.5);
        setup.scale_springs(0.85, 0.88);
        reduce_diff_locking(setup, 20.0, 10.0);
        fired(applied, Adaptation::WetWeather);
    }

    match conditions.temperature_c {
        Some(t) if t > HOT_THRESHOLD_C => {
            setup.offset_tire_pressures(-1.0);
            fired(applied, Adaptation::HotConditions);
        }
        Some(t) if t < COLD_THRESHOLD_C => {
            setup.offset_tire_pressures(1.0);
            fired(applied, Adaptation::ColdConditions);
        }
        _ => {}
    }
}

/// Open the differential. Locking is floored at fully open.
fn reduce_diff_locking(setup: &mut Setup, power: f64, coast: f64) {
    if let Some(diff) = &mut setup.differential {
        offset_floored(&mut diff.power, -power, DIFF_LOCK_FLOOR);
        offset_floored(&mut diff.coast, -coast, DIFF_LOCK_FLOOR);
    }
}

fn fired(applied: &mut Vec<Adaptation>, adaptation: Adaptation) {
    trace!(rule = ?adaptation, "Adaptation rule fired");
    applied.push(adaptation);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::resolve;
    use setupforge_model::{TirePressures, VehicleClass, Weather};

    fn gt3_road() -> Setup {
        resolve(VehicleClass::Gt3, TrackType::Road).setup
    }

    fn pressures(setup: &Setup) -> Option<TirePressures> {
        setup.tires.as_ref().and_then(|t| t.pressure)
    }

    fn characteristics() -> TrackCharacteristics {
        TrackCharacteristics::default()
    }

    #[test]
    fn test_no_inputs_is_normalize() {
        let setup = gt3_road();
        let outcome = adapt_traced(setup.clone(), TrackType::Road, None, None);
        assert_eq!(outcome.setup, normalize(setup));
        assert!(outcome.applied.is_empty());
    }

    #[test]
    fn test_low_grip() {
        let tc = TrackCharacteristics {
            grip_level: Some(GripLevel::Low),
            ..characteristics()
        };
        let outcome = adapt_traced(gt3_road(), TrackType::Road, Some(&tc), None);
        let diff = outcome.setup.differential.clone().unwrap_or_default();
        assert_eq!(diff.power, Some(50.0));
        assert_eq!(diff.coast, Some(37.0));
        assert_eq!(
            pressures(&outcome.setup),
            Some(TirePressures::new(21.5, 21.5, 21.0, 21.0))
        );
        assert_eq!(outcome.applied, vec![Adaptation::LowGrip]);
    }

    #[test]
    fn test_low_grip_pressure_floor() {
        let mut setup = gt3_road();
        setup.offset_tire_pressures(-4.0);
        let tc = TrackCharacteristics {
            grip_level: Some(GripLevel::Low),
            ..characteristics()
        };
        let adapted = adapt(setup, TrackType::Road, Some(&tc), None);
        assert_eq!(
            pressures(&adapted),
            Some(TirePressures::new(18.0, 18.0, 18.0, 18.0))
        );
    }

    #[test]
    fn test_low_grip_floor_survives_hot_conditions() {
        let base = resolve(VehicleClass::DirtOval, TrackType::Dirt).setup;
        let tc = TrackCharacteristics {
            grip_level: Some(GripLevel::Low),
            ..characteristics()
        };
        let hot = Conditions {
            weather: None,
            temperature_c: Some(35.0),
        };
        let outcome = adapt_traced(base, TrackType::Dirt, Some(&tc), Some(&hot));
        assert_eq!(
            pressures(&outcome.setup),
            Some(TirePressures::new(18.0, 19.5, 18.0, 19.0))
        );
        assert_eq!(
            outcome.applied,
            vec![Adaptation::LowGrip, Adaptation::HotConditions]
        );
    }

    #[test]
    fn test_hot_conditions_unfloored_without_low_grip() {
        let base = resolve(VehicleClass::DirtOval, TrackType::Dirt).setup;
        let hot = Conditions {
            weather: None,
            temperature_c: Some(35.0),
        };
        let adapted = adapt(base, TrackType::Dirt, None, Some(&hot));
        assert_eq!(pressures(&adapted).map(|p| p.rl), Some(18.5));
    }

    #[test]
    fn test_rain() {
        let conditions = Conditions {
            weather: Some(Weather::Rain),
            temperature_c: None,
        };
        let adapted = adapt(gt3_road(), TrackType::Road, None, Some(&conditions));
        assert_eq!(
            pressures(&adapted),
            Some(TirePressures::new(24.5, 24.5, 24.0, 24.0))
        );
        let diff = adapted.differential.unwrap_or_default();
        assert_eq!(diff.power, Some(45.0));
        assert_eq!(diff.coast, Some(35.0));
    }

    #[test]
    fn test_rain_diff_floor_at_zero() {
        let mut setup = gt3_road();
        if let Some(diff) = &mut setup.differential {
            diff.power = Some(12.0);
            diff.coast = Some(4.0);
        }
        let conditions = Conditions {
            weather: Some(Weather::Wet),
            temperature_c: None,
        };
        let diff = adapt(setup, TrackType::Road, None, Some(&conditions))
            .differential
            .unwrap_or_default();
        assert_eq!(diff.power, Some(0.0));
        assert_eq!(diff.coast, Some(0.0));
    }

    #[test]
    fn test_long_track_floors_wings() {
        let tc = TrackCharacteristics {
            length_km: Some(13.6),
            ..characteristics()
        };
        let mut setup = gt3_road();
        if let Some(aero) = &mut setup.aerodynamics {
            aero.front_wing = Some(2.0);
        }
        let outcome = adapt_traced(setup, TrackType::Road, Some(&tc), None);
        let aero = outcome.setup.aerodynamics.clone().unwrap_or_default();
        assert_eq!(aero.front_wing, Some(1.0));
        assert_eq!(aero.rear_wing, Some(3.0));
        assert_eq!(aero.front_splitter, Some(2.0));
        assert_eq!(outcome.applied, vec![Adaptation::LongTrack]);
    }

    #[test]
    fn test_short_track() {
        let tc = TrackCharacteristics {
            length_km: Some(1.5),
            ..characteristics()
        };
        let adapted = adapt(gt3_road(), TrackType::Road, Some(&tc), None);
        let aero = adapted.aerodynamics.unwrap_or_default();
        assert_eq!(aero.front_wing, Some(5.0));
        assert_eq!(aero.rear_wing, Some(8.0));
        assert_eq!(aero.front_splitter, Some(4.0));
    }

    #[test]
    fn test_banking_raises_right_side_only() {
        let tc = TrackCharacteristics {
            banking_max_deg: Some(24.0),
            ..characteristics()
        };
        let base = resolve(VehicleClass::Nascar, TrackType::Oval).setup;
        let adapted = adapt(base, TrackType::Oval, Some(&tc), None);
        assert_eq!(
            pressures(&adapted),
            Some(TirePressures::new(32.0, 37.0, 31.0, 36.0))
        );
        let front = adapted.suspension.and_then(|s| s.front).unwrap_or_default();
        assert_eq!(front.anti_roll_bar, Some(23.0));
        assert_eq!(front.spring, Some(1840.0));
    }

    #[test]
    fn test_rules_fire_in_order() {
        let tc = TrackCharacteristics {
            length_km: Some(20.8),
            elevation_change_m: Some(300.0),
            banking_max_deg: Some(0.0),
            grip_level: Some(GripLevel::High),
            downforce_importance: Some(DownforceImportance::High),
            ..characteristics()
        };
        let conditions = Conditions {
            weather: Some(Weather::Rain),
            temperature_c: Some(8.0),
        };
        let outcome = adapt_traced(gt3_road(), TrackType::Road, Some(&tc), Some(&conditions));
        assert_eq!(
            outcome.applied,
            vec![
                Adaptation::LongTrack,
                Adaptation::Elevation,
                Adaptation::HighGrip,
                Adaptation::HighDownforce,
                Adaptation::WetWeather,
                Adaptation::ColdConditions,
            ]
        );
    }

    #[test]
    fn test_temperature_thresholds_are_exclusive() {
        for t in [15.0, 22.0, 30.0] {
            let conditions = Conditions {
                weather: None,
                temperature_c: Some(t),
            };
            let outcome = adapt_traced(gt3_road(), TrackType::Road, None, Some(&conditions));
            assert!(outcome.applied.is_empty(), "temperature {t}");
        }
    }

    #[test]
    fn test_hot_and_cold() {
        let hot = Conditions {
            weather: None,
            temperature_c: Some(35.0),
        };
        let cold = Conditions {
            weather: Some(Weather::Clear),
            temperature_c: Some(0.0),
        };
        let hot_setup = adapt(gt3_road(), TrackType::Road, None, Some(&hot));
        let cold_setup = adapt(gt3_road(), TrackType::Road, None, Some(&cold));
        assert_eq!(pressures(&hot_setup).map(|p| p.fl), Some(22.0));
        assert_eq!(pressures(&cold_setup).map(|p| p.fl), Some(24.0));
    }

    #[test]
    fn test_missing_subsystems_are_skipped() {
        let setup = resolve(VehicleClass::DirtOval, TrackType::Dirt).setup;
        assert!(setup.aerodynamics.is_none());
        let tc = TrackCharacteristics {
            length_km: Some(0.8),
            downforce_importance: Some(DownforceImportance::High),
            ..characteristics()
        };
        let adapted = adapt(setup.clone(), TrackType::Dirt, Some(&tc), None);
        assert!(adapted.aerodynamics.is_none());
        assert_eq!(adapted.field_paths(), setup.field_paths());
    }

    #[test]
    fn test_input_is_not_modified() {
        let setup = gt3_road();
        let copy = setup.clone();
        let tc = TrackCharacteristics {
            grip_level: Some(GripLevel::Low),
            ..characteristics()
        };
        let _adapted = adapt(setup.clone(), TrackType::Road, Some(&tc), None);
        assert_eq!(setup, copy);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(
            Adaptation::WetWeather.to_string(),
            "Rain setup modifications applied"
        );
    }
}
