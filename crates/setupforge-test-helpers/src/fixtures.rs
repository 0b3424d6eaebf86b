//! Setup, track and condition fixtures.
//!
//! The setups here are deliberately un-normalized (odd decimals) so tests
//! can see the rounding happen.

use setupforge_model::{
    Aerodynamics, AxleSuspension, BrakeDucts, Brakes, Chassis, Conditions, Damper,
    DownforceImportance, Differential, Fuel, FuelStrategy, Gearing, GripLevel, PadCompound,
    RampAngles, Setup, Suspension, TireCompound, TirePressures, Tires, TrackCharacteristics,
    WearLevel, Weather,
};

/// Every subsystem populated, bump/rebound dampers, values off-precision.
pub fn raw_setup() -> Setup {
    Setup {
        suspension: Some(Suspension {
            front: Some(
                AxleSuspension::new(
                    951.4,
                    Damper::BumpRebound {
                        bump: 64.6,
                        rebound: 70.2,
                    },
                    8.4,
                    54.7,
                )
                .with_alignment(-2.84, Some(7.26), -0.13),
            ),
            rear: Some(
                AxleSuspension::new(
                    1049.5,
                    Damper::BumpRebound {
                        bump: 60.1,
                        rebound: 65.5,
                    },
                    6.2,
                    61.3,
                )
                .with_alignment(-2.36, None, 0.27),
            ),
        }),
        aerodynamics: Some(Aerodynamics {
            front_wing: Some(4.4),
            rear_wing: Some(6.6),
            front_splitter: Some(2.2),
            rear_diffuser: None,
            rear_spoiler: None,
        }),
        differential: Some(Differential {
            preload: Some(79.6),
            power: Some(64.8),
            coast: Some(40.3),
            ramp_angles: Some(RampAngles {
                power: 44.6,
                coast: 59.9,
            }),
        }),
        brakes: Some(Brakes {
            balance: Some(53.24),
            pressure: Some(80.4),
            ducts: Some(BrakeDucts {
                front: 3.2,
                rear: 2.7,
            }),
            pad_compound: Some(PadCompound::Medium),
        }),
        tires: Some(Tires {
            pressure: Some(TirePressures::new(23.04, 23.06, 22.54, 22.49)),
            compound: Some(TireCompound::Medium),
        }),
        gearing: Some(Gearing::new(3.456, &[2.912, 2.111, 1.666, 1.354, 1.149, 0.995])),
        fuel: Some(Fuel {
            amount: Some(64.7),
            strategy: Some(FuelStrategy::Balanced),
        }),
        chassis: None,
    }
}

/// Stock-car style setup: scalar dampers, chassis block, no aero.
pub fn scalar_damper_setup() -> Setup {
    Setup {
        suspension: Some(Suspension {
            front: Some(AxleSuspension::new(1600.3, Damper::Scalar(89.6), 20.4, 100.2)),
            rear: Some(AxleSuspension::new(1400.7, Damper::Scalar(85.1), 15.5, 110.8)),
        }),
        tires: Some(Tires {
            pressure: Some(TirePressures::new(32.04, 35.06, 31.01, 34.05)),
            compound: None,
        }),
        chassis: Some(Chassis {
            track_bar: Some(11.4),
            wedge: Some(2.46),
            cross_weight: Some(52.44),
        }),
        ..Setup::default()
    }
}

/// Only tire pressures.
pub fn sparse_setup() -> Setup {
    Setup {
        tires: Some(Tires {
            pressure: Some(TirePressures::new(21.0, 21.0, 20.5, 20.5)),
            compound: None,
        }),
        ..Setup::default()
    }
}

/// One characteristics record per rule trigger, plus an empty one and a
/// record that fires several rules at once.
pub fn all_characteristics() -> Vec<TrackCharacteristics> {
    let empty = TrackCharacteristics::default();
    vec![
        empty.clone(),
        TrackCharacteristics {
            length_km: Some(7.0),
            ..empty.clone()
        },
        TrackCharacteristics {
            length_km: Some(1.6),
            ..empty.clone()
        },
        TrackCharacteristics {
            elevation_change_m: Some(104.0),
            ..empty.clone()
        },
        TrackCharacteristics {
            banking_max_deg: Some(31.0),
            ..empty.clone()
        },
        TrackCharacteristics {
            grip_level: Some(GripLevel::Low),
            ..empty.clone()
        },
        TrackCharacteristics {
            grip_level: Some(GripLevel::High),
            ..empty.clone()
        },
        TrackCharacteristics {
            downforce_importance: Some(DownforceImportance::High),
            ..empty.clone()
        },
        TrackCharacteristics {
            length_km: Some(20.8),
            elevation_change_m: Some(300.0),
            banking_max_deg: Some(18.0),
            grip_level: Some(GripLevel::Low),
            downforce_importance: Some(DownforceImportance::High),
            brake_wear: Some(WearLevel::High),
            tire_wear: Some(WearLevel::High),
        },
    ]
}

/// Dry, wet, hot and cold conditions.
pub fn all_conditions() -> Vec<Conditions> {
    vec![
        Conditions::default(),
        Conditions {
            weather: Some(Weather::Rain),
            temperature_c: None,
        },
        Conditions {
            weather: Some(Weather::Wet),
            temperature_c: Some(12.0),
        },
        Conditions {
            weather: Some(Weather::Clear),
            temperature_c: Some(35.0),
        },
        Conditions {
            weather: None,
            temperature_c: Some(5.0),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_validate() {
        for setup in [raw_setup(), scalar_damper_setup(), sparse_setup()] {
            assert!(setupforge_model::validate_setup(&setup).is_ok());
        }
    }

    #[test]
    fn test_characteristics_validate() {
        for tc in all_characteristics() {
            assert!(tc.validate().is_ok(), "{tc:?}");
        }
        for c in all_conditions() {
            assert!(c.validate().is_ok(), "{c:?}");
        }
    }
}
