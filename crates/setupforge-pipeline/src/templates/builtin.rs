//! Builtin baseline setups, one per supported class and track type.

use setupforge_model::{
    Aerodynamics, AxleSuspension, BrakeDucts, Brakes, Chassis, Damper, Differential, Fuel,
    FuelStrategy, Gearing, PadCompound, RampAngles, Setup, Suspension, TireCompound,
    TirePressures, Tires, TrackType, VehicleClass,
};

use super::TemplateEntry;

/// Templates in declaration order. The first entry is the default used
/// when a requested class has no template at all.
pub(crate) fn builtin_entries() -> Vec<TemplateEntry> {
    vec![
        default_entry(),
        entry(
            VehicleClass::Gt3,
            TrackType::Oval,
            "GT3 Oval Baseline",
            "Stiff, high-rake GT3 setup for banked ovals",
            gt3_oval(),
        ),
        entry(
            VehicleClass::Formula,
            TrackType::Road,
            "Formula Road Baseline",
            "High downforce open-wheel baseline",
            formula_road(),
        ),
        entry(
            VehicleClass::Nascar,
            TrackType::Oval,
            "NASCAR Oval Baseline",
            "Stock car oval setup with staggered right-side pressures",
            nascar_oval(),
        ),
        entry(
            VehicleClass::Gt4,
            TrackType::Road,
            "GT4 Road Baseline",
            "Compliant GT4 baseline with fixed splitter",
            gt4_road(),
        ),
        entry(
            VehicleClass::Gte,
            TrackType::Road,
            "GTE Road Baseline",
            "GTE baseline between GT3 and prototype stiffness",
            gte_road(),
        ),
        entry(
            VehicleClass::Prototype,
            TrackType::Road,
            "Prototype Road Baseline",
            "Low ride height prototype baseline with diffuser",
            prototype_road(),
        ),
        entry(
            VehicleClass::Touring,
            TrackType::Road,
            "Touring Road Baseline",
            "Front-drive touring car baseline",
            touring_road(),
        ),
        entry(
            VehicleClass::DirtOval,
            TrackType::Dirt,
            "Dirt Oval Baseline",
            "Soft, tall dirt oval setup with wedge",
            dirt_oval(),
        ),
        entry(
            VehicleClass::Rallycross,
            TrackType::Rallycross,
            "Rallycross Baseline",
            "Long-travel mixed-surface baseline",
            rallycross(),
        ),
    ]
}

/// GT3 on a road course.
pub(crate) fn default_entry() -> TemplateEntry {
    entry(
        VehicleClass::Gt3,
        TrackType::Road,
        "GT3 Road Baseline",
        "Medium downforce baseline for GT3 cars on road courses",
        gt3_road(),
    )
}

fn entry(
    vehicle_class: VehicleClass,
    track_type: TrackType,
    name: &str,
    description: &str,
    setup: Setup,
) -> TemplateEntry {
    TemplateEntry {
        vehicle_class,
        track_type,
        name: name.to_string(),
        description: description.to_string(),
        setup,
    }
}

fn pair(bump: f64, rebound: f64) -> Damper {
    Damper::BumpRebound { bump, rebound }
}

fn suspension(front: AxleSuspension, rear: AxleSuspension) -> Option<Suspension> {
    Some(Suspension {
        front: Some(front),
        rear: Some(rear),
    })
}

fn differential(preload: f64, power: f64, coast: f64) -> Differential {
    Differential {
        preload: Some(preload),
        power: Some(power),
        coast: Some(coast),
        ramp_angles: None,
    }
}

fn brakes(balance: f64, pressure: f64, ducts: Option<(f64, f64)>, pad: PadCompound) -> Brakes {
    Brakes {
        balance: Some(balance),
        pressure: Some(pressure),
        ducts: ducts.map(|(front, rear)| BrakeDucts { front, rear }),
        pad_compound: Some(pad),
    }
}

fn tires(fl: f64, fr: f64, rl: f64, rr: f64, compound: TireCompound) -> Option<Tires> {
    Some(Tires {
        pressure: Some(TirePressures::new(fl, fr, rl, rr)),
        compound: Some(compound),
    })
}

fn fuel(amount: f64, strategy: FuelStrategy) -> Option<Fuel> {
    Some(Fuel {
        amount: Some(amount),
        strategy: Some(strategy),
    })
}

fn gt3_road() -> Setup {
    Setup {
        suspension: suspension(
            AxleSuspension::new(950.0, pair(65.0, 70.0), 8.0, 55.0)
                .with_alignment(-2.8, Some(6.2), 0.1),
            AxleSuspension::new(1050.0, pair(60.0, 65.0), 6.0, 60.0)
                .with_alignment(-2.2, None, 0.2),
        ),
        aerodynamics: Some(Aerodynamics {
            front_wing: Some(4.0),
            rear_wing: Some(6.0),
            front_splitter: Some(3.0),
            ..Aerodynamics::default()
        }),
        differential: Some(differential(80.0, 65.0, 45.0)),
        brakes: Some(brakes(53.2, 80.0, Some((3.0, 2.0)), PadCompound::Medium)),
        tires: tires(23.0, 23.0, 22.5, 22.5, TireCompound::Medium),
        gearing: Some(Gearing::new(3.73, &[2.85, 2.05, 1.58, 1.28, 1.05, 0.89])),
        fuel: fuel(65.0, FuelStrategy::Balanced),
        chassis: None,
    }
}

fn gt3_oval() -> Setup {
    Setup {
        suspension: suspension(
            AxleSuspension::new(1100.0, pair(70.0, 75.0), 12.0, 45.0)
                .with_alignment(-3.0, Some(6.8), 0.0),
            AxleSuspension::new(1200.0, pair(65.0, 70.0), 8.0, 50.0)
                .with_alignment(-2.4, None, 0.2),
        ),
        aerodynamics: Some(Aerodynamics {
            front_wing: Some(6.0),
            rear_wing: Some(8.0),
            front_splitter: Some(4.0),
            ..Aerodynamics::default()
        }),
        differential: Some(differential(90.0, 75.0, 55.0)),
        brakes: Some(brakes(52.0, 80.0, Some((2.0, 2.0)), PadCompound::Medium)),
        tires: tires(24.0, 24.0, 23.0, 23.0, TireCompound::Hard),
        gearing: Some(Gearing::new(3.55, &[2.75, 1.98, 1.52, 1.24, 1.04, 0.90])),
        fuel: fuel(80.0, FuelStrategy::Endurance),
        chassis: None,
    }
}

fn formula_road() -> Setup {
    Setup {
        suspension: suspension(
            AxleSuspension::new(1400.0, Damper::Scalar(80.0), 15.0, 35.0)
                .with_alignment(-3.2, Some(7.0), -0.1),
            AxleSuspension::new(1500.0, Damper::Scalar(75.0), 12.0, 40.0)
                .with_alignment(-1.8, None, 0.2),
        ),
        aerodynamics: Some(Aerodynamics {
            front_wing: Some(8.0),
            rear_wing: Some(12.0),
            ..Aerodynamics::default()
        }),
        differential: Some(Differential {
            ramp_angles: Some(RampAngles {
                power: 50.0,
                coast: 40.0,
            }),
            ..differential(60.0, 50.0, 35.0)
        }),
        brakes: Some(brakes(56.0, 85.0, Some((4.0, 3.0)), PadCompound::High)),
        tires: tires(24.0, 24.0, 23.5, 23.5, TireCompound::Soft),
        gearing: Some(Gearing::new(
            3.40,
            &[3.10, 2.35, 1.88, 1.56, 1.32, 1.14, 1.00, 0.88],
        )),
        fuel: fuel(100.0, FuelStrategy::Balanced),
        chassis: None,
    }
}

fn nascar_oval() -> Setup {
    Setup {
        suspension: suspension(
            AxleSuspension::new(1600.0, Damper::Scalar(90.0), 20.0, 40.0)
                .with_alignment(-3.5, Some(8.0), 0.0),
            AxleSuspension::new(1700.0, Damper::Scalar(85.0), 15.0, 45.0)
                .with_alignment(-1.5, None, 0.0),
        ),
        aerodynamics: Some(Aerodynamics {
            front_splitter: Some(4.0),
            rear_spoiler: Some(7.0),
            ..Aerodynamics::default()
        }),
        differential: Some(differential(100.0, 80.0, 60.0)),
        brakes: Some(brakes(50.0, 75.0, None, PadCompound::Medium)),
        tires: tires(32.0, 35.0, 31.0, 34.0, TireCompound::Hard),
        gearing: Some(Gearing::new(4.11, &[2.95, 1.94, 1.36, 1.00])),
        fuel: fuel(85.0, FuelStrategy::Endurance),
        chassis: Some(Chassis {
            track_bar: Some(11.0),
            wedge: Some(2.5),
            cross_weight: Some(52.4),
        }),
    }
}

fn gt4_road() -> Setup {
    Setup {
        suspension: suspension(
            AxleSuspension::new(800.0, pair(55.0, 60.0), 6.0, 65.0)
                .with_alignment(-2.4, Some(5.8), 0.0),
            AxleSuspension::new(900.0, pair(50.0, 55.0), 5.0, 70.0)
                .with_alignment(-1.9, None, 0.1),
        ),
        aerodynamics: Some(Aerodynamics {
            rear_wing: Some(5.0),
            front_splitter: Some(2.0),
            ..Aerodynamics::default()
        }),
        differential: Some(differential(60.0, 55.0, 40.0)),
        brakes: Some(brakes(54.0, 75.0, Some((3.0, 2.0)), PadCompound::Medium)),
        tires: tires(24.5, 24.5, 24.0, 24.0, TireCompound::Medium),
        gearing: Some(Gearing::new(3.89, &[3.05, 2.12, 1.60, 1.27, 1.03, 0.86])),
        fuel: fuel(70.0, FuelStrategy::Balanced),
        chassis: None,
    }
}

fn gte_road() -> Setup {
    Setup {
        suspension: suspension(
            AxleSuspension::new(1050.0, pair(68.0, 72.0), 9.0, 52.0)
                .with_alignment(-3.0, Some(6.5), 0.1),
            AxleSuspension::new(1150.0, pair(62.0, 66.0), 7.0, 58.0)
                .with_alignment(-2.3, None, 0.2),
        ),
        aerodynamics: Some(Aerodynamics {
            front_wing: Some(5.0),
            rear_wing: Some(7.0),
            front_splitter: Some(3.0),
            ..Aerodynamics::default()
        }),
        differential: Some(differential(85.0, 70.0, 50.0)),
        brakes: Some(brakes(54.5, 82.0, Some((3.0, 3.0)), PadCompound::Medium)),
        tires: tires(23.5, 23.5, 23.0, 23.0, TireCompound::Medium),
        gearing: Some(Gearing::new(3.45, &[2.80, 2.02, 1.56, 1.27, 1.06, 0.91])),
        fuel: fuel(90.0, FuelStrategy::Endurance),
        chassis: None,
    }
}

fn prototype_road() -> Setup {
    Setup {
        suspension: suspension(
            AxleSuspension::new(1300.0, pair(72.0, 78.0), 12.0, 45.0)
                .with_alignment(-3.1, Some(7.5), -0.1),
            AxleSuspension::new(1400.0, pair(68.0, 74.0), 10.0, 55.0)
                .with_alignment(-2.0, None, 0.3),
        ),
        aerodynamics: Some(Aerodynamics {
            front_wing: Some(6.0),
            rear_wing: Some(9.0),
            front_splitter: Some(4.0),
            rear_diffuser: Some(5.0),
            rear_spoiler: None,
        }),
        differential: Some(Differential {
            ramp_angles: Some(RampAngles {
                power: 45.0,
                coast: 55.0,
            }),
            ..differential(70.0, 60.0, 40.0)
        }),
        brakes: Some(brakes(55.0, 88.0, Some((4.0, 3.0)), PadCompound::High)),
        tires: tires(22.5, 22.5, 22.0, 22.0, TireCompound::Medium),
        gearing: Some(Gearing::new(
            3.20,
            &[2.90, 2.15, 1.70, 1.40, 1.18, 1.02, 0.90],
        )),
        fuel: fuel(75.0, FuelStrategy::Endurance),
        chassis: None,
    }
}

fn touring_road() -> Setup {
    Setup {
        suspension: suspension(
            AxleSuspension::new(700.0, Damper::Scalar(55.0), 7.0, 70.0)
                .with_alignment(-3.5, Some(6.0), -0.1),
            AxleSuspension::new(650.0, Damper::Scalar(50.0), 4.0, 75.0)
                .with_alignment(-2.0, None, 0.1),
        ),
        aerodynamics: Some(Aerodynamics {
            rear_wing: Some(3.0),
            front_splitter: Some(1.0),
            ..Aerodynamics::default()
        }),
        differential: Some(differential(50.0, 45.0, 30.0)),
        brakes: Some(brakes(60.0, 78.0, Some((2.0, 2.0)), PadCompound::Medium)),
        tires: tires(26.0, 26.0, 25.0, 25.0, TireCompound::Medium),
        gearing: Some(Gearing::new(4.25, &[3.25, 2.20, 1.65, 1.32, 1.09, 0.92])),
        fuel: fuel(50.0, FuelStrategy::Sprint),
        chassis: None,
    }
}

fn dirt_oval() -> Setup {
    Setup {
        suspension: suspension(
            AxleSuspension::new(500.0, Damper::Scalar(40.0), 4.0, 90.0)
                .with_alignment(-1.0, Some(4.5), 0.0),
            AxleSuspension::new(450.0, Damper::Scalar(35.0), 2.0, 95.0)
                .with_alignment(0.0, None, 0.0),
        ),
        aerodynamics: None,
        differential: Some(differential(30.0, 40.0, 20.0)),
        brakes: Some(brakes(48.0, 70.0, None, PadCompound::Low)),
        tires: tires(20.0, 22.0, 19.5, 21.5, TireCompound::Hard),
        gearing: Some(Gearing::new(5.10, &[2.40, 1.60])),
        fuel: fuel(30.0, FuelStrategy::Sprint),
        chassis: Some(Chassis {
            track_bar: Some(9.0),
            wedge: Some(3.0),
            cross_weight: Some(53.0),
        }),
    }
}

fn rallycross() -> Setup {
    Setup {
        suspension: suspension(
            AxleSuspension::new(600.0, pair(45.0, 50.0), 5.0, 110.0)
                .with_alignment(-1.5, Some(5.0), 0.0),
            AxleSuspension::new(550.0, pair(40.0, 45.0), 3.0, 115.0)
                .with_alignment(-1.0, None, 0.1),
        ),
        aerodynamics: Some(Aerodynamics {
            rear_wing: Some(2.0),
            ..Aerodynamics::default()
        }),
        differential: Some(differential(90.0, 70.0, 50.0)),
        brakes: Some(brakes(58.0, 75.0, None, PadCompound::Medium)),
        tires: tires(27.0, 27.0, 26.0, 26.0, TireCompound::Soft),
        gearing: Some(Gearing::new(4.70, &[2.92, 2.05, 1.56, 1.24, 1.02])),
        fuel: fuel(35.0, FuelStrategy::Sprint),
        chassis: None,
    }
}
