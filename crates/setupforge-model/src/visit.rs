//! Field traversal over a [`Setup`]
//!
//! Traversal order is fixed: suspension (front, rear), aerodynamics,
//! differential, brakes, tires, gearing, fuel, chassis. Absent
//! subsystems and fields are skipped. Paths use the camelCase names the
//! setup serializes with, joined by dots (`suspension.front.damper.bump`).

use std::collections::BTreeSet;

use crate::precision::FieldKind;
use crate::types::{AxleSuspension, Damper, Setup};

/// A populated numeric leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericField {
    pub path: String,
    pub kind: FieldKind,
    pub value: f64,
}

struct AxlePaths {
    spring: &'static str,
    damper: &'static str,
    bump: &'static str,
    rebound: &'static str,
    anti_roll_bar: &'static str,
    ride_height: &'static str,
    camber: &'static str,
    caster: &'static str,
    toe: &'static str,
}

const FRONT: AxlePaths = AxlePaths {
    spring: "suspension.front.spring",
    damper: "suspension.front.damper",
    bump: "suspension.front.damper.bump",
    rebound: "suspension.front.damper.rebound",
    anti_roll_bar: "suspension.front.antiRollBar",
    ride_height: "suspension.front.rideHeight",
    camber: "suspension.front.camber",
    caster: "suspension.front.caster",
    toe: "suspension.front.toe",
};

const REAR: AxlePaths = AxlePaths {
    spring: "suspension.rear.spring",
    damper: "suspension.rear.damper",
    bump: "suspension.rear.damper.bump",
    rebound: "suspension.rear.damper.rebound",
    anti_roll_bar: "suspension.rear.antiRollBar",
    ride_height: "suspension.rear.rideHeight",
    camber: "suspension.rear.camber",
    caster: "suspension.rear.caster",
    toe: "suspension.rear.toe",
};

type Visitor<'a> = &'a mut dyn FnMut(&str, FieldKind, f64);
type VisitorMut<'a> = &'a mut dyn FnMut(&str, FieldKind, &mut f64);

impl Setup {
    /// Call `f` with every populated numeric leaf.
    pub fn visit_numeric(&self, mut f: impl FnMut(&str, FieldKind, f64)) {
        let f: Visitor<'_> = &mut f;

        if let Some(suspension) = &self.suspension {
            if let Some(axle) = &suspension.front {
                visit_axle(axle, &FRONT, f);
            }
            if let Some(axle) = &suspension.rear {
                visit_axle(axle, &REAR, f);
            }
        }
        if let Some(aero) = &self.aerodynamics {
            leaf(f, "aerodynamics.frontWing", FieldKind::Aero, aero.front_wing);
            leaf(f, "aerodynamics.rearWing", FieldKind::Aero, aero.rear_wing);
            leaf(f, "aerodynamics.frontSplitter", FieldKind::Aero, aero.front_splitter);
            leaf(f, "aerodynamics.rearDiffuser", FieldKind::Aero, aero.rear_diffuser);
            leaf(f, "aerodynamics.rearSpoiler", FieldKind::Aero, aero.rear_spoiler);
        }
        if let Some(diff) = &self.differential {
            leaf(f, "differential.preload", FieldKind::DiffLock, diff.preload);
            leaf(f, "differential.power", FieldKind::DiffLock, diff.power);
            leaf(f, "differential.coast", FieldKind::DiffLock, diff.coast);
            if let Some(ramps) = &diff.ramp_angles {
                f("differential.rampAngles.power", FieldKind::RampAngle, ramps.power);
                f("differential.rampAngles.coast", FieldKind::RampAngle, ramps.coast);
            }
        }
        if let Some(brakes) = &self.brakes {
            leaf(f, "brakes.balance", FieldKind::BrakeBalance, brakes.balance);
            leaf(f, "brakes.pressure", FieldKind::BrakePressure, brakes.pressure);
            if let Some(ducts) = &brakes.ducts {
                f("brakes.ducts.front", FieldKind::BrakeDuct, ducts.front);
                f("brakes.ducts.rear", FieldKind::BrakeDuct, ducts.rear);
            }
        }
        if let Some(pressure) = self.tires.as_ref().and_then(|t| t.pressure.as_ref()) {
            f("tires.pressure.fl", FieldKind::TirePressure, pressure.fl);
            f("tires.pressure.fr", FieldKind::TirePressure, pressure.fr);
            f("tires.pressure.rl", FieldKind::TirePressure, pressure.rl);
            f("tires.pressure.rr", FieldKind::TirePressure, pressure.rr);
        }
        if let Some(gearing) = &self.gearing {
            leaf(f, "gearing.finalDrive", FieldKind::FinalDrive, gearing.final_drive);
            for (gear, ratio) in &gearing.ratios {
                f(&format!("gearing.ratios.{gear}"), FieldKind::GearRatio, *ratio);
            }
        }
        if let Some(fuel) = &self.fuel {
            leaf(f, "fuel.amount", FieldKind::FuelAmount, fuel.amount);
        }
        if let Some(chassis) = &self.chassis {
            leaf(f, "chassis.trackBar", FieldKind::TrackBar, chassis.track_bar);
            leaf(f, "chassis.wedge", FieldKind::Wedge, chassis.wedge);
            leaf(f, "chassis.crossWeight", FieldKind::CrossWeight, chassis.cross_weight);
        }
    }

    /// Call `f` with a mutable reference to every populated numeric leaf,
    /// in the same order as [`Setup::visit_numeric`].
    pub fn visit_numeric_mut(&mut self, mut f: impl FnMut(&str, FieldKind, &mut f64)) {
        let f: VisitorMut<'_> = &mut f;

        if let Some(suspension) = &mut self.suspension {
            if let Some(axle) = &mut suspension.front {
                visit_axle_mut(axle, &FRONT, f);
            }
            if let Some(axle) = &mut suspension.rear {
                visit_axle_mut(axle, &REAR, f);
            }
        }
        if let Some(aero) = &mut self.aerodynamics {
            leaf_mut(f, "aerodynamics.frontWing", FieldKind::Aero, &mut aero.front_wing);
            leaf_mut(f, "aerodynamics.rearWing", FieldKind::Aero, &mut aero.rear_wing);
            leaf_mut(f, "aerodynamics.frontSplitter", FieldKind::Aero, &mut aero.front_splitter);
            leaf_mut(f, "aerodynamics.rearDiffuser", FieldKind::Aero, &mut aero.rear_diffuser);
            leaf_mut(f, "aerodynamics.rearSpoiler", FieldKind::Aero, &mut aero.rear_spoiler);
        }
        if let Some(diff) = &mut self.differential {
            leaf_mut(f, "differential.preload", FieldKind::DiffLock, &mut diff.preload);
            leaf_mut(f, "differential.power", FieldKind::DiffLock, &mut diff.power);
            leaf_mut(f, "differential.coast", FieldKind::DiffLock, &mut diff.coast);
            if let Some(ramps) = &mut diff.ramp_angles {
                f("differential.rampAngles.power", FieldKind::RampAngle, &mut ramps.power);
                f("differential.rampAngles.coast", FieldKind::RampAngle, &mut ramps.coast);
            }
        }
        if let Some(brakes) = &mut self.brakes {
            leaf_mut(f, "brakes.balance", FieldKind::BrakeBalance, &mut brakes.balance);
            leaf_mut(f, "brakes.pressure", FieldKind::BrakePressure, &mut brakes.pressure);
            if let Some(ducts) = &mut brakes.ducts {
                f("brakes.ducts.front", FieldKind::BrakeDuct, &mut ducts.front);
                f("brakes.ducts.rear", FieldKind::BrakeDuct, &mut ducts.rear);
            }
        }
        if let Some(pressure) = self.tires.as_mut().and_then(|t| t.pressure.as_mut()) {
            f("tires.pressure.fl", FieldKind::TirePressure, &mut pressure.fl);
            f("tires.pressure.fr", FieldKind::TirePressure, &mut pressure.fr);
            f("tires.pressure.rl", FieldKind::TirePressure, &mut pressure.rl);
            f("tires.pressure.rr", FieldKind::TirePressure, &mut pressure.rr);
        }
        if let Some(gearing) = &mut self.gearing {
            leaf_mut(f, "gearing.finalDrive", FieldKind::FinalDrive, &mut gearing.final_drive);
            for (gear, ratio) in &mut gearing.ratios {
                f(&format!("gearing.ratios.{gear}"), FieldKind::GearRatio, ratio);
            }
        }
        if let Some(fuel) = &mut self.fuel {
            leaf_mut(f, "fuel.amount", FieldKind::FuelAmount, &mut fuel.amount);
        }
        if let Some(chassis) = &mut self.chassis {
            leaf_mut(f, "chassis.trackBar", FieldKind::TrackBar, &mut chassis.track_bar);
            leaf_mut(f, "chassis.wedge", FieldKind::Wedge, &mut chassis.wedge);
            leaf_mut(f, "chassis.crossWeight", FieldKind::CrossWeight, &mut chassis.cross_weight);
        }
    }

    /// Every populated numeric leaf, in traversal order.
    pub fn numeric_fields(&self) -> Vec<NumericField> {
        let mut fields = Vec::new();
        self.visit_numeric(|path, kind, value| {
            fields.push(NumericField {
                path: path.to_string(),
                kind,
                value,
            });
        });
        fields
    }

    /// Populated non-numeric fields as `(path, value)` pairs.
    pub fn tag_fields(&self) -> Vec<(&'static str, &'static str)> {
        let mut tags = Vec::new();
        if let Some(pad) = self.brakes.as_ref().and_then(|b| b.pad_compound) {
            tags.push(("brakes.padCompound", pad.as_str()));
        }
        if let Some(compound) = self.tires.as_ref().and_then(|t| t.compound) {
            tags.push(("tires.compound", compound.as_str()));
        }
        if let Some(strategy) = self.fuel.as_ref().and_then(|f| f.strategy) {
            tags.push(("fuel.strategy", strategy.as_str()));
        }
        tags
    }

    /// The setup's shape: every populated leaf path, numeric and tag.
    pub fn field_paths(&self) -> BTreeSet<String> {
        let mut paths: BTreeSet<String> = BTreeSet::new();
        self.visit_numeric(|path, _, _| {
            paths.insert(path.to_string());
        });
        paths.extend(self.tag_fields().into_iter().map(|(path, _)| path.to_string()));
        paths
    }
}

fn leaf(f: Visitor<'_>, path: &str, kind: FieldKind, value: Option<f64>) {
    if let Some(value) = value {
        f(path, kind, value);
    }
}

fn leaf_mut(f: VisitorMut<'_>, path: &str, kind: FieldKind, value: &mut Option<f64>) {
    if let Some(value) = value {
        f(path, kind, value);
    }
}

fn visit_axle(axle: &AxleSuspension, paths: &AxlePaths, f: Visitor<'_>) {
    leaf(f, paths.spring, FieldKind::SpringRate, axle.spring);
    match axle.damper {
        Some(Damper::Scalar(value)) => f(paths.damper, FieldKind::Damper, value),
        Some(Damper::BumpRebound { bump, rebound }) => {
            f(paths.bump, FieldKind::Damper, bump);
            f(paths.rebound, FieldKind::Damper, rebound);
        }
        None => {}
    }
    leaf(f, paths.anti_roll_bar, FieldKind::AntiRollBar, axle.anti_roll_bar);
    leaf(f, paths.ride_height, FieldKind::RideHeight, axle.ride_height);
    leaf(f, paths.camber, FieldKind::Camber, axle.camber);
    leaf(f, paths.caster, FieldKind::Caster, axle.caster);
    leaf(f, paths.toe, FieldKind::Toe, axle.toe);
}

fn visit_axle_mut(axle: &mut AxleSuspension, paths: &AxlePaths, f: VisitorMut<'_>) {
    leaf_mut(f, paths.spring, FieldKind::SpringRate, &mut axle.spring);
    match &mut axle.damper {
        Some(Damper::Scalar(value)) => f(paths.damper, FieldKind::Damper, value),
        Some(Damper::BumpRebound { bump, rebound }) => {
            f(paths.bump, FieldKind::Damper, bump);
            f(paths.rebound, FieldKind::Damper, rebound);
        }
        None => {}
    }
    leaf_mut(f, paths.anti_roll_bar, FieldKind::AntiRollBar, &mut axle.anti_roll_bar);
    leaf_mut(f, paths.ride_height, FieldKind::RideHeight, &mut axle.ride_height);
    leaf_mut(f, paths.camber, FieldKind::Camber, &mut axle.camber);
    leaf_mut(f, paths.caster, FieldKind::Caster, &mut axle.caster);
    leaf_mut(f, paths.toe, FieldKind::Toe, &mut axle.toe);
}
