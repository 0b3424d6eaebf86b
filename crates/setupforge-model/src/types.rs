//! Setup type definitions
//!
//! A [`Setup`] is a record of optional subsystems. Which subsystems and
//! fields are populated (its *shape*) is decided by the template a setup
//! starts from; adjustment stages mutate populated fields only.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete numeric configuration of a car's adjustable systems.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Setup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspension: Option<Suspension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aerodynamics: Option<Aerodynamics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub differential: Option<Differential>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brakes: Option<Brakes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tires: Option<Tires>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gearing: Option<Gearing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel: Option<Fuel>,
    /// Oval and dirt chassis balance (track bar, wedge, cross-weight).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chassis: Option<Chassis>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Suspension {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front: Option<AxleSuspension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rear: Option<AxleSuspension>,
}

/// Per-axle suspension settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AxleSuspension {
    /// Spring rate, N/mm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spring: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damper: Option<Damper>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anti_roll_bar: Option<f64>,
    /// Ride height, mm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ride_height: Option<f64>,
    /// Camber, degrees (negative leans the top of the tire inward).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camber: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caster: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toe: Option<f64>,
}

impl AxleSuspension {
    pub fn new(spring: f64, damper: Damper, anti_roll_bar: f64, ride_height: f64) -> Self {
        Self {
            spring: Some(spring),
            damper: Some(damper),
            anti_roll_bar: Some(anti_roll_bar),
            ride_height: Some(ride_height),
            ..Self::default()
        }
    }

    pub fn with_alignment(mut self, camber: f64, caster: Option<f64>, toe: f64) -> Self {
        self.camber = Some(camber);
        self.caster = caster;
        self.toe = Some(toe);
        self
    }
}

/// Damper setting: a single click value, or independent bump and rebound.
///
/// Serialized untagged, so JSON is either `65` or `{"bump": 65, "rebound": 70}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Damper {
    BumpRebound { bump: f64, rebound: f64 },
    Scalar(f64),
}

impl Damper {
    /// Apply `f` to every value the damper carries.
    #[must_use]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        match self {
            Damper::Scalar(v) => Damper::Scalar(f(v)),
            Damper::BumpRebound { bump, rebound } => Damper::BumpRebound {
                bump: f(bump),
                rebound: f(rebound),
            },
        }
    }

    /// Scale bump and rebound independently by the same factor.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        self.map(|v| v * factor)
    }

    /// Round to whole clicks.
    #[must_use]
    pub fn rounded(self) -> Self {
        self.map(crate::Precision::Integer.rounder())
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Damper::BumpRebound { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Aerodynamics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_wing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rear_wing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_splitter: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rear_diffuser: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rear_spoiler: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Differential {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preload: Option<f64>,
    /// Locking under power, percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<f64>,
    /// Locking on coast, percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coast: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ramp_angles: Option<RampAngles>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RampAngles {
    pub power: f64,
    pub coast: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Brakes {
    /// Front bias, percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ducts: Option<BrakeDucts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pad_compound: Option<PadCompound>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BrakeDucts {
    pub front: f64,
    pub rear: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PadCompound {
    Low,
    Medium,
    High,
}

impl PadCompound {
    pub fn as_str(self) -> &'static str {
        match self {
            PadCompound::Low => "low",
            PadCompound::Medium => "medium",
            PadCompound::High => "high",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Tires {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<TirePressures>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compound: Option<TireCompound>,
}

/// Cold tire pressures per corner, psi.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TirePressures {
    pub fl: f64,
    pub fr: f64,
    pub rl: f64,
    pub rr: f64,
}

impl TirePressures {
    pub fn new(fl: f64, fr: f64, rl: f64, rr: f64) -> Self {
        Self { fl, fr, rl, rr }
    }

    /// Corners in fl, fr, rl, rr order.
    pub fn corners(&self) -> [(Corner, f64); 4] {
        [
            (Corner::FrontLeft, self.fl),
            (Corner::FrontRight, self.fr),
            (Corner::RearLeft, self.rl),
            (Corner::RearRight, self.rr),
        ]
    }

    pub fn get_mut(&mut self, corner: Corner) -> &mut f64 {
        match corner {
            Corner::FrontLeft => &mut self.fl,
            Corner::FrontRight => &mut self.fr,
            Corner::RearLeft => &mut self.rl,
            Corner::RearRight => &mut self.rr,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    FrontLeft,
    FrontRight,
    RearLeft,
    RearRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::FrontLeft,
        Corner::FrontRight,
        Corner::RearLeft,
        Corner::RearRight,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Corner::FrontLeft => "fl",
            Corner::FrontRight => "fr",
            Corner::RearLeft => "rl",
            Corner::RearRight => "rr",
        }
    }

    /// Right-side corners carry the load on a left-turning oval.
    pub fn is_right_side(self) -> bool {
        matches!(self, Corner::FrontRight | Corner::RearRight)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TireCompound {
    Soft,
    Medium,
    Hard,
    Wet,
}

impl TireCompound {
    pub fn as_str(self) -> &'static str {
        match self {
            TireCompound::Soft => "soft",
            TireCompound::Medium => "medium",
            TireCompound::Hard => "hard",
            TireCompound::Wet => "wet",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Gearing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_drive: Option<f64>,
    /// Gear ratios keyed by gear number.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub ratios: BTreeMap<u8, f64>,
}

impl Gearing {
    /// Build gearing from ratios listed from first gear upward.
    pub fn new(final_drive: f64, ratios: &[f64]) -> Self {
        Self {
            final_drive: Some(final_drive),
            ratios: (1u8..).zip(ratios.iter().copied()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Fuel {
    /// Fuel load, liters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<FuelStrategy>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelStrategy {
    Sprint,
    Balanced,
    Endurance,
}

impl FuelStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            FuelStrategy::Sprint => "sprint",
            FuelStrategy::Balanced => "balanced",
            FuelStrategy::Endurance => "endurance",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Chassis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_bar: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wedge: Option<f64>,
    /// Cross-weight, percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_weight: Option<f64>,
}
