//! Vehicle class and track type identifiers
//!
//! Both parse from case-insensitive ids with a handful of aliases taken
//! from how cars and tracks are labelled in the sim's own catalog.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use setupforge_errors::ValidationError;

/// Vehicle category used to pick a baseline template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VehicleClass {
    #[serde(rename = "GT3")]
    Gt3,
    #[serde(rename = "GT4")]
    Gt4,
    #[serde(rename = "GTE")]
    Gte,
    Formula,
    #[serde(rename = "NASCAR")]
    Nascar,
    Prototype,
    Touring,
    DirtOval,
    Rallycross,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 9] = [
        VehicleClass::Gt3,
        VehicleClass::Gt4,
        VehicleClass::Gte,
        VehicleClass::Formula,
        VehicleClass::Nascar,
        VehicleClass::Prototype,
        VehicleClass::Touring,
        VehicleClass::DirtOval,
        VehicleClass::Rallycross,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleClass::Gt3 => "GT3",
            VehicleClass::Gt4 => "GT4",
            VehicleClass::Gte => "GTE",
            VehicleClass::Formula => "Formula",
            VehicleClass::Nascar => "NASCAR",
            VehicleClass::Prototype => "Prototype",
            VehicleClass::Touring => "Touring",
            VehicleClass::DirtOval => "DirtOval",
            VehicleClass::Rallycross => "Rallycross",
        }
    }

    /// Parse a class id, accepting common aliases. Returns `None` for
    /// anything unrecognized.
    pub fn from_id(id: &str) -> Option<Self> {
        let normalized = id.trim().to_ascii_lowercase();
        let class = match normalized.as_str() {
            "gt3" => VehicleClass::Gt3,
            "gt4" => VehicleClass::Gt4,
            "gte" | "gtlm" => VehicleClass::Gte,
            "formula" | "formula 1" | "f1" | "indycar" | "open wheel" => VehicleClass::Formula,
            "nascar" | "stock car" | "stockcar" | "cup" => VehicleClass::Nascar,
            "prototype" | "lmdh" | "lmh" | "gtp" | "lmp1" | "lmp2" | "lmp3" => {
                VehicleClass::Prototype
            }
            "touring" | "tcr" | "supercars" => VehicleClass::Touring,
            "dirtoval" | "dirt oval" | "dirt" => VehicleClass::DirtOval,
            "rallycross" | "rx" => VehicleClass::Rallycross,
            _ => return None,
        };
        Some(class)
    }

    /// Classes with well-tuned templates; they raise generation confidence.
    #[must_use]
    pub fn is_popular(self) -> bool {
        matches!(
            self,
            VehicleClass::Gt3 | VehicleClass::Formula | VehicleClass::Nascar
        )
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleClass {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| {
            ValidationError::invalid_enum("vehicle_class", s, expected_list(&Self::ALL))
        })
    }
}

/// Kind of circuit a setup targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackType {
    Road,
    Oval,
    Dirt,
    Rallycross,
}

impl TrackType {
    pub const ALL: [TrackType; 4] = [
        TrackType::Road,
        TrackType::Oval,
        TrackType::Dirt,
        TrackType::Rallycross,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TrackType::Road => "road",
            TrackType::Oval => "oval",
            TrackType::Dirt => "dirt",
            TrackType::Rallycross => "rallycross",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        let normalized = id.trim().to_ascii_lowercase();
        let track_type = match normalized.as_str() {
            "road" | "road course" | "street" => TrackType::Road,
            "oval" | "short oval" | "superspeedway" => TrackType::Oval,
            "dirt" | "dirt oval" | "dirt track" => TrackType::Dirt,
            "rallycross" | "rx" => TrackType::Rallycross,
            _ => return None,
        };
        Some(track_type)
    }

    #[must_use]
    pub fn is_road(self) -> bool {
        self == TrackType::Road
    }

    #[must_use]
    pub fn is_oval(self) -> bool {
        self == TrackType::Oval
    }
}

impl fmt::Display for TrackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrackType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s)
            .ok_or_else(|| ValidationError::invalid_enum("track_type", s, expected_list(&Self::ALL)))
    }
}

pub(crate) fn expected_list<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
