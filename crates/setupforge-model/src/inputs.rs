//! Generation inputs: track characteristics, conditions, style and session.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use setupforge_errors::ValidationError;

use crate::classes::expected_list;

/// Three-step level shared by grip, downforce importance and wear ratings.
macro_rules! level_enum {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            Low,
            #[default]
            #[serde(alias = "medium")]
            Normal,
            High,
        }

        impl $name {
            pub const ALL: [$name; 3] = [$name::Low, $name::Normal, $name::High];

            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $name::Low => "low",
                    $name::Normal => "normal",
                    $name::High => "high",
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    "low" => Ok($name::Low),
                    "normal" | "medium" => Ok($name::Normal),
                    "high" => Ok($name::High),
                    _ => Err(ValidationError::invalid_enum($field, s, expected_list(&Self::ALL))),
                }
            }
        }
    };
}

level_enum!(
    /// Surface grip of a track.
    GripLevel,
    "grip_level"
);
level_enum!(
    /// How much lap time a track rewards downforce with.
    DownforceImportance,
    "downforce_importance"
);
level_enum!(
    /// Brake or tire wear rating of a track.
    WearLevel,
    "wear"
);

/// Physical description of a track. Every field is optional; an absent
/// field simply disables the rules keyed on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackCharacteristics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "elevation_change")]
    pub elevation_change_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "banking_max")]
    pub banking_max_deg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grip_level: Option<GripLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downforce_importance: Option<DownforceImportance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brake_wear: Option<WearLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tire_wear: Option<WearLevel>,
}

impl TrackCharacteristics {
    /// Reject non-finite measurements and non-positive lengths.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let measurements = [
            ("length_km", self.length_km),
            ("elevation_change_m", self.elevation_change_m),
            ("banking_max_deg", self.banking_max_deg),
        ];
        for (field, value) in measurements {
            if let Some(value) = value
                && !value.is_finite()
            {
                return Err(ValidationError::non_finite(field));
            }
        }
        if let Some(length) = self.length_km
            && length <= 0.0
        {
            return Err(ValidationError::constraint(format!(
                "length_km must be positive, got {length}"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    #[default]
    Clear,
    Rain,
    Wet,
}

impl Weather {
    pub const ALL: [Weather; 3] = [Weather::Clear, Weather::Rain, Weather::Wet];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Weather::Clear => "clear",
            Weather::Rain => "rain",
            Weather::Wet => "wet",
        }
    }

    /// Rain and a drying wet track both call for the wet-weather rules.
    #[must_use]
    pub fn is_wet(self) -> bool {
        matches!(self, Weather::Rain | Weather::Wet)
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weather {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clear" | "dry" => Ok(Weather::Clear),
            "rain" => Ok(Weather::Rain),
            "wet" => Ok(Weather::Wet),
            _ => Err(ValidationError::invalid_enum(
                "weather",
                s,
                expected_list(&Self::ALL),
            )),
        }
    }
}

/// Session weather and ambient temperature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Conditions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<Weather>,
    /// Ambient temperature, degrees Celsius.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "temperature")]
    pub temperature_c: Option<f64>,
}

impl Conditions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.temperature_c {
            Some(t) if !t.is_finite() => Err(ValidationError::non_finite("temperature_c")),
            Some(t) if !(-50.0..=70.0).contains(&t) => Err(ValidationError::out_of_range(
                "temperature_c",
                t,
                -50.0,
                70.0,
            )),
            _ => Ok(()),
        }
    }
}

/// Aggressiveness preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Safe,
    #[default]
    Balanced,
    Aggressive,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Safe, Style::Balanced, Style::Aggressive];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Style::Safe => "safe",
            Style::Balanced => "balanced",
            Style::Aggressive => "aggressive",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::invalid_enum("style", s, expected_list(&Self::ALL)))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    #[default]
    Practice,
    Qualifying,
    Race,
}

impl SessionType {
    pub const ALL: [SessionType; 3] = [
        SessionType::Practice,
        SessionType::Qualifying,
        SessionType::Race,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SessionType::Practice => "practice",
            SessionType::Qualifying => "qualifying",
            SessionType::Race => "race",
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|session| session.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::invalid_enum("session_type", s, expected_list(&Self::ALL))
            })
    }
}
