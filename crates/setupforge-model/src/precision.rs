//! Instrument precision for setup quantities
//!
//! Every numeric field in a [`Setup`](crate::Setup) belongs to a
//! [`FieldKind`], and every kind has a fixed display and rounding
//! precision.

use core::fmt;

/// Number of decimal places a quantity is adjusted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// Whole clicks, N/mm, mm, percent.
    Integer,
    /// One decimal place.
    Tenths,
    /// Two decimal places.
    Hundredths,
}

impl Precision {
    #[must_use]
    pub fn decimals(self) -> usize {
        match self {
            Precision::Integer => 0,
            Precision::Tenths => 1,
            Precision::Hundredths => 2,
        }
    }

    /// Round half away from zero to this precision.
    ///
    /// Negative zero is canonicalized to positive zero so that rounding
    /// small negative values yields bit-identical output.
    #[must_use]
    pub fn round(self, value: f64) -> f64 {
        let rounded = match self {
            Precision::Integer => value.round(),
            Precision::Tenths => (value * 10.0).round() / 10.0,
            Precision::Hundredths => (value * 100.0).round() / 100.0,
        };
        rounded + 0.0
    }

    /// Rounding as a closure, for use with [`Damper::map`](crate::Damper::map).
    pub fn rounder(self) -> impl Fn(f64) -> f64 {
        move |value| self.round(value)
    }

    /// Format a value with exactly this many decimals.
    #[must_use]
    pub fn format(self, value: f64) -> String {
        format!("{:.*}", self.decimals(), value)
    }
}

/// Physical quantity class of a numeric setup field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    SpringRate,
    Damper,
    AntiRollBar,
    RideHeight,
    Camber,
    Caster,
    Toe,
    Aero,
    DiffLock,
    RampAngle,
    BrakeBalance,
    BrakePressure,
    BrakeDuct,
    TirePressure,
    FinalDrive,
    GearRatio,
    FuelAmount,
    TrackBar,
    Wedge,
    CrossWeight,
}

impl FieldKind {
    #[must_use]
    pub fn precision(self) -> Precision {
        match self {
            FieldKind::SpringRate
            | FieldKind::Damper
            | FieldKind::AntiRollBar
            | FieldKind::RideHeight
            | FieldKind::Aero
            | FieldKind::DiffLock
            | FieldKind::RampAngle
            | FieldKind::BrakePressure
            | FieldKind::BrakeDuct
            | FieldKind::FuelAmount
            | FieldKind::TrackBar => Precision::Integer,
            FieldKind::Camber
            | FieldKind::Caster
            | FieldKind::Toe
            | FieldKind::BrakeBalance
            | FieldKind::TirePressure
            | FieldKind::Wedge
            | FieldKind::CrossWeight => Precision::Tenths,
            FieldKind::FinalDrive | FieldKind::GearRatio => Precision::Hundredths,
        }
    }

    /// Display unit, empty for unitless quantities.
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            FieldKind::SpringRate => "N/mm",
            FieldKind::RideHeight => "mm",
            FieldKind::Camber | FieldKind::Caster | FieldKind::Toe | FieldKind::RampAngle => "deg",
            FieldKind::DiffLock
            | FieldKind::BrakeBalance
            | FieldKind::BrakePressure
            | FieldKind::CrossWeight => "%",
            FieldKind::TirePressure => "psi",
            FieldKind::FuelAmount => "L",
            FieldKind::Wedge => "turns",
            FieldKind::Damper
            | FieldKind::AntiRollBar
            | FieldKind::Aero
            | FieldKind::BrakeDuct
            | FieldKind::FinalDrive
            | FieldKind::GearRatio
            | FieldKind::TrackBar => "",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} dp", self.decimals())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_rounds_half_away_from_zero() {
        assert_eq!(Precision::Integer.round(835.5), 836.0);
        assert_eq!(Precision::Integer.round(-2.5), -3.0);
    }

    #[test]
    fn test_tenths() {
        assert_eq!(Precision::Tenths.round(53.2 + 2.0), 55.2);
        assert_eq!(Precision::Tenths.round(22.5 - 1.5), 21.0);
    }

    #[test]
    fn test_hundredths() {
        assert_eq!(Precision::Hundredths.round(3.7349), 3.73);
        assert_eq!(Precision::Hundredths.round(2.855), 2.86);
    }

    #[test]
    fn test_negative_zero_is_canonical() {
        let rounded = Precision::Tenths.round(-0.04);
        assert_eq!(rounded.to_bits(), 0.0_f64.to_bits());
    }

    #[test]
    fn test_format_uses_fixed_decimals() {
        assert_eq!(Precision::Integer.format(950.0), "950");
        assert_eq!(Precision::Tenths.format(23.0), "23.0");
        assert_eq!(Precision::Hundredths.format(3.7), "3.70");
    }

    #[test]
    fn test_kind_precision_table() {
        assert_eq!(FieldKind::SpringRate.precision(), Precision::Integer);
        assert_eq!(FieldKind::TirePressure.precision(), Precision::Tenths);
        assert_eq!(FieldKind::GearRatio.precision(), Precision::Hundredths);
        assert_eq!(FieldKind::Wedge.precision(), Precision::Tenths);
    }
}
