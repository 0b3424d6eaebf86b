//! Style modifier
//!
//! `safe` trades pace for stability: softer, higher, more open, more
//! downforce. `aggressive` does the opposite and adds class-specific
//! tweaks. `balanced` leaves the setup alone.

use setupforge_model::{Setup, Style, TrackType, VehicleClass, offset, offset_floored, scale};
use tracing::debug;

use crate::adaptation::WING_FLOOR;
use crate::normalize::normalize;

/// Minimum tire pressure after the aggressive reduction, psi.
pub const AGGRESSIVE_PRESSURE_FLOOR: f64 = 19.0;

/// Apply a style preset. The result is normalized.
#[must_use]
pub fn apply_style(
    mut setup: Setup,
    style: Style,
    vehicle_class: VehicleClass,
    track_type: TrackType,
) -> Setup {
    match style {
        Style::Safe => apply_safe(&mut setup),
        Style::Balanced => {}
        Style::Aggressive => apply_aggressive(&mut setup, vehicle_class, track_type),
    }
    debug!(style = %style, vehicle_class = %vehicle_class, "Applied style");
    normalize(setup)
}

fn apply_safe(setup: &mut Setup) {
    setup.scale_springs(0.88, 0.90);
    setup.scale_dampers(0.92);
    setup.scale_anti_roll_bars(0.85, 0.88);
    setup.offset_ride_heights(2.0, 2.0);
    setup.offset_camber(0.2, 0.1);

    if let Some(aero) = &mut setup.aerodynamics {
        offset(&mut aero.front_wing, 1.0);
        offset(&mut aero.rear_wing, 2.0);
        offset(&mut aero.front_splitter, 1.0);
        offset(&mut aero.rear_spoiler, 2.0);
    }
    if let Some(diff) = &mut setup.differential {
        scale(&mut diff.preload, 0.85);
        scale(&mut diff.power, 0.78);
        scale(&mut diff.coast, 0.75);
    }
    if let Some(brakes) = &mut setup.brakes {
        offset(&mut brakes.balance, 2.0);
        scale(&mut brakes.pressure, 0.95);
    }
    setup.offset_tire_pressures(0.5);
}

fn apply_aggressive(setup: &mut Setup, vehicle_class: VehicleClass, track_type: TrackType) {
    setup.scale_springs(1.12, 1.10);
    setup.scale_dampers(1.08);
    setup.scale_anti_roll_bars(1.15, 1.12);
    setup.offset_ride_heights(-2.0, -2.0);
    setup.offset_camber(-0.3, -0.2);

    if track_type.is_road()
        && let Some(aero) = &mut setup.aerodynamics
    {
        offset_floored(&mut aero.front_wing, -1.0, WING_FLOOR);
        offset_floored(&mut aero.rear_wing, -1.0, WING_FLOOR);
        offset_floored(&mut aero.front_splitter, -1.0, WING_FLOOR);
    }
    if let Some(diff) = &mut setup.differential {
        scale(&mut diff.preload, 1.12);
        scale(&mut diff.power, 1.18);
        scale(&mut diff.coast, 1.08);
    }
    if let Some(brakes) = &mut setup.brakes {
        offset(&mut brakes.balance, -1.0);
        scale(&mut brakes.pressure, 1.03);
    }
    setup.map_tire_pressures(|_, p| (p - 0.8).max(AGGRESSIVE_PRESSURE_FLOOR));

    match vehicle_class {
        // Extra rake.
        VehicleClass::Gt3 => setup.offset_ride_heights(-3.0, 0.0),
        VehicleClass::Formula => {
            if let Some(aero) = &mut setup.aerodynamics {
                offset(&mut aero.front_wing, 1.0);
                offset(&mut aero.rear_wing, 1.0);
            }
        }
        _ => {}
    }
}
