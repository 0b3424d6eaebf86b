//! Session modifier

use setupforge_model::{SessionType, Setup, offset, offset_floored};
use tracing::debug;

use crate::normalize::normalize;

/// Qualifying runs on a light tank, but never below this many liters.
pub const QUALIFYING_FUEL_FLOOR: f64 = 20.0;
const QUALIFYING_FUEL_CUT: f64 = 30.0;

/// Apply session-specific deltas. The result is normalized.
///
/// Qualifying adds wing and lightens the fuel load; race raises tire
/// pressures slightly for pressure build-up over a stint; practice is
/// unchanged.
#[must_use]
pub fn apply_session(mut setup: Setup, session: SessionType) -> Setup {
    match session {
        SessionType::Qualifying => {
            if let Some(aero) = &mut setup.aerodynamics {
                offset(&mut aero.front_wing, 1.0);
                offset(&mut aero.rear_wing, 2.0);
            }
            if let Some(fuel) = &mut setup.fuel {
                offset_floored(&mut fuel.amount, -QUALIFYING_FUEL_CUT, QUALIFYING_FUEL_FLOOR);
            }
        }
        SessionType::Race => setup.offset_tire_pressures(0.2),
        SessionType::Practice => {}
    }
    debug!(session = %session, "Applied session modifier");
    normalize(setup)
}
