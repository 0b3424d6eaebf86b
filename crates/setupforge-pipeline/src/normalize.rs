//! Normalizer: round every populated field to instrument precision
//!
//! Integer: spring rates, dampers, anti-roll bars, ride heights, aero,
//! differential locking and ramp angles, brake pressure and ducts, fuel,
//! track bar. One decimal: camber, caster, toe, brake balance, tire
//! pressures, wedge, cross-weight. Two decimals: final drive and gear
//! ratios.

use setupforge_model::Setup;

/// Round a setup in place.
pub fn normalize_in_place(setup: &mut Setup) {
    setup.visit_numeric_mut(|_, kind, value| *value = kind.precision().round(*value));
}

/// Round every populated field to its precision. Idempotent.
#[must_use]
pub fn normalize(mut setup: Setup) -> Setup {
    normalize_in_place(&mut setup);
    setup
}
