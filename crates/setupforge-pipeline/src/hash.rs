//! Setup fingerprints

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use setupforge_model::Setup;

/// Deterministic 64-bit hash over every populated field.
///
/// Numeric leaves hash by path and bit pattern, so `0.0` and `-0.0`
/// differ. The normalizer never produces `-0.0`.
///
/// Built on `DefaultHasher`, whose algorithm may change between Rust
/// releases. Fingerprints are stable within one build of the crate only;
/// do not persist them or compare them across binaries.
pub fn setup_fingerprint(setup: &Setup) -> u64 {
    let mut hasher = DefaultHasher::new();
    setup.visit_numeric(|path, _, value| {
        path.hash(&mut hasher);
        value.to_bits().hash(&mut hasher);
    });
    for (path, tag) in setup.tag_fields() {
        path.hash(&mut hasher);
        tag.hash(&mut hasher);
    }
    hasher.finish()
}

/// [`setup_fingerprint`] as 16 lowercase hex digits.
pub fn fingerprint_hex(setup: &Setup) -> String {
    format!("{:016x}", setup_fingerprint(setup))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::resolve;
    use setupforge_model::{TrackType, VehicleClass};

    #[test]
    fn test_same_setup_same_fingerprint() {
        let a = resolve(VehicleClass::Gt3, TrackType::Road).setup;
        let b = resolve(VehicleClass::Gt3, TrackType::Road).setup;
        assert_eq!(setup_fingerprint(&a), setup_fingerprint(&b));
    }

    #[test]
    fn test_fingerprint_agrees_across_threads() {
        let setup = resolve(VehicleClass::Nascar, TrackType::Oval).setup;
        let expected = fingerprint_hex(&setup);
        let from_thread = std::thread::scope(|s| s.spawn(|| fingerprint_hex(&setup)).join().ok());
        assert_eq!(from_thread, Some(expected));
    }

    #[test]
    fn test_value_change_changes_fingerprint() {
        let a = resolve(VehicleClass::Gt3, TrackType::Road).setup;
        let mut b = a.clone();
        b.offset_tire_pressures(0.1);
        assert_ne!(setup_fingerprint(&a), setup_fingerprint(&b));
    }

    #[test]
    fn test_hex_width() {
        let hex = fingerprint_hex(&Setup::default());
        assert_eq!(hex.len(), 16);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
