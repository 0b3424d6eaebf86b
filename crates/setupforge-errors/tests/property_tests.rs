//! Property-based tests for error messages and classification.

use proptest::prelude::*;
use setupforge_errors::{
    CatalogError, ErrorCategory, ErrorSeverity, SetupForgeError, ValidationError,
};

proptest! {
    #[test]
    fn test_invalid_enum_mentions_value(field in "[a-z_]{1,16}", value in "[a-zA-Z0-9]{1,16}") {
        let err = ValidationError::invalid_enum(&field, &value, "a, b");
        let msg = err.to_string();
        prop_assert!(msg.contains(&field));
        prop_assert!(msg.contains(&value));
        prop_assert_eq!(err.field(), Some(field.as_str()));
    }

    #[test]
    fn test_validation_always_categorized(field in "[a-z_.]{1,24}") {
        let err: SetupForgeError = ValidationError::required(field).into();
        prop_assert_eq!(err.category(), ErrorCategory::Validation);
        prop_assert_eq!(err.severity(), ErrorSeverity::Error);
    }

    #[test]
    fn test_catalog_ids_in_message(id in any::<u32>()) {
        let car = CatalogError::CarNotFound(id).to_string();
        let track = CatalogError::TrackNotFound(id).to_string();
        let id_text = id.to_string();
        prop_assert!(car.contains(&id_text));
        prop_assert!(track.contains(&id_text));
    }

    #[test]
    fn test_lookup_misses_are_not_found(id in any::<u32>(), car in any::<bool>()) {
        let err: SetupForgeError = if car {
            CatalogError::CarNotFound(id).into()
        } else {
            CatalogError::TrackNotFound(id).into()
        };
        prop_assert_eq!(err.category(), ErrorCategory::NotFound);
        prop_assert!(err.to_string().contains(&id.to_string()));
    }
}
