//! Catalog error types.

use crate::common::ErrorSeverity;

/// Errors raised by the car/track catalog.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// No car with the requested id
    #[error("Car not found: {0}")]
    CarNotFound(u32),

    /// No track with the requested id
    #[error("Track not found: {0}")]
    TrackNotFound(u32),

    /// Embedded catalog data failed to parse
    #[error("Failed to parse catalog: {0}")]
    Parse(String),
}

impl CatalogError {
    /// Get the error severity.
    ///
    /// A parse failure means the embedded data shipped broken.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CatalogError::CarNotFound(_) | CatalogError::TrackNotFound(_) => ErrorSeverity::Error,
            CatalogError::Parse(_) => ErrorSeverity::Critical,
        }
    }

    /// Whether the error is a missing entry rather than broken data.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::CarNotFound(_) | CatalogError::TrackNotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_severity() {
        assert_eq!(CatalogError::CarNotFound(1).severity(), ErrorSeverity::Error);
        assert!(CatalogError::TrackNotFound(7).is_not_found());
    }

    #[test]
    fn test_parse_is_critical() {
        let err = CatalogError::Parse("bad yaml".to_string());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(!err.is_not_found());
    }
}
