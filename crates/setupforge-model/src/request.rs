//! Generation requests
//!
//! [`GenerationRequest`] is the loosely-typed form a caller sends: class and
//! track type ids as strings, style and session as optional strings.
//! [`GenerationRequest::validate`] checks everything that can be wrong with
//! it and yields a [`ValidatedRequest`] the generator accepts.
//!
//! Vehicle class and track type ids are deliberately not rejected here.
//! An unknown id resolves to a fallback template instead.

use serde::{Deserialize, Serialize};
use setupforge_errors::ValidationError;

use crate::classes::{TrackType, VehicleClass};
use crate::inputs::{Conditions, SessionType, Style, TrackCharacteristics};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GenerationRequest {
    pub vehicle_class: String,
    pub track_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_characteristics: Option<TrackCharacteristics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Conditions>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "setupStyle")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_type: Option<String>,
}

impl GenerationRequest {
    pub fn new(vehicle_class: impl Into<String>, track_type: impl Into<String>) -> Self {
        Self {
            vehicle_class: vehicle_class.into(),
            track_type: track_type.into(),
            ..Self::default()
        }
    }

    /// Check the request before any generation work happens.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::Required`] for an empty class or track type id
    /// - [`ValidationError::InvalidEnumValue`] for an unknown style
    ///   (`field = "style"`) or session (`field = "session_type"`)
    /// - whatever [`TrackCharacteristics::validate`] or
    ///   [`Conditions::validate`] report
    pub fn validate(&self) -> Result<ValidatedRequest, ValidationError> {
        if self.vehicle_class.trim().is_empty() {
            return Err(ValidationError::required("vehicle_class"));
        }
        if self.track_type.trim().is_empty() {
            return Err(ValidationError::required("track_type"));
        }

        let style = self
            .style
            .as_deref()
            .map(str::parse::<Style>)
            .transpose()?
            .unwrap_or_default();
        let session = self
            .session_type
            .as_deref()
            .map(str::parse::<SessionType>)
            .transpose()?
            .unwrap_or_default();

        if let Some(tc) = &self.track_characteristics {
            tc.validate()?;
        }
        if let Some(conditions) = &self.conditions {
            conditions.validate()?;
        }

        Ok(ValidatedRequest {
            vehicle_class_id: self.vehicle_class.trim().to_string(),
            track_type_id: self.track_type.trim().to_string(),
            characteristics: self.track_characteristics.clone(),
            conditions: self.conditions,
            style,
            session,
        })
    }
}

/// A request that passed validation. Only the class and track type ids
/// may still be unknown.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub vehicle_class_id: String,
    pub track_type_id: String,
    pub characteristics: Option<TrackCharacteristics>,
    pub conditions: Option<Conditions>,
    pub style: Style,
    pub session: SessionType,
}

impl ValidatedRequest {
    /// A typed request with default style and session and no track data.
    pub fn new(vehicle_class: VehicleClass, track_type: TrackType) -> Self {
        Self {
            vehicle_class_id: vehicle_class.as_str().to_string(),
            track_type_id: track_type.as_str().to_string(),
            characteristics: None,
            conditions: None,
            style: Style::default(),
            session: SessionType::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_session(mut self, session: SessionType) -> Self {
        self.session = session;
        self
    }

    #[must_use]
    pub fn with_characteristics(mut self, characteristics: TrackCharacteristics) -> Self {
        self.characteristics = Some(characteristics);
        self
    }

    #[must_use]
    pub fn with_conditions(mut self, conditions: Conditions) -> Self {
        self.conditions = Some(conditions);
        self
    }

    pub fn vehicle_class(&self) -> Option<VehicleClass> {
        VehicleClass::from_id(&self.vehicle_class_id)
    }

    pub fn track_type(&self) -> Option<TrackType> {
        TrackType::from_id(&self.track_type_id)
    }
}
