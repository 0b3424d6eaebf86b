//! Base template table and resolver
//!
//! The table maps `(vehicle class, track type)` to a baseline setup.
//! Resolution never fails:
//!
//! 1. exact `(class, track type)` entry;
//! 2. otherwise the first declared entry for the class;
//! 3. otherwise the table's default entry (GT3 on a road course).
//!
//! Every resolution hands back an owned copy, so callers can never mutate
//! the shared table.

mod builtin;

use core::fmt;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use setupforge_errors::TemplateError;
use setupforge_model::{Setup, TrackType, VehicleClass, validate_setup};
use tracing::{debug, warn};

/// Table key, printed as `GT3/road`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TemplateKey {
    pub vehicle_class: VehicleClass,
    pub track_type: TrackType,
}

impl TemplateKey {
    pub const DEFAULT: TemplateKey = TemplateKey {
        vehicle_class: VehicleClass::Gt3,
        track_type: TrackType::Road,
    };

    pub fn new(vehicle_class: VehicleClass, track_type: TrackType) -> Self {
        Self {
            vehicle_class,
            track_type,
        }
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.vehicle_class, self.track_type)
    }
}

/// A named baseline setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateEntry {
    pub vehicle_class: VehicleClass,
    pub track_type: TrackType,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub setup: Setup,
}

impl TemplateEntry {
    pub fn key(&self) -> TemplateKey {
        TemplateKey::new(self.vehicle_class, self.track_type)
    }
}

/// Why resolution did not use the exact requested entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum FallbackReason {
    /// Class id did not parse.
    UnknownVehicleClass { id: String },
    /// Track type id did not parse.
    UnknownTrackType { id: String },
    /// Class is known but has no template in the table.
    ClassUnavailable { vehicle_class: VehicleClass },
    /// Class has templates, just not for this track type.
    TrackTypeUnavailable {
        vehicle_class: VehicleClass,
        track_type: TrackType,
    },
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::UnknownVehicleClass { id } => write!(f, "unknown vehicle class '{id}'"),
            FallbackReason::UnknownTrackType { id } => write!(f, "unknown track type '{id}'"),
            FallbackReason::ClassUnavailable { vehicle_class } => {
                write!(f, "no template for class {vehicle_class}")
            }
            FallbackReason::TrackTypeUnavailable {
                vehicle_class,
                track_type,
            } => write!(f, "no {track_type} template for class {vehicle_class}"),
        }
    }
}

/// Outcome of a template lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTemplate {
    pub setup: Setup,
    pub name: String,
    pub key_used: TemplateKey,
    /// The request as given, `class/track_type`.
    pub requested: String,
    pub fallback: Option<FallbackReason>,
}

#[derive(Debug, Deserialize)]
struct TemplateFile {
    templates: Vec<TemplateEntry>,
}

/// Ordered template table. Always holds at least the default entry.
#[derive(Debug, Clone)]
pub struct TemplateTable {
    entries: Vec<TemplateEntry>,
    default: TemplateEntry,
}

static BUILTIN: LazyLock<TemplateTable> = LazyLock::new(TemplateTable::new_builtin);

impl TemplateTable {
    /// The process-wide builtin table.
    pub fn builtin() -> &'static TemplateTable {
        &BUILTIN
    }

    fn new_builtin() -> Self {
        let entries = builtin::builtin_entries();
        let default = entries
            .iter()
            .find(|e| e.key() == TemplateKey::DEFAULT)
            .cloned()
            .unwrap_or_else(builtin::default_entry);
        debug!(templates = entries.len(), "Loaded builtin setup templates");
        Self { entries, default }
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: TemplateKey) -> Option<&TemplateEntry> {
        self.entries.iter().find(|e| e.key() == key)
    }

    fn first_for_class(&self, vehicle_class: VehicleClass) -> Option<&TemplateEntry> {
        self.entries.iter().find(|e| e.vehicle_class == vehicle_class)
    }

    /// Resolve a baseline setup, falling back as described in the module docs.
    pub fn resolve(&self, vehicle_class: VehicleClass, track_type: TrackType) -> ResolvedTemplate {
        let requested = TemplateKey::new(vehicle_class, track_type);
        if let Some(entry) = self.get(requested) {
            return resolved(entry, requested.to_string(), None);
        }

        let resolution = match self.first_for_class(vehicle_class) {
            Some(entry) => resolved(
                entry,
                requested.to_string(),
                Some(FallbackReason::TrackTypeUnavailable {
                    vehicle_class,
                    track_type,
                }),
            ),
            None => resolved(
                &self.default,
                requested.to_string(),
                Some(FallbackReason::ClassUnavailable { vehicle_class }),
            ),
        };
        log_fallback(&resolution);
        resolution
    }

    /// Resolve from raw ids as the web layer sends them. Unknown ids fall
    /// back instead of failing.
    pub fn resolve_ids(&self, class_id: &str, track_type_id: &str) -> ResolvedTemplate {
        let requested = format!("{class_id}/{track_type_id}");
        let Some(vehicle_class) = VehicleClass::from_id(class_id) else {
            let resolution = resolved(
                &self.default,
                requested,
                Some(FallbackReason::UnknownVehicleClass {
                    id: class_id.to_string(),
                }),
            );
            log_fallback(&resolution);
            return resolution;
        };

        match TrackType::from_id(track_type_id) {
            Some(track_type) => {
                let mut resolution = self.resolve(vehicle_class, track_type);
                resolution.requested = requested;
                resolution
            }
            None => {
                let entry = self.first_for_class(vehicle_class).unwrap_or(&self.default);
                let resolution = resolved(
                    entry,
                    requested,
                    Some(FallbackReason::UnknownTrackType {
                        id: track_type_id.to_string(),
                    }),
                );
                log_fallback(&resolution);
                resolution
            }
        }
    }

    /// Copy of this table with `overrides` merged in. An override replaces
    /// the entry with the same key or is appended after the existing ones.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::InvalidTemplate`] if any override fails
    /// setup validation; the table is left unchanged.
    pub fn with_overrides(&self, overrides: Vec<TemplateEntry>) -> Result<Self, TemplateError> {
        let mut table = self.clone();
        for entry in overrides {
            validate_setup(&entry.setup)
                .map_err(|e| TemplateError::invalid(entry.key().to_string(), e.to_string()))?;

            let key = entry.key();
            if key == TemplateKey::DEFAULT {
                table.default = entry.clone();
            }
            match table.entries.iter_mut().find(|e| e.key() == key) {
                Some(existing) => {
                    debug!(template = %key, "Replacing builtin template");
                    *existing = entry;
                }
                None => {
                    debug!(template = %key, "Adding template");
                    table.entries.push(entry);
                }
            }
        }
        Ok(table)
    }

    /// Parse template overrides from YAML (`templates: [...]`).
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Parse`] for malformed YAML.
    pub fn parse_overrides(yaml: &str) -> Result<Vec<TemplateEntry>, TemplateError> {
        serde_yaml::from_str::<TemplateFile>(yaml)
            .map(|file| file.templates)
            .map_err(|e| TemplateError::Parse(e.to_string()))
    }

    /// Read and merge template overrides from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Io`] if the file cannot be read, otherwise
    /// as [`TemplateTable::parse_overrides`] and
    /// [`TemplateTable::with_overrides`].
    pub fn with_overrides_file(&self, path: &Path) -> Result<Self, TemplateError> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| TemplateError::Io(format!("{}: {e}", path.display())))?;
        self.with_overrides(Self::parse_overrides(&yaml)?)
    }
}

impl Default for TemplateTable {
    fn default() -> Self {
        TemplateTable::builtin().clone()
    }
}

/// Resolve against the builtin table.
pub fn resolve(vehicle_class: VehicleClass, track_type: TrackType) -> ResolvedTemplate {
    TemplateTable::builtin().resolve(vehicle_class, track_type)
}

fn resolved(
    entry: &TemplateEntry,
    requested: String,
    fallback: Option<FallbackReason>,
) -> ResolvedTemplate {
    ResolvedTemplate {
        setup: entry.setup.clone(),
        name: entry.name.clone(),
        key_used: entry.key(),
        requested,
        fallback,
    }
}

fn log_fallback(resolution: &ResolvedTemplate) {
    if let Some(reason) = &resolution.fallback {
        warn!(
            requested = %resolution.requested,
            using = %resolution.key_used,
            %reason,
            "Template fallback"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use setupforge_model::{Damper, TirePressures};

    #[test]
    fn test_exact_match() {
        let r = resolve(VehicleClass::Gt3, TrackType::Road);
        assert_eq!(r.key_used, TemplateKey::DEFAULT);
        assert_eq!(r.fallback, None);
        assert_eq!(r.requested, "GT3/road");
        let front = r.setup.suspension.and_then(|s| s.front);
        assert_eq!(front.as_ref().and_then(|a| a.spring), Some(950.0));
        assert_eq!(
            front.and_then(|a| a.damper),
            Some(Damper::BumpRebound {
                bump: 65.0,
                rebound: 70.0
            })
        );
    }

    #[test]
    fn test_track_type_fallback_uses_first_declared_for_class() {
        let r = resolve(VehicleClass::Nascar, TrackType::Road);
        assert_eq!(
            r.key_used,
            TemplateKey::new(VehicleClass::Nascar, TrackType::Oval)
        );
        assert_eq!(
            r.fallback,
            Some(FallbackReason::TrackTypeUnavailable {
                vehicle_class: VehicleClass::Nascar,
                track_type: TrackType::Road,
            })
        );
    }

    #[test]
    fn test_gt3_prefers_road_when_dirt_missing() {
        let r = resolve(VehicleClass::Gt3, TrackType::Dirt);
        assert_eq!(r.key_used, TemplateKey::DEFAULT);
    }

    #[test]
    fn test_unknown_class_id_uses_default() {
        let r = TemplateTable::builtin().resolve_ids("kart", "road");
        assert_eq!(r.key_used, TemplateKey::DEFAULT);
        assert_eq!(
            r.fallback,
            Some(FallbackReason::UnknownVehicleClass {
                id: "kart".to_string()
            })
        );
        assert_eq!(r.requested, "kart/road");
    }

    #[test]
    fn test_unknown_track_type_id_stays_in_class() {
        let r = TemplateTable::builtin().resolve_ids("Formula", "ice");
        assert_eq!(
            r.key_used,
            TemplateKey::new(VehicleClass::Formula, TrackType::Road)
        );
        assert!(matches!(
            r.fallback,
            Some(FallbackReason::UnknownTrackType { .. })
        ));
    }

    #[test]
    fn test_resolve_ids_accepts_aliases() {
        let r = TemplateTable::builtin().resolve_ids("stock car", "Oval");
        assert_eq!(r.fallback, None);
        assert_eq!(r.requested, "stock car/Oval");
    }

    #[test]
    fn test_resolution_is_a_copy() {
        let mut r = resolve(VehicleClass::Gt3, TrackType::Road);
        r.setup.tires = None;
        let again = resolve(VehicleClass::Gt3, TrackType::Road);
        assert_eq!(
            again.setup.tires.and_then(|t| t.pressure),
            Some(TirePressures::new(23.0, 23.0, 22.5, 22.5))
        );
    }

    #[test]
    fn test_every_class_resolves_to_its_own_template() {
        for class in VehicleClass::ALL {
            let r = resolve(class, TrackType::Road);
            assert_eq!(r.key_used.vehicle_class, class, "class {class}");
        }
    }

    #[test]
    fn test_builtin_templates_are_valid() {
        for entry in TemplateTable::builtin().entries() {
            assert!(
                validate_setup(&entry.setup).is_ok(),
                "template {} is invalid",
                entry.key()
            );
        }
    }

    #[test]
    fn test_builtin_keys_are_unique() {
        let table = TemplateTable::builtin();
        let mut keys: Vec<TemplateKey> = table.entries().iter().map(TemplateEntry::key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), table.len());
    }

    #[test]
    fn test_overrides_replace_and_append() -> Result<(), TemplateError> {
        let yaml = r#"
templates:
  - vehicle_class: GT3
    track_type: road
    name: Custom GT3
    setup:
      tires:
        pressure: { fl: 25.0, fr: 25.0, rl: 24.0, rr: 24.0 }
  - vehicle_class: Touring
    track_type: oval
    name: Touring Oval
    setup:
      fuel: { amount: 40 }
"#;
        let base = TemplateTable::builtin();
        let table = base.with_overrides(TemplateTable::parse_overrides(yaml)?)?;
        assert_eq!(table.len(), base.len() + 1);

        let r = table.resolve(VehicleClass::Gt3, TrackType::Road);
        assert_eq!(r.name, "Custom GT3");
        assert!(r.setup.suspension.is_none());

        let r = table.resolve_ids("kart", "road");
        assert_eq!(r.name, "Custom GT3");

        let r = table.resolve(VehicleClass::Touring, TrackType::Oval);
        assert_eq!(r.fallback, None);
        Ok(())
    }

    #[test]
    fn test_invalid_override_rejected() -> Result<(), TemplateError> {
        let yaml = r#"
templates:
  - vehicle_class: GT4
    track_type: road
    name: Broken
    setup:
      tires:
        pressure: { fl: 95.0, fr: 25.0, rl: 24.0, rr: 24.0 }
"#;
        let overrides = TemplateTable::parse_overrides(yaml)?;
        let err = TemplateTable::builtin().with_overrides(overrides).err();
        assert!(matches!(err, Some(TemplateError::InvalidTemplate { ref key, .. }) if key == "GT4/road"));
        Ok(())
    }

    #[test]
    fn test_malformed_overrides() {
        let result = TemplateTable::parse_overrides("templates: [ {name: 3 ");
        assert!(matches!(result, Err(TemplateError::Parse(_))));
    }
}
