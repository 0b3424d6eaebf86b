//! Catalog loading and lookups

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::Deserialize;
use setupforge_errors::CatalogError;
use setupforge_model::{SessionType, Style, TrackType, ValidatedRequest};
use tracing::debug;

use crate::car::Car;
use crate::track::Track;

pub const CARS_YAML: &str = include_str!("../data/cars.yaml");
pub const TRACKS_YAML: &str = include_str!("../data/tracks.yaml");

#[derive(Debug, Deserialize)]
struct CarFile {
    cars: Vec<Car>,
}

#[derive(Debug, Deserialize)]
struct TrackFile {
    tracks: Vec<Track>,
}

/// Read-only car and track inventory.
#[derive(Debug, Clone)]
pub struct Catalog {
    cars: Vec<Car>,
    tracks: Vec<Track>,
}

static BUILTIN: LazyLock<Result<Catalog, CatalogError>> =
    LazyLock::new(|| Catalog::from_yaml(CARS_YAML, TRACKS_YAML));

impl Catalog {
    /// The embedded catalog, parsed on first use.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if the embedded data is malformed.
    pub fn builtin() -> Result<&'static Catalog, CatalogError> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    /// Parse a catalog from car and track YAML documents, assigning ids.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if either document is malformed.
    pub fn from_yaml(cars_yaml: &str, tracks_yaml: &str) -> Result<Self, CatalogError> {
        let mut cars = serde_yaml::from_str::<CarFile>(cars_yaml)
            .map_err(|e| CatalogError::Parse(format!("cars: {e}")))?
            .cars;
        let mut tracks = serde_yaml::from_str::<TrackFile>(tracks_yaml)
            .map_err(|e| CatalogError::Parse(format!("tracks: {e}")))?
            .tracks;

        for (id, car) in (1u32..).zip(cars.iter_mut()) {
            car.id = id;
        }
        for (id, track) in (1u32..).zip(tracks.iter_mut()) {
            track.id = id;
        }

        debug!(cars = cars.len(), tracks = tracks.len(), "Loaded catalog");
        Ok(Self { cars, tracks })
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::CarNotFound`] for an unknown id.
    pub fn car(&self, id: u32) -> Result<&Car, CatalogError> {
        self.cars
            .iter()
            .find(|c| c.id == id)
            .ok_or(CatalogError::CarNotFound(id))
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::TrackNotFound`] for an unknown id.
    pub fn track(&self, id: u32) -> Result<&Track, CatalogError> {
        self.tracks
            .iter()
            .find(|t| t.id == id)
            .ok_or(CatalogError::TrackNotFound(id))
    }

    /// Cars grouped by category, categories in alphabetical order and cars
    /// in catalog order within each.
    pub fn cars_by_category(&self) -> BTreeMap<&str, Vec<&Car>> {
        let mut groups: BTreeMap<&str, Vec<&Car>> = BTreeMap::new();
        for car in &self.cars {
            groups.entry(car.category.as_str()).or_default().push(car);
        }
        groups
    }

    /// Cars whose name contains `query`, ignoring case.
    pub fn search_cars(&self, query: &str) -> Vec<&Car> {
        let needle = query.trim().to_lowercase();
        self.cars
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Tracks whose layout maps to `track_type`.
    pub fn tracks_of_type(&self, track_type: TrackType) -> Vec<&Track> {
        self.tracks
            .iter()
            .filter(|t| t.track_type() == Some(track_type))
            .collect()
    }

    /// Generation request for a car on a track.
    ///
    /// Categories and layouts with no template keep their catalog label as
    /// the id, so generation falls back instead of failing. The track's
    /// characteristics, if any, come along.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CarNotFound`] or
    /// [`CatalogError::TrackNotFound`] for unknown ids.
    pub fn request(&self, car_id: u32, track_id: u32) -> Result<ValidatedRequest, CatalogError> {
        let car = self.car(car_id)?;
        let track = self.track(track_id)?;

        let vehicle_class_id = car
            .vehicle_class()
            .map_or_else(|| car.category.clone(), |c| c.as_str().to_string());
        let track_type_id = track
            .track_type()
            .map_or_else(|| track.track_type.clone(), |t| t.as_str().to_string());

        Ok(ValidatedRequest {
            vehicle_class_id,
            track_type_id,
            characteristics: track.characteristics.clone(),
            conditions: None,
            style: Style::default(),
            session: SessionType::default(),
        })
    }
}
