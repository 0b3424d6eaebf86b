//! `setupctl cars` and `setupctl tracks`

use anyhow::Result;
use setupforge_catalog::{Car, Catalog, Track};
use setupforge_model::TrackType;

use crate::error::CliError;
use crate::output;

pub fn cars(category: Option<&str>, search: Option<&str>, json: bool) -> Result<()> {
    let catalog = Catalog::builtin().map_err(CliError::from)?;
    let cars = select_cars(catalog, category, search);
    output::print_car_list(&cars, json);
    Ok(())
}

pub fn tracks(track_type: Option<&str>, json: bool) -> Result<()> {
    let catalog = Catalog::builtin().map_err(CliError::from)?;
    let tracks = select_tracks(catalog, track_type)?;
    output::print_track_list(&tracks, json);
    Ok(())
}

fn select_cars<'a>(
    catalog: &'a Catalog,
    category: Option<&str>,
    search: Option<&str>,
) -> Vec<&'a Car> {
    let candidates = match search {
        Some(query) => catalog.search_cars(query),
        None => catalog.cars().iter().collect(),
    };
    candidates
        .into_iter()
        .filter(|car| category.is_none_or(|c| car.category.eq_ignore_ascii_case(c.trim())))
        .collect()
}

fn select_tracks<'a>(
    catalog: &'a Catalog,
    track_type: Option<&str>,
) -> Result<Vec<&'a Track>, CliError> {
    match track_type {
        Some(id) => {
            let track_type: TrackType = id.parse()?;
            Ok(catalog.tracks_of_type(track_type))
        }
        None => Ok(catalog.tracks().iter().collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use setupforge_errors::ErrorCategory;
    use setupforge_test_helpers::prelude::*;

    #[test]
    fn test_category_filter_ignores_case() -> TestResult {
        let catalog = Catalog::builtin()?;
        let gt3 = select_cars(catalog, Some("gt3"), None);
        assert_eq!(gt3.len(), 10);
        assert!(gt3.iter().all(|c| c.category == "GT3"));
        Ok(())
    }

    #[test]
    fn test_search_and_category_combine() -> TestResult {
        let catalog = Catalog::builtin()?;
        let cars = select_cars(catalog, Some("GT3"), Some("bmw"));
        assert!(!cars.is_empty());
        assert!(cars.iter().all(|c| c.name.contains("BMW") && c.category == "GT3"));
        Ok(())
    }

    #[test]
    fn test_track_type_filter() -> TestResult {
        let catalog = Catalog::builtin()?;
        assert_eq!(select_tracks(catalog, Some("dirt"))?.len(), 11);
        assert_eq!(select_tracks(catalog, None)?.len(), catalog.tracks().len());
        let category = select_tracks(catalog, Some("ice")).err().and_then(|e| e.category());
        assert_eq!(category, Some(ErrorCategory::Validation));
        Ok(())
    }
}
