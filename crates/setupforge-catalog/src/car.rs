//! Catalog cars

use serde::{Deserialize, Serialize};
use setupforge_model::VehicleClass;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Assigned from the car's position when the catalog loads.
    #[serde(default)]
    pub id: u32,
    pub name: String,
    /// Series grouping as the sim labels it ("GT3", "Formula 1", "LMDh").
    pub category: String,
    /// Finer body style ("Stock Car", "Cup Car").
    pub kind: String,
}

impl Car {
    /// Template class for this car's category, if one fits.
    pub fn vehicle_class(&self) -> Option<VehicleClass> {
        category_class(&self.category)
    }
}

/// Class ids cover most categories. The rest are catalog groupings of
/// production-based cars, which share the touring template.
fn category_class(category: &str) -> Option<VehicleClass> {
    VehicleClass::from_id(category).or_else(|| {
        let category = category.trim();
        ["road", "spec"]
            .iter()
            .any(|c| category.eq_ignore_ascii_case(c))
            .then_some(VehicleClass::Touring)
    })
}
