//! Catalog tracks

use serde::{Deserialize, Serialize};
use setupforge_model::{TrackCharacteristics, TrackType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Assigned from the track's position when the catalog loads.
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub country: String,
    /// Layout family as the sim labels it ("Road", "Dirt Oval", "Test").
    pub track_type: String,
    #[serde(default)]
    pub variants: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characteristics: Option<TrackCharacteristics>,
}

impl Track {
    /// Template track type for this layout, `None` for layouts with no
    /// matching template (the resolver falls back for those).
    pub fn track_type(&self) -> Option<TrackType> {
        match self.track_type.trim().to_ascii_lowercase().as_str() {
            "road" => Some(TrackType::Road),
            "oval" => Some(TrackType::Oval),
            "dirt oval" | "dirt" => Some(TrackType::Dirt),
            "rallycross" => Some(TrackType::Rallycross),
            _ => None,
        }
    }
}
