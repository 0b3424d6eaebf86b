//! Command definitions and implementations

use std::path::PathBuf;

use clap::Args;

pub mod catalog;
pub mod generate;
pub mod normalize;
pub mod templates;

/// Arguments for `setupctl generate`.
///
/// The target is either a template pair (`--class`, `--track-type`) or a
/// catalog pair (`--car`, `--track`). Characteristic flags override what the
/// catalog knows about the track.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Vehicle class id (GT3, GT4, Formula, NASCAR, ...)
    #[arg(long = "class", required_unless_present = "car", conflicts_with = "car")]
    pub class: Option<String>,

    /// Track type id (road, oval, dirt, rallycross)
    #[arg(long, required_unless_present = "car", conflicts_with = "car")]
    pub track_type: Option<String>,

    /// Catalog car id
    #[arg(long, requires = "track")]
    pub car: Option<u32>,

    /// Catalog track id
    #[arg(long, requires = "car")]
    pub track: Option<u32>,

    /// Setup style (safe, balanced, aggressive)
    #[arg(long)]
    pub style: Option<String>,

    /// Session type (practice, qualifying, race)
    #[arg(long)]
    pub session: Option<String>,

    /// Track length in kilometres
    #[arg(long)]
    pub length_km: Option<f64>,

    /// Elevation change in metres
    #[arg(long)]
    pub elevation: Option<f64>,

    /// Maximum banking in degrees
    #[arg(long)]
    pub banking: Option<f64>,

    /// Surface grip (low, normal, high)
    #[arg(long)]
    pub grip: Option<String>,

    /// Downforce importance (low, normal, high)
    #[arg(long)]
    pub downforce: Option<String>,

    /// Weather (clear, rain, wet)
    #[arg(long)]
    pub weather: Option<String>,

    /// Ambient temperature in degrees Celsius
    #[arg(long, allow_negative_numbers = true)]
    pub temperature: Option<f64>,

    /// Also write a plain-text setup sheet to this path
    #[arg(long)]
    pub sheet: Option<PathBuf>,
}
