//! `setupctl generate`

use std::fs;

use anyhow::Result;
use setupforge_catalog::Catalog;
use setupforge_errors::ValidationError;
use setupforge_model::{
    Conditions, GenerationRequest, SheetHeader, TrackCharacteristics, Weather, render_sheet,
};
use setupforge_pipeline::{GeneratedSetup, SetupGenerator};
use tracing::info;

use crate::commands::GenerateArgs;
use crate::config::Config;
use crate::error::CliError;
use crate::output;

pub fn execute(args: &GenerateArgs, config: &Config, json: bool) -> Result<()> {
    let (request, title) = build_request(args, config)?;
    let validated = request.validate().map_err(CliError::from)?;

    let generator = SetupGenerator::with_templates(config.templates()?);
    let generated = generator.generate(&validated);
    let sheet = sheet_text(&generated, &title);

    if let Some(path) = &args.sheet {
        fs::write(path, &sheet).map_err(CliError::from)?;
        info!(path = %path.display(), "Wrote setup sheet");
    }

    output::print_generated(&generated, &sheet, args.sheet.as_deref(), json);
    Ok(())
}

/// Raw request from the command line, plus the title for the sheet.
pub fn build_request(
    args: &GenerateArgs,
    config: &Config,
) -> Result<(GenerationRequest, String), CliError> {
    let (vehicle_class, track_type, catalog_characteristics, title) = match (args.car, args.track) {
        (Some(car_id), Some(track_id)) => {
            let catalog = Catalog::builtin()?;
            let car = catalog.car(car_id)?;
            let track = catalog.track(track_id)?;
            let request = catalog.request(car_id, track_id)?;
            (
                request.vehicle_class_id,
                request.track_type_id,
                request.characteristics,
                format!("{} @ {}", car.name, track.name),
            )
        }
        _ => {
            let class = args.class.clone().unwrap_or_default();
            let track_type = args.track_type.clone().unwrap_or_default();
            let title = format!("{class} {track_type} setup");
            (class, track_type, None, title)
        }
    };

    let request = GenerationRequest {
        track_characteristics: characteristics(args, catalog_characteristics)?,
        conditions: conditions(args)?,
        style: args
            .style
            .clone()
            .or_else(|| config.default_style.map(|s| s.as_str().to_string())),
        session_type: args
            .session
            .clone()
            .or_else(|| config.default_session.map(|s| s.as_str().to_string())),
        ..GenerationRequest::new(vehicle_class, track_type)
    };
    Ok((request, title))
}

/// Catalog characteristics with any command-line values laid over them.
fn characteristics(
    args: &GenerateArgs,
    base: Option<TrackCharacteristics>,
) -> Result<Option<TrackCharacteristics>, ValidationError> {
    let has_flags = args.length_km.is_some()
        || args.elevation.is_some()
        || args.banking.is_some()
        || args.grip.is_some()
        || args.downforce.is_some();
    if !has_flags {
        return Ok(base);
    }

    let mut tc = base.unwrap_or_default();
    if let Some(length) = args.length_km {
        tc.length_km = Some(length);
    }
    if let Some(elevation) = args.elevation {
        tc.elevation_change_m = Some(elevation);
    }
    if let Some(banking) = args.banking {
        tc.banking_max_deg = Some(banking);
    }
    if let Some(grip) = &args.grip {
        tc.grip_level = Some(grip.parse()?);
    }
    if let Some(downforce) = &args.downforce {
        tc.downforce_importance = Some(downforce.parse()?);
    }
    Ok(Some(tc))
}

fn conditions(args: &GenerateArgs) -> Result<Option<Conditions>, ValidationError> {
    if args.weather.is_none() && args.temperature.is_none() {
        return Ok(None);
    }
    let weather: Option<Weather> = args.weather.as_deref().map(str::parse).transpose()?;
    Ok(Some(Conditions {
        weather,
        temperature_c: args.temperature,
    }))
}

fn sheet_text(generated: &GeneratedSetup, title: &str) -> String {
    let meta = &generated.metadata;
    let header = SheetHeader {
        title: title.to_string(),
        vehicle_class: meta.vehicle_class,
        track_type: meta.track_type,
        style: meta.style,
        session: meta.session_type,
    };
    render_sheet(&generated.setup, &header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use setupforge_errors::ErrorCategory;
    use setupforge_model::{GripLevel, Style};
    use setupforge_test_helpers::prelude::*;

    fn by_class(class: &str, track_type: &str) -> GenerateArgs {
        GenerateArgs {
            class: Some(class.to_string()),
            track_type: Some(track_type.to_string()),
            ..GenerateArgs::default()
        }
    }

    #[test]
    fn test_plain_request() -> TestResult {
        let (request, title) = build_request(&by_class("GT3", "road"), &Config::default())?;
        assert_eq!(request, GenerationRequest::new("GT3", "road"));
        assert_eq!(title, "GT3 road setup");
        Ok(())
    }

    #[test]
    fn test_config_defaults_fill_gaps() -> TestResult {
        let config = Config {
            default_style: Some(Style::Safe),
            ..Config::default()
        };
        let (request, _) = build_request(&by_class("GT3", "road"), &config)?;
        assert_eq!(request.style.as_deref(), Some("safe"));

        let args = GenerateArgs {
            style: Some("aggressive".to_string()),
            ..by_class("GT3", "road")
        };
        let (request, _) = build_request(&args, &config)?;
        assert_eq!(request.style.as_deref(), Some("aggressive"));
        Ok(())
    }

    #[test]
    fn test_flags_override_catalog() -> TestResult {
        // Eldora Speedway carries low grip in the catalog.
        let catalog = Catalog::builtin()?;
        let eldora = must_some(
            catalog.tracks().iter().find(|t| t.name.starts_with("Eldora")),
            "Eldora in catalog",
        );
        let args = GenerateArgs {
            car: Some(1),
            track: Some(eldora.id),
            length_km: Some(0.9),
            ..GenerateArgs::default()
        };
        let (request, title) = build_request(&args, &Config::default())?;
        let tc = must_some(request.track_characteristics, "characteristics");
        assert_eq!(tc.length_km, Some(0.9));
        assert_eq!(tc.grip_level, Some(GripLevel::Low));
        assert!(title.ends_with("@ Eldora Speedway"), "{title}");
        Ok(())
    }

    #[test]
    fn test_bad_grip_is_validation_error() {
        let args = GenerateArgs {
            grip: Some("sticky".to_string()),
            ..by_class("GT3", "road")
        };
        let result = build_request(&args, &Config::default());
        let category = result.err().and_then(|e| e.category());
        assert_eq!(category, Some(ErrorCategory::Validation));
    }

    #[test]
    fn test_conditions_from_flags() -> TestResult {
        let args = GenerateArgs {
            weather: Some("rain".to_string()),
            temperature: Some(-2.0),
            ..by_class("GT3", "road")
        };
        let (request, _) = build_request(&args, &Config::default())?;
        assert_eq!(
            request.conditions,
            Some(Conditions {
                weather: Some(Weather::Rain),
                temperature_c: Some(-2.0),
            })
        );
        Ok(())
    }

    #[test]
    fn test_unknown_car() {
        let args = GenerateArgs {
            car: Some(9999),
            track: Some(1),
            ..GenerateArgs::default()
        };
        let result = build_request(&args, &Config::default());
        assert_eq!(result.err().map(|e| e.exit_code()), Some(2));
    }
}
