//! `setupctl normalize`

use std::fs;
use std::path::Path;

use anyhow::Result;
use setupforge_model::{Setup, validate_setup};
use setupforge_pipeline::normalize;
use tracing::debug;

use crate::error::CliError;
use crate::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Format::Yaml
            }
            _ => Format::Json,
        }
    }
}

/// Validate and normalize a setup file. With `destination`, the result is
/// written there in that file's format instead of being printed.
pub fn execute(file: &Path, destination: Option<&Path>, json: bool) -> Result<()> {
    let setup = normalize_file(file)?;

    match destination {
        Some(path) => {
            fs::write(path, encode(&setup, Format::of(path))?).map_err(CliError::from)?;
            let message = format!("Normalized setup written to {}", path.display());
            output::print_success(&message, json);
        }
        None => output::print_setup(&setup, json)?,
    }
    Ok(())
}

fn normalize_file(path: &Path) -> Result<Setup, CliError> {
    let text = fs::read_to_string(path)?;
    let setup: Setup = match Format::of(path) {
        Format::Yaml => serde_yaml::from_str(&text)?,
        Format::Json => serde_json::from_str(&text)?,
    };
    validate_setup(&setup)?;
    debug!(path = %path.display(), fields = setup.field_paths().len(), "Normalizing setup");
    Ok(normalize(setup))
}

fn encode(setup: &Setup, format: Format) -> Result<String, CliError> {
    match format {
        Format::Yaml => Ok(serde_yaml::to_string(setup)?),
        Format::Json => Ok(serde_json::to_string_pretty(setup)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use setupforge_errors::ErrorCategory;
    use setupforge_test_helpers::prelude::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::of(Path::new("a.yaml")), Format::Yaml);
        assert_eq!(Format::of(Path::new("a.YML")), Format::Yaml);
        assert_eq!(Format::of(Path::new("a.json")), Format::Json);
        assert_eq!(Format::of(Path::new("setup")), Format::Json);
    }

    #[test]
    fn test_normalize_yaml_file() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("setup.yaml");
        fs::write(&path, "tires:\n  pressure: { fl: 23.04, fr: 23.06, rl: 22.54, rr: 22.49 }\n")?;

        let setup = normalize_file(&path)?;
        let pressure = must_some(setup.tires.and_then(|t| t.pressure), "pressures");
        assert_eq!(pressure.fl, 23.0);
        assert_eq!(pressure.fr, 23.1);
        assert_eq!(pressure.rl, 22.5);
        Ok(())
    }

    #[test]
    fn test_invalid_setup_rejected() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("setup.json");
        fs::write(&path, r#"{"tires": {"pressure": {"fl": -1.0, "fr": 23.0, "rl": 23.0, "rr": 23.0}}}"#)?;
        let category = normalize_file(&path).err().and_then(|e| e.category());
        assert_eq!(category, Some(ErrorCategory::Validation));
        Ok(())
    }
}
