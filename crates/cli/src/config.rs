//! User configuration for setupctl

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use setupforge_errors::prelude::*;
use setupforge_model::{SessionType, Style};
use setupforge_pipeline::TemplateTable;
use tracing::debug;

/// Contents of `config.yaml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub default_style: Option<Style>,
    pub default_session: Option<SessionType>,
    /// Template override file; relative paths are taken from the config
    /// file's directory.
    pub templates_path: Option<PathBuf>,
}

impl Config {
    /// Load the config named on the command line, or the default one in
    /// the home directory. A missing default file yields the defaults; a
    /// missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| SetupForgeError::config(format!("{}: {e}", path.display())))?;
        let mut config: Config = serde_yaml::from_str(&text)
            .map_err(|e| SetupForgeError::config(format!("{}: {e}", path.display())))?;

        if let Some(templates) = &config.templates_path
            && templates.is_relative()
            && let Some(dir) = path.parent()
        {
            config.templates_path = Some(dir.join(templates));
        }

        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Builtin templates merged with the configured override file.
    pub fn templates(&self) -> Result<TemplateTable> {
        match &self.templates_path {
            Some(path) => Ok(TemplateTable::builtin().with_overrides_file(path)?),
            None => Ok(TemplateTable::builtin().clone()),
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;

    #[cfg(windows)]
    let config_dir = home.join("AppData").join("Local").join("setupctl");

    #[cfg(not(windows))]
    let config_dir = home.join(".setupctl");

    Some(config_dir.join("config.yaml"))
}
