use std::{
    fmt,
    fs::File,
    path::{Path, PathBuf},
    str::FromStr,
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{PitlaneError, selection::is_available_season};

const CONFIG_FILE_NAME: &str = "config.json";
const APP_DIR: &str = "pitlane";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dark => f.write_str("dark"),
            Self::Light => f.write_str("light"),
        }
    }
}

impl FromStr for Theme {
    type Err = PitlaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(PitlaneError::InvalidUserInput {
                field: "theme".to_string(),
                reason: format!("expected dark or light, got {other}"),
            }),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub theme: Theme,
    pub season: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            season: 2025,
        }
    }
}

impl AppConfig {
    pub fn default_path() -> Result<PathBuf, PitlaneError> {
        Ok(dirs::config_dir()
            .ok_or(PitlaneError::NoConfigDir)?
            .join(APP_DIR)
            .join(CONFIG_FILE_NAME))
    }

    /// The saved config, or `None` when nothing has been saved yet.
    pub fn from_local_file() -> Result<Option<Self>, PitlaneError> {
        Self::load_from(&Self::default_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Option<Self>, PitlaneError> {
        if !config_path.exists() {
            debug!("No config file at {:?}", config_path);
            return Ok(None);
        }
        let file = File::open(config_path).map_err(|e| PitlaneError::ConfigIOError { source: e })?;
        let config: Self = serde_json::from_reader(file)
            .map_err(|e| PitlaneError::ConfigSerializeError { source: e })?;
        config.validate()?;
        Ok(Some(config))
    }

    pub fn save(&self) -> Result<(), PitlaneError> {
        self.save_to(&Self::default_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), PitlaneError> {
        self.validate()?;
        if let Some(parent) = config_path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| PitlaneError::ConfigIOError { source: e })?;
        }

        let file = File::create(config_path)
            .map_err(|e| PitlaneError::ConfigIOError { source: e })?;
        serde_json::to_writer_pretty(file, self)
            .map_err(|e| PitlaneError::ConfigSerializeError { source: e })?;
        debug!("Saved config to {:?}", config_path);
        Ok(())
    }

    pub fn validate(&self) -> Result<(), PitlaneError> {
        if !is_available_season(self.season) {
            return Err(PitlaneError::InvalidUserInput {
                field: "season".to_string(),
                reason: format!("no data available for season {}", self.season),
            });
        }
        Ok(())
    }
}
