use anyhow::{Context, Result, anyhow, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Environment variable that overrides `api_key` from the config file.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

pub const DEFAULT_LOCATION_URL: &str = "https://ipinfo.io/loc";
pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Upper bound on the separator between art and text, in characters.
pub const MAX_PADDING: usize = 16;

/// Settings for a single run, stored on disk as TOML.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// padding = "    "
/// high_wind_speed = 25.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// OpenWeatherMap API key.
    pub api_key: Option<String>,

    /// Separator placed between the art column and the text column.
    pub padding: String,

    /// Wind speed (mph) at or above which conditions count as windy.
    pub high_wind_speed: f64,

    /// Width of the left-aligned field at the start of each text row.
    pub text_width: usize,

    pub location_url: String,
    pub weather_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            padding: " ".repeat(4),
            high_wind_speed: 25.0,
            text_width: 12,
            location_url: DEFAULT_LOCATION_URL.to_string(),
            weather_url: DEFAULT_WEATHER_URL.to_string(),
        }
    }
}

impl Config {
    /// Load config from disk, or return defaults if it doesn't exist yet.
    /// `OPENWEATHER_API_KEY` is applied on top.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        let mut cfg = Self::load_from(&path)?;
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "ascii-weather", "ascii-weather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_api_key_override(std::env::var(API_KEY_ENV).ok());
    }

    fn apply_api_key_override(&mut self, value: Option<String>) {
        if let Some(key) = value.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key.trim().to_string());
        }
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// Returns the API key, or an error with a hint on how to set one.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "No OpenWeatherMap API key configured.\n\
                     Hint: run `ascii-weather configure` or set {API_KEY_ENV}."
                )
            })
    }

    pub fn validate(&self) -> Result<()> {
        if !self.high_wind_speed.is_finite() || self.high_wind_speed < 0.0 {
            bail!(
                "Invalid high_wind_speed {}: must be a non-negative number",
                self.high_wind_speed
            );
        }
        if self.text_width == 0 {
            bail!("Invalid text_width: must be greater than zero");
        }
        if self.padding.chars().count() > MAX_PADDING {
            bail!("Invalid padding: at most {MAX_PADDING} characters allowed");
        }
        Ok(())
    }
}
