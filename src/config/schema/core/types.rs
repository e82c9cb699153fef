use super::super::{GatewayConfig, SpeechConfig, WeatherConfig};
use crate::error::ConfigError;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const MAX_UTC_OFFSET_MINUTES: i32 = 24 * 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub weather: WeatherConfig,

    #[serde(default)]
    pub speech: SpeechConfig,
}

impl Default for Config {
    fn default() -> Self {
        let home =
            UserDirs::new().map_or_else(|| PathBuf::from("."), |u| u.home_dir().to_path_buf());

        Self {
            config_path: home.join(".tenki").join("config.toml"),
            gateway: GatewayConfig::default(),
            weather: WeatherConfig::default(),
            speech: SpeechConfig::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = url::Url::parse(self.weather.endpoint.trim()).map_err(|e| {
            ConfigError::Validation(format!(
                "weather.endpoint {:?} is not a URL: {e}",
                self.weather.endpoint
            ))
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "weather.endpoint must be http or https, got {}",
                endpoint.scheme()
            )));
        }

        if self.weather.location_id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "weather.location_id must not be empty".into(),
            ));
        }

        if self.weather.secret_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "weather.secret_file must not be empty".into(),
            ));
        }

        if let Some(offset) = self.speech.utc_offset_minutes
            && !(-MAX_UTC_OFFSET_MINUTES..MAX_UTC_OFFSET_MINUTES).contains(&offset)
        {
            return Err(ConfigError::Validation(format!(
                "speech.utc_offset_minutes must be within ±{MAX_UTC_OFFSET_MINUTES}, got {offset}"
            )));
        }

        Ok(())
    }
}
