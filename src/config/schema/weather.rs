use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_ENDPOINT: &str = "http://api.openweathermap.org/data/2.5/weather";
/// Provider city id for Tokyo.
pub const DEFAULT_LOCATION_ID: &str = "1850147";
pub const DEFAULT_SECRET_FILE: &str = "client_secret.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Current-weather endpoint of the provider
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Provider city id reported by the welcome intent
    #[serde(default = "default_location_id")]
    pub location_id: String,
    /// JSON file holding `openweathermap_key`; re-read on every fetch
    #[serde(default = "default_secret_file")]
    pub secret_file: String,
    /// Outbound request timeout; transport defaults when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.into()
}

fn default_location_id() -> String {
    DEFAULT_LOCATION_ID.into()
}

fn default_secret_file() -> String {
    DEFAULT_SECRET_FILE.into()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            location_id: default_location_id(),
            secret_file: default_secret_file(),
            timeout_secs: None,
        }
    }
}

impl WeatherConfig {
    /// Secret file path with a leading `~` expanded.
    pub fn resolved_secret_file(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(self.secret_file.trim()).into_owned())
    }
}
