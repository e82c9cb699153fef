//! Wire shapes of the provider's current-weather endpoint and their
//! normalization into [`Weather`].

use super::Weather;
use super::translate::{condition_phrase, wind_direction};
use crate::error::FulfillmentError;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherResponse {
    pub weather: Vec<ConditionEntry>,
    pub main: MainMetrics,
    pub clouds: Clouds,
    pub wind: Wind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionEntry {
    pub id: i64,
    #[serde(default)]
    pub main: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainMetrics {
    pub temp: f64,
    pub pressure: i64,
    pub humidity: i64,
    #[serde(default)]
    pub temp_min: f64,
    #[serde(default)]
    pub temp_max: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Clouds {
    pub all: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    pub speed: f64,
    pub deg: f64,
}

impl CurrentWeatherResponse {
    /// Decode a raw provider body.
    pub fn from_slice(body: &[u8]) -> Result<Self, FulfillmentError> {
        serde_json::from_slice(body)
            .map_err(|e| FulfillmentError::UpstreamResponseInvalid(format!("decode body: {e}")))
    }

    /// Only the first condition entry is spoken; an empty list is a provider
    /// contract violation.
    pub fn into_weather(self) -> Result<Weather, FulfillmentError> {
        let primary = self.weather.first().ok_or_else(|| {
            FulfillmentError::UpstreamResponseInvalid("empty weather condition list".into())
        })?;

        Ok(Weather {
            cur_temp: self.main.temp,
            pressure: self.main.pressure,
            humidity: self.main.humidity,
            cloudiness: self.clouds.all,
            cur_weather: condition_phrase(primary.id),
            wind_speed: self.wind.speed,
            wind_direction: wind_direction(self.wind.deg),
        })
    }
}
