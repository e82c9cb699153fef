//! Current-weather lookup: credential loading, the provider call, and the
//! translation of provider codes into spoken Japanese.

mod client;
pub mod credential;
mod http_client;
pub mod openweathermap;
pub mod translate;

pub use client::{WeatherClient, WeatherSource};
pub use credential::Credential;
pub use translate::{Condition, condition_phrase, wind_direction};

/// Normalized current conditions, built once per fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Weather {
    /// °C
    pub cur_temp: f64,
    /// hPa
    pub pressure: i64,
    /// Percent
    pub humidity: i64,
    /// Cloud cover, percent
    pub cloudiness: i64,
    pub cur_weather: &'static str,
    /// m/s
    pub wind_speed: f64,
    pub wind_direction: &'static str,
}
