use super::Weather;
use super::credential::Credential;
use super::http_client::build_weather_client;
use super::openweathermap::CurrentWeatherResponse;
use crate::config::WeatherConfig;
use crate::error::FulfillmentError;
use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

const MAX_UPSTREAM_ERROR_CHARS: usize = 200;

/// Anything that can report the current weather for a provider location id.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn fetch_weather(&self, location_id: &str) -> Result<Weather, FulfillmentError>;
}

/// Current-weather client for the `OpenWeatherMap` 2.5 API.
pub struct WeatherClient {
    endpoint: String,
    secret_file: PathBuf,
    client: Client,
}

impl WeatherClient {
    pub fn new(endpoint: &str, secret_file: impl Into<PathBuf>, timeout: Option<Duration>) -> Self {
        Self {
            endpoint: endpoint.trim().to_string(),
            secret_file: secret_file.into(),
            client: build_weather_client(timeout),
        }
    }

    pub fn from_config(config: &WeatherConfig) -> Self {
        Self::new(
            &config.endpoint,
            config.resolved_secret_file(),
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl WeatherSource for WeatherClient {
    async fn fetch_weather(&self, location_id: &str) -> Result<Weather, FulfillmentError> {
        let credential = Credential::load(&self.secret_file)?;

        tracing::debug!(endpoint = %self.endpoint, location_id, "requesting current weather");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("id", location_id),
                ("appid", credential.api_key()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| FulfillmentError::UpstreamUnavailable(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| FulfillmentError::UpstreamUnavailable(e.without_url().to_string()))?;

        if !status.is_success() {
            return Err(FulfillmentError::UpstreamResponseInvalid(format!(
                "HTTP {status}: {}",
                body_excerpt(&body)
            )));
        }

        CurrentWeatherResponse::from_slice(&body)?.into_weather()
    }
}

fn body_excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let mut excerpt: String = text.chars().take(MAX_UPSTREAM_ERROR_CHARS).collect();
    if text.chars().count() > MAX_UPSTREAM_ERROR_CHARS {
        excerpt.push_str("...");
    }
    excerpt
}
