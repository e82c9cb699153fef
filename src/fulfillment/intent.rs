use super::envelope::{RequestEnvelope, ResponseEnvelope};
use super::template::SpeechTemplates;
use super::welcome::{SpeechClock, compose_welcome};
use crate::config::Config;
use crate::error::FulfillmentError;
use crate::weather::{WeatherClient, WeatherSource};
use std::sync::Arc;

/// Intents this webhook fulfills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Intent {
    Welcome,
}

impl Intent {
    pub const ALL: [Self; 1] = [Self::Welcome];

    /// Action identifier the platform sends in `result.action`.
    pub fn action(self) -> &'static str {
        match self {
            Self::Welcome => "input.welcome",
        }
    }

    pub fn from_action(action: &str) -> Result<Self, FulfillmentError> {
        Self::ALL
            .into_iter()
            .find(|intent| intent.action() == action)
            .ok_or_else(|| FulfillmentError::UnknownIntent(action.to_string()))
    }
}

/// Routes a decoded webhook call to its intent and builds the reply.
pub struct IntentHandler {
    weather: Arc<dyn WeatherSource>,
    location_id: String,
    templates: SpeechTemplates,
    clock: SpeechClock,
}

impl IntentHandler {
    pub fn new(
        weather: Arc<dyn WeatherSource>,
        location_id: impl Into<String>,
        templates: SpeechTemplates,
        clock: SpeechClock,
    ) -> Self {
        Self {
            weather,
            location_id: location_id.into(),
            templates,
            clock,
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(
            Arc::new(WeatherClient::from_config(&config.weather)),
            config.weather.location_id.trim(),
            SpeechTemplates::from_config(&config.speech)?,
            SpeechClock::new(config.speech.utc_offset_minutes),
        ))
    }

    pub async fn dispatch(
        &self,
        request: &RequestEnvelope,
    ) -> Result<ResponseEnvelope, FulfillmentError> {
        let intent = Intent::from_action(request.action()?)?;
        tracing::debug!(
            %intent,
            session_id = %request.session_id,
            contexts = request.contexts().len(),
            "dispatching intent"
        );

        match intent {
            Intent::Welcome => self.welcome().await,
        }
    }

    async fn welcome(&self) -> Result<ResponseEnvelope, FulfillmentError> {
        let weather = self.weather.fetch_weather(&self.location_id).await?;
        compose_welcome(&self.templates, &weather, self.clock.now())
    }
}
