use super::envelope::ResponseEnvelope;
use super::template::{SpeechTemplates, WELCOME};
use crate::error::FulfillmentError;
use crate::weather::Weather;
use chrono::{FixedOffset, Local, NaiveTime, Utc};

/// Wall clock used for the spoken time of day.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpeechClock {
    offset: Option<FixedOffset>,
}

impl SpeechClock {
    /// `None` follows the host's local zone.
    pub fn new(utc_offset_minutes: Option<i32>) -> Self {
        Self {
            offset: utc_offset_minutes
                .and_then(|minutes| minutes.checked_mul(60))
                .and_then(FixedOffset::east_opt),
        }
    }

    pub fn now(&self) -> NaiveTime {
        match self.offset {
            Some(offset) => Utc::now().with_timezone(&offset).time(),
            None => Local::now().time(),
        }
    }
}

pub fn spoken_time(time: NaiveTime) -> String {
    time.format("%H時%M分").to_string()
}

pub fn welcome_context(weather: &Weather, time: NaiveTime) -> tera::Context {
    let mut ctx = tera::Context::new();
    ctx.insert("time", &spoken_time(time));
    ctx.insert("condition", weather.cur_weather);
    ctx.insert("temperature", &format!("{:.1}", weather.cur_temp));
    ctx.insert("pressure", &weather.pressure.to_string());
    ctx.insert("cloudiness", &weather.cloudiness.to_string());
    ctx.insert("humidity", &weather.humidity.to_string());
    ctx.insert("wind_speed", &format!("{:.1}", weather.wind_speed));
    ctx.insert("wind_direction", weather.wind_direction);
    ctx
}

/// Speech and display text carry the same sentence.
pub fn compose_welcome(
    templates: &SpeechTemplates,
    weather: &Weather,
    time: NaiveTime,
) -> Result<ResponseEnvelope, FulfillmentError> {
    let voice = templates.render(WELCOME, &welcome_context(weather, time))?;
    Ok(ResponseEnvelope::new(voice))
}
