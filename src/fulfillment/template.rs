use crate::config::SpeechConfig;
use crate::error::FulfillmentError;
use tera::Tera;

pub const WELCOME: &str = "welcome";

/// Built-in welcome sentence.
pub const DEFAULT_WELCOME_TEMPLATE: &str = "こんにちは。時刻は{{ time }}です。\
現在の天気は{{ condition }}、{{ temperature }}度です。\
気圧は{{ pressure }}ヘクトパスカル、曇り度数は{{ cloudiness }}です。\
湿度は{{ humidity }}パーセントです。\
風速は秒速{{ wind_speed }}メートル、風向は{{ wind_direction }}です。";

/// Tera-backed registry of the spoken response templates.
pub struct SpeechTemplates {
    tera: Tera,
}

impl SpeechTemplates {
    /// Register the built-in templates, or the configured overrides.
    /// Template syntax errors surface here, at startup.
    pub fn from_config(config: &SpeechConfig) -> anyhow::Result<Self> {
        let mut tera = Tera::default();
        let welcome = config
            .welcome_template
            .as_deref()
            .unwrap_or(DEFAULT_WELCOME_TEMPLATE);
        tera.add_raw_template(WELCOME, welcome)?;
        Ok(Self { tera })
    }

    /// Render a named template with the given context.
    pub fn render(
        &self,
        template_name: &str,
        context: &tera::Context,
    ) -> Result<String, FulfillmentError> {
        self.tera
            .render(template_name, context)
            .map_err(|e| FulfillmentError::SpeechRender(format!("{template_name}: {e}")))
    }
}
