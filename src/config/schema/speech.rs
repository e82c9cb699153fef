use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Tera template replacing the built-in welcome sentence
    #[serde(default)]
    pub welcome_template: Option<String>,
    /// Fixed UTC offset for the spoken clock time; host local time when unset
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,
}
