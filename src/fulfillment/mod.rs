//! Webhook fulfillment: the platform's envelopes, intent dispatch and the
//! spoken replies.

pub mod envelope;
mod intent;
pub mod template;
pub mod welcome;

pub use envelope::{Context, FollowupEvent, RequestEnvelope, ResponseEnvelope};
pub use intent::{Intent, IntentHandler};
pub use template::SpeechTemplates;
pub use welcome::SpeechClock;
