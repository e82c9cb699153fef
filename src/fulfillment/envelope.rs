//! Request and response bodies of the conversation platform's v1 webhook
//! contract. Field names follow the platform's casing exactly.

use crate::error::FulfillmentError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ── Inbound ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    pub status: Option<RequestStatus>,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub result: Option<QueryResult>,
    #[serde(default)]
    pub original_request: Option<OriginalRequest>,
}

impl RequestEnvelope {
    /// The matched action; a request without `result` cannot be dispatched.
    pub fn action(&self) -> Result<&str, FulfillmentError> {
        self.result
            .as_ref()
            .map(|result| result.action.as_str())
            .ok_or_else(|| FulfillmentError::MalformedInboundRequest("missing result".into()))
    }

    pub fn contexts(&self) -> &[Context] {
        self.result
            .as_ref()
            .map_or(&[][..], |result| result.contexts.as_slice())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestStatus {
    #[serde(default)]
    pub error_type: String,
    #[serde(default)]
    pub code: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    #[serde(default)]
    pub parameters: Map<String, Value>,
    #[serde(default)]
    pub contexts: Vec<Context>,
    #[serde(default)]
    pub resolved_query: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub speech: String,
    #[serde(default)]
    pub fulfillment: Option<RequestFulfillment>,
    #[serde(default)]
    pub action_incomplete: bool,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestFulfillment {
    #[serde(default)]
    pub messages: Vec<FulfillmentMessage>,
    #[serde(default)]
    pub speech: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FulfillmentMessage {
    #[serde(default)]
    pub speech: String,
    #[serde(rename = "type", default)]
    pub kind: i64,
}

/// The webhook flags arrive string-encoded (`"true"` / `"false"`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub intent_id: String,
    #[serde(default)]
    pub webhook_for_slot_filling_used: String,
    #[serde(default)]
    pub intent_name: String,
    #[serde(default)]
    pub webhook_used: String,
}

/// Session state carried across turns. The platform owns `lifespan`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    pub name: String,
    #[serde(default)]
    pub lifespan: i64,
    #[serde(default)]
    pub parameters: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OriginalRequest {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub data: Option<OriginalRequestData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OriginalRequestData {
    #[serde(default)]
    pub inputs: Vec<InputData>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub conversation: Option<Conversation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputData {
    #[serde(default)]
    pub raw_inputs: Vec<RawInput>,
    #[serde(default)]
    pub intent: String,
    #[serde(default)]
    pub arguments: Vec<Argument>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub input_type: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    #[serde(default)]
    pub text_value: String,
    #[serde(default)]
    pub raw_text: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub user_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(default)]
    pub conversation_id: String,
    #[serde(rename = "type", default)]
    pub kind: Value,
    #[serde(default)]
    pub conversation_token: String,
}

// ── Outbound ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub speech: String,
    pub display_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_out: Option<Vec<Context>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followup_event: Option<FollowupEvent>,
}

impl ResponseEnvelope {
    /// Display text mirrors `speech` until overridden.
    pub fn new(speech: impl Into<String>) -> Self {
        let speech = speech.into();
        Self {
            display_text: speech.clone(),
            speech,
            context_out: None,
            source: None,
            followup_event: None,
        }
    }

    pub fn with_display_text(mut self, text: impl Into<String>) -> Self {
        self.display_text = text.into();
        self
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.context_out.get_or_insert_with(Vec::new).push(context);
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_followup_event(mut self, event: FollowupEvent) -> Self {
        self.followup_event = Some(event);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FollowupEvent {
    pub name: String,
    #[serde(default)]
    pub data: Map<String, Value>,
}
