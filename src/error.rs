use std::path::PathBuf;
use thiserror::Error;

// ─── Config errors ───────────────────────────────────────────────────────────

/// Startup configuration rejected by `Config::validate`. The binary edge
/// wraps it in `anyhow` context chains.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("validation failed: {0}")]
    Validation(String),
}

// ─── Fulfillment errors ─────────────────────────────────────────────────────

/// Every failure that aborts an in-flight webhook call.
///
/// None of these produce a partial response: the gateway maps each variant to
/// a bare status code.
#[derive(Debug, Error)]
pub enum FulfillmentError {
    #[error("credential store {} unavailable: {source}", path.display())]
    CredentialUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("credential store {} malformed: {message}", path.display())]
    CredentialMalformed { path: PathBuf, message: String },

    #[error("weather provider unreachable: {0}")]
    UpstreamUnavailable(String),

    #[error("weather provider response invalid: {0}")]
    UpstreamResponseInvalid(String),

    #[error("malformed inbound request: {0}")]
    MalformedInboundRequest(String),

    #[error("inbound request body exceeds {limit} bytes")]
    RequestTooLarge { limit: usize },

    #[error("unknown intent: {0}")]
    UnknownIntent(String),

    #[error("speech template render failed: {0}")]
    SpeechRender(String),
}
