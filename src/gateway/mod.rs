//! Axum-based HTTP boundary for the conversation platform's webhook calls.
//!
//! - `GET /health` answers liveness probes
//! - every other route decodes a fulfillment request and replies with the
//!   platform's response envelope
//! - request bodies are capped at 64KB

mod handlers;
mod server;

pub use handlers::status_for;
pub use server::{run_gateway, run_gateway_with_listener};

use crate::fulfillment::IntentHandler;
use std::sync::Arc;

/// Maximum request body size (64KB) -- prevents memory exhaustion
pub const MAX_BODY_SIZE: usize = 65_536;

/// Shared state for all axum handlers
#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<IntentHandler>,
}
