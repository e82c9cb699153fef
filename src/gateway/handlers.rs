use crate::error::FulfillmentError;
use crate::fulfillment::RequestEnvelope;
use axum::{
    body::Body,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use uuid::Uuid;

use super::{AppState, MAX_BODY_SIZE};

/// GET /health: liveness only, never touches the weather provider
pub(super) async fn handle_health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

/// Any other route: webhook fulfillment
pub(super) async fn handle_fulfillment(
    State(state): State<AppState>,
    body: Result<Json<RequestEnvelope>, JsonRejection>,
) -> Response {
    let request_id = Uuid::new_v4();

    let Json(request) = match body {
        Ok(b) => b,
        Err(e) => return failure_response(request_id, &rejection_error(&e)),
    };

    match state.handler.dispatch(&request).await {
        Ok(reply) => {
            tracing::info!(
                %request_id,
                session_id = %request.session_id,
                "fulfillment completed"
            );
            (StatusCode::OK, Json(reply)).into_response()
        }
        Err(e) => failure_response(request_id, &e),
    }
}

/// HTTP status for a failed fulfillment. Failures never carry a body.
pub fn status_for(error: &FulfillmentError) -> StatusCode {
    match error {
        FulfillmentError::MalformedInboundRequest(_) => StatusCode::BAD_REQUEST,
        FulfillmentError::RequestTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        FulfillmentError::UnknownIntent(_) => StatusCode::UNPROCESSABLE_ENTITY,
        FulfillmentError::CredentialUnavailable { .. }
        | FulfillmentError::CredentialMalformed { .. }
        | FulfillmentError::UpstreamUnavailable(_)
        | FulfillmentError::UpstreamResponseInvalid(_)
        | FulfillmentError::SpeechRender(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Bodies cut off by the size limit mid-stream surface here as a 413
/// rejection; everything else the extractor rejects is malformed input.
fn rejection_error(rejection: &JsonRejection) -> FulfillmentError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        FulfillmentError::RequestTooLarge {
            limit: MAX_BODY_SIZE,
        }
    } else {
        FulfillmentError::MalformedInboundRequest(rejection.body_text())
    }
}

/// Drops the body of every 4xx/5xx reply, including those produced by the
/// router and the body-limit layer before a handler runs.
pub(super) async fn strip_failure_body(response: Response) -> Response {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_TYPE);
    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::empty())
}

fn failure_response(request_id: Uuid, error: &FulfillmentError) -> Response {
    let status = status_for(error);
    if status.is_server_error() {
        tracing::error!(%request_id, status = status.as_u16(), "fulfillment failed: {error}");
    } else {
        tracing::warn!(%request_id, status = status.as_u16(), "fulfillment rejected: {error}");
    }
    status.into_response()
}
