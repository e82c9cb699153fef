use super::handlers::{handle_fulfillment, handle_health, strip_failure_body};
use super::{AppState, MAX_BODY_SIZE};

use crate::config::Config;
use crate::fulfillment::IntentHandler;
use anyhow::{Context, Result};
use axum::{Router, middleware, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;

/// Returns true when the bind address is not a loopback address.
pub(super) fn is_public_bind(host: &str) -> bool {
    !matches!(
        host,
        "127.0.0.1" | "localhost" | "::1" | "[::1]" | "0:0:0:0:0:0:0:1"
    )
}

/// Bind `host:port` and serve the webhook gateway until Ctrl+C.
pub async fn run_gateway(host: &str, port: u16, config: Arc<Config>) -> Result<()> {
    // ── Security: refuse public bind without explicit opt-in ──
    if is_public_bind(host) && !config.gateway.allow_public_bind {
        anyhow::bail!(
            "Refusing to bind to {host}: gateway would be exposed to the internet.\n\
             Fix: use --host 127.0.0.1 (default) behind a reverse proxy, or set\n\
             [gateway] allow_public_bind = true in config.toml."
        );
    }

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .context("parse gateway bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("bind gateway socket")?;

    run_gateway_with_listener(host, listener, config).await
}

/// Serve the webhook gateway on a pre-bound listener (port 0 in tests).
pub async fn run_gateway_with_listener(
    host: &str,
    listener: tokio::net::TcpListener,
    config: Arc<Config>,
) -> Result<()> {
    let actual_port = listener
        .local_addr()
        .context("get gateway listener local address")?
        .port();
    let display_addr = format!("{host}:{actual_port}");

    let handler = IntentHandler::from_config(&config).context("build intent handler")?;
    let state = AppState {
        handler: Arc::new(handler),
    };

    print_gateway_banner(&display_addr, &config);

    let app = build_app(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve HTTP gateway")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("gateway shutting down");
}

fn print_gateway_banner(display_addr: &str, config: &Config) {
    println!("Gateway listening on {display_addr}");
    println!("  GET  /health");
    println!("  POST /*     -> fulfillment");
    println!(
        "  Weather location {} via {}",
        config.weather.location_id, config.weather.endpoint
    );
    tracing::info!(addr = display_addr, "gateway started");
}

pub(super) fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .fallback(handle_fulfillment)
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(middleware::map_response(strip_failure_body))
}
