use reqwest::Client;
use std::time::Duration;

/// Client for the weather provider. Without an explicit timeout the transport
/// defaults apply.
pub fn build_weather_client(timeout: Option<Duration>) -> Client {
    let builder = Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60));
    let builder = match timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    };
    builder.build().unwrap_or_else(|e| {
        tracing::warn!(
            timeout_secs = timeout.map(|t| t.as_secs()),
            "weather client builder failed, falling back to defaults without timeout: {e}"
        );
        Client::new()
    })
}
