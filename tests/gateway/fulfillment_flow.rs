use reqwest::StatusCode;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tenki::config::Config;
use tenki::gateway::run_gateway_with_listener;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WEATHER_PATH: &str = "/data/2.5/weather";

struct GatewayTestServer {
    port: u16,
    handle: tokio::task::JoinHandle<anyhow::Result<()>>,
    _workspace: TempDir,
}

impl GatewayTestServer {
    async fn start(weather_endpoint: &str, write_secret: bool) -> Self {
        let workspace = TempDir::new().expect("temp workspace should be created");
        let secret_path = workspace.path().join("client_secret.json");
        if write_secret {
            std::fs::write(&secret_path, r#"{"openweathermap_key": "owm-test-key"}"#)
                .expect("secret file should be written");
        }

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("ephemeral gateway listener should bind");
        let port = listener
            .local_addr()
            .expect("ephemeral gateway listener should expose local address")
            .port();

        let mut config = Config::default();
        config.config_path = workspace.path().join("config.toml");
        config.gateway.port = port;
        config.weather.endpoint = weather_endpoint.to_string();
        config.weather.secret_file = secret_path.to_string_lossy().into_owned();
        config.weather.timeout_secs = Some(5);
        config.speech.utc_offset_minutes = Some(540);

        let config = Arc::new(config);
        let host = "127.0.0.1".to_string();
        let handle =
            tokio::spawn(async move { run_gateway_with_listener(&host, listener, config).await });

        wait_until_gateway_ready(port).await;

        Self {
            port,
            handle,
            _workspace: workspace,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}{path}", self.port)
    }
}

impl Drop for GatewayTestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn wait_until_gateway_ready(port: u16) {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .expect("reqwest client should be built");

    for _ in 0..80 {
        let health = client
            .get(format!("http://127.0.0.1:{port}/health"))
            .send()
            .await;
        if matches!(health, Ok(resp) if resp.status() == StatusCode::OK) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    panic!("gateway did not become ready on port {port}");
}

fn welcome_request() -> Value {
    json!({
        "id": "c0f1a8e2-0000-4000-8000-000000000001",
        "timestamp": "2017-05-01T03:00:00.000Z",
        "lang": "ja",
        "result": {
            "source": "agent",
            "resolvedQuery": "GOOGLE_ASSISTANT_WELCOME",
            "action": "input.welcome",
            "actionIncomplete": false,
            "parameters": {},
            "contexts": [{"name": "google_assistant_welcome", "parameters": {}, "lifespan": 0}],
            "metadata": {"intentId": "intent-1", "webhookUsed": "true", "intentName": "Default Welcome Intent"},
            "fulfillment": {"speech": "", "messages": [{"type": 0, "speech": ""}]},
            "score": 1
        },
        "status": {"code": 200, "errorType": "success"},
        "sessionId": "1493607600000",
        "originalRequest": {
            "source": "google",
            "data": {
                "inputs": [{
                    "intent": "actions.intent.MAIN",
                    "raw_inputs": [{"query": "話しかける", "input_type": 2}],
                    "arguments": []
                }],
                "user": {"user_id": "user-1"},
                "conversation": {
                    "conversation_id": "1493607600000",
                    "type": 1,
                    "conversation_token": "[]"
                }
            }
        }
    })
}

fn tokyo_clear_sky() -> Value {
    json!({
        "coord": {"lon": 139.69, "lat": 35.69},
        "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
        "main": {"temp": 15.3, "pressure": 1013, "humidity": 60, "temp_min": 14.0, "temp_max": 17.0},
        "wind": {"speed": 3.2, "deg": 90},
        "clouds": {"all": 20},
        "id": 1_850_147,
        "name": "Tokyo",
        "cod": 200
    })
}

#[tokio::test]
async fn welcome_intent_reads_out_current_weather() {
    let provider = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .and(query_param("id", "1850147"))
        .and(query_param("appid", "owm-test-key"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tokyo_clear_sky()))
        .expect(1)
        .mount(&provider)
        .await;

    let server =
        GatewayTestServer::start(&format!("{}{WEATHER_PATH}", provider.uri()), true).await;

    let response = reqwest::Client::new()
        .post(server.url("/webhook"))
        .json(&welcome_request())
        .send()
        .await
        .expect("fulfillment request should complete");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .expect("reply should declare its content type"),
        "application/json"
    );

    let body: Value = response
        .json()
        .await
        .expect("fulfillment response should be json");
    let speech = body
        .get("speech")
        .and_then(Value::as_str)
        .expect("speech should be a string");
    assert!(speech.starts_with("こんにちは。時刻は"));
    assert!(speech.contains(
        "現在の天気は快晴、15.3度です。気圧は1013ヘクトパスカル、曇り度数は20です。"
    ));
    assert!(speech.ends_with("湿度は60パーセントです。風速は秒速3.2メートル、風向は東です。"));
    assert_eq!(body["displayText"], body["speech"]);

    provider.verify().await;
}

#[tokio::test]
async fn malformed_json_is_rejected_before_provider_call() {
    let provider = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tokyo_clear_sky()))
        .expect(0)
        .mount(&provider)
        .await;

    let server =
        GatewayTestServer::start(&format!("{}{WEATHER_PATH}", provider.uri()), true).await;

    let response = reqwest::Client::new()
        .post(server.url("/"))
        .header("Content-Type", "application/json")
        .body("{\"result\": {\"action\": ")
        .send()
        .await
        .expect("malformed request should complete");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(
        response
            .bytes()
            .await
            .expect("body should be readable")
            .is_empty()
    );

    provider.verify().await;
}

#[tokio::test]
async fn unknown_intent_is_unprocessable() {
    let provider = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tokyo_clear_sky()))
        .expect(0)
        .mount(&provider)
        .await;

    let server =
        GatewayTestServer::start(&format!("{}{WEATHER_PATH}", provider.uri()), true).await;

    let mut request = welcome_request();
    request["result"]["action"] = json!("input.forecast");
    let response = reqwest::Client::new()
        .post(server.url("/webhook"))
        .json(&request)
        .send()
        .await
        .expect("unknown intent request should complete");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    provider.verify().await;
}

#[tokio::test]
async fn provider_failure_is_internal_error() {
    let provider = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "cod": 401,
            "message": "Invalid API key."
        })))
        .expect(1)
        .mount(&provider)
        .await;

    let server =
        GatewayTestServer::start(&format!("{}{WEATHER_PATH}", provider.uri()), true).await;

    let response = reqwest::Client::new()
        .post(server.url("/webhook"))
        .json(&welcome_request())
        .send()
        .await
        .expect("fulfillment request should complete");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        response
            .bytes()
            .await
            .expect("body should be readable")
            .is_empty()
    );

    provider.verify().await;
}

#[tokio::test]
async fn missing_secret_file_is_internal_error_without_provider_call() {
    let provider = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tokyo_clear_sky()))
        .expect(0)
        .mount(&provider)
        .await;

    let server =
        GatewayTestServer::start(&format!("{}{WEATHER_PATH}", provider.uri()), false).await;

    let response = reqwest::Client::new()
        .post(server.url("/webhook"))
        .json(&welcome_request())
        .send()
        .await
        .expect("fulfillment request should complete");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    provider.verify().await;
}

#[tokio::test]
async fn oversized_body_is_refused() {
    let provider = MockServer::start().await;
    let server =
        GatewayTestServer::start(&format!("{}{WEATHER_PATH}", provider.uri()), true).await;

    let padding = "x".repeat(70_000);
    let response = reqwest::Client::new()
        .post(server.url("/webhook"))
        .header("Content-Type", "application/json")
        .body(format!("{{\"padding\": \"{padding}\"}}"))
        .send()
        .await
        .expect("oversized request should complete");
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(
        response
            .bytes()
            .await
            .expect("body should be readable")
            .is_empty()
    );
}

#[tokio::test]
async fn oversized_chunked_body_is_refused() {
    let provider = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tokyo_clear_sky()))
        .expect(0)
        .mount(&provider)
        .await;

    let server =
        GatewayTestServer::start(&format!("{}{WEATHER_PATH}", provider.uri()), true).await;
    let port = server.port;

    // No Content-Length: the limit trips while the body is being read.
    let raw = tokio::task::spawn_blocking(move || {
        use std::io::{Read, Write};

        let body = format!("{{\"padding\": \"{}\"}}", "x".repeat(70_000));
        let mut stream = std::net::TcpStream::connect(("127.0.0.1", port))
            .expect("gateway should accept connections");
        stream
            .set_read_timeout(Some(Duration::from_secs(5)))
            .expect("read timeout should be set");
        let head = "POST /webhook HTTP/1.1\r\nHost: 127.0.0.1\r\n\
                    Content-Type: application/json\r\n\
                    Transfer-Encoding: chunked\r\nConnection: close\r\n\r\n";
        let request = format!("{head}{:x}\r\n{body}\r\n0\r\n\r\n", body.len());
        // The server may answer and close before it drains the body.
        let _ = stream.write_all(request.as_bytes());

        let mut received = Vec::new();
        let mut buf = [0_u8; 4096];
        loop {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => received.extend_from_slice(&buf[..n]),
            }
        }
        String::from_utf8_lossy(&received).into_owned()
    })
    .await
    .expect("raw client task should finish");

    let (head, body) = raw
        .split_once("\r\n\r\n")
        .expect("response should carry a header block");
    assert!(
        head.starts_with("HTTP/1.1 413"),
        "unexpected status line: {head}"
    );
    assert!(body.is_empty(), "unexpected body: {body:?}");

    provider.verify().await;
}

#[tokio::test]
async fn health_rejects_other_methods() {
    let provider = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tokyo_clear_sky()))
        .expect(0)
        .mount(&provider)
        .await;

    let server =
        GatewayTestServer::start(&format!("{}{WEATHER_PATH}", provider.uri()), true).await;

    let response = reqwest::Client::new()
        .post(server.url("/health"))
        .json(&welcome_request())
        .send()
        .await
        .expect("health post should complete");
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(
        response
            .bytes()
            .await
            .expect("body should be readable")
            .is_empty()
    );

    provider.verify().await;
}

#[tokio::test]
async fn health_does_not_touch_provider() {
    let provider = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tokyo_clear_sky()))
        .expect(0)
        .mount(&provider)
        .await;

    let server =
        GatewayTestServer::start(&format!("{}{WEATHER_PATH}", provider.uri()), false).await;

    let body: Value = reqwest::get(server.url("/health"))
        .await
        .expect("health request should complete")
        .json()
        .await
        .expect("health response should be json");
    assert_eq!(body, json!({"status": "ok"}));

    provider.verify().await;
}
