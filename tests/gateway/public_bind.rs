use std::sync::Arc;
use tenki::config::Config;
use tenki::gateway::run_gateway;

#[tokio::test]
async fn public_bind_requires_opt_in() {
    let config = Arc::new(Config::default());

    let err = run_gateway("0.0.0.0", 0, config)
        .await
        .expect_err("public bind should be refused");
    assert!(err.to_string().contains("allow_public_bind"));
}
