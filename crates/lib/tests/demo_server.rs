//! Integration tests: start the demo server on a free port and drive the
//! widget endpoints over HTTP. Typing simulation is disabled so tests run
//! fast. The server task is left running when a test ends.

use lib::config::Config;
use lib::demo;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind free port");
    listener.local_addr().expect("local_addr").port()
}

fn demo_config(port: u16, api_base_url: &str) -> Config {
    let mut config = Config::default();
    config.demo.port = port;
    config.demo.bind = "127.0.0.1".to_string();
    config.demo.simulate_typing = false;
    config.api.base_url = api_base_url.to_string();
    config.api.timeout_secs = 1;
    config
}

/// Poll GET / until the server answers 200 (up to ~5s).
async fn wait_until_up(client: &reqwest::Client, base: &str) -> String {
    let url = format!("{}/", base);
    let mut last_err = None;
    for _ in 0..100 {
        match client.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => {
                return resp.text().await.expect("page body");
            }
            Ok(_) => {}
            Err(e) => last_err = Some(e),
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!(
        "GET {} did not return 200 within 5s; last error: {:?}",
        url, last_err
    );
}

#[tokio::test]
async fn demo_mode_flow_without_upstream() {
    let port = free_port();
    // Nothing listens on this port; every upstream call fails over to canned replies.
    let dead_api = format!("http://127.0.0.1:{}", free_port());
    let config = demo_config(port, &dead_api);
    tokio::spawn(async move {
        let _ = demo::run_demo(config).await;
    });

    let base = format!("http://127.0.0.1:{}", port);
    let client = reqwest::Client::new();
    let page = wait_until_up(&client, &base).await;
    assert!(page.contains("SupportAgent AI"));

    let status: serde_json::Value = client
        .get(format!("{}/api/status", base))
        .send()
        .await
        .expect("status request")
        .json()
        .await
        .expect("status json");
    assert_eq!(status.get("connected").and_then(|v| v.as_bool()), Some(false));

    let reply: serde_json::Value = client
        .post(format!("{}/api/message", base))
        .json(&json!({ "message": "I forgot my password" }))
        .send()
        .await
        .expect("message request")
        .json()
        .await
        .expect("message json");
    assert_eq!(reply.get("source").and_then(|v| v.as_str()), Some("canned"));
    assert_eq!(reply.get("messageCount").and_then(|v| v.as_u64()), Some(1));
    let session_id = reply
        .get("sessionId")
        .and_then(|v| v.as_str())
        .expect("sessionId")
        .to_string();
    let html = reply
        .get("replyHtml")
        .and_then(|v| v.as_str())
        .expect("replyHtml");
    assert!(html.contains("password"));

    // Same session id continues the count.
    let reply: serde_json::Value = client
        .post(format!("{}/api/message", base))
        .json(&json!({ "sessionId": session_id, "message": "what plans do you offer?" }))
        .send()
        .await
        .expect("second message")
        .json()
        .await
        .expect("second json");
    assert_eq!(reply.get("messageCount").and_then(|v| v.as_u64()), Some(2));

    // Clear resets the counter.
    let cleared: serde_json::Value = client
        .post(format!("{}/api/clear", base))
        .json(&json!({ "sessionId": session_id }))
        .send()
        .await
        .expect("clear request")
        .json()
        .await
        .expect("clear json");
    assert_eq!(cleared.get("messageCount").and_then(|v| v.as_u64()), Some(0));

    // Unknown sessions are rejected.
    let missing = client
        .post(format!("{}/api/clear", base))
        .json(&json!({ "sessionId": "sess-missing" }))
        .send()
        .await
        .expect("clear missing");
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);

    // Blank messages are rejected.
    let blank = client
        .post(format!("{}/api/message", base))
        .json(&json!({ "message": "   " }))
        .send()
        .await
        .expect("blank message");
    assert_eq!(blank.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn live_agent_flow_with_mock_upstream() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "service": "supportagent-api",
            "version": "2.0.0"
        })))
        .mount(&upstream)
        .await;
    Mock::given(method("POST"))
        .and(path("/agent/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "support_advice": "Try X",
            "escalation_required": true,
            "risk_level": 8
        })))
        .mount(&upstream)
        .await;

    let port = free_port();
    let config = demo_config(port, &upstream.uri());
    tokio::spawn(async move {
        let _ = demo::run_demo(config).await;
    });

    let base = format!("http://127.0.0.1:{}", port);
    let client = reqwest::Client::new();
    wait_until_up(&client, &base).await;

    let status: serde_json::Value = client
        .get(format!("{}/api/status", base))
        .send()
        .await
        .expect("status request")
        .json()
        .await
        .expect("status json");
    assert_eq!(status.get("connected").and_then(|v| v.as_bool()), Some(true));
    assert_eq!(
        status.get("service").and_then(|v| v.as_str()),
        Some("supportagent-api")
    );

    let reply: serde_json::Value = client
        .post(format!("{}/api/message", base))
        .json(&json!({ "message": "I need help urgently" }))
        .send()
        .await
        .expect("message request")
        .json()
        .await
        .expect("message json");
    assert_eq!(reply.get("source").and_then(|v| v.as_str()), Some("agent"));
    let html = reply
        .get("replyHtml")
        .and_then(|v| v.as_str())
        .expect("replyHtml");
    assert!(html.starts_with("Try X"));
    assert!(html.contains("<strong>Escalation Required</strong>"));
    assert!(html.contains("8/10"));
}
