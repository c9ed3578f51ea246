//! SupportAgent HTTP API client (http://localhost:8080 by default).

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client for the SupportAgent HTTP API.
#[derive(Clone)]
pub struct SupportApiClient {
    base_url: String,
    user_id: u64,
    timeout: Duration,
    client: reqwest::Client,
}

#[derive(Debug, thiserror::Error)]
pub enum SupportApiError {
    #[error("support api request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("support api error: {0}")]
    Api(String),
}

impl SupportApiClient {
    pub fn new(base_url: impl Into<String>, user_id: u64, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            user_id,
            timeout,
            client: reqwest::Client::new(),
        }
    }

    /// GET /health — connectivity probe; reports service name and version.
    pub async fn health(&self) -> Result<HealthInfo, SupportApiError> {
        let url = format!("{}/health", self.base_url);
        let res = self.client.get(&url).timeout(self.timeout).send().await?;
        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(SupportApiError::Api(format!("{} {}", status, body)));
        }
        let info: HealthInfo = res.json().await?;
        Ok(info)
    }

    /// POST /agent/query — submit a support query for the configured user.
    pub async fn query(&self, message: &str) -> Result<AgentReply, SupportApiError> {
        let url = format!("{}/agent/query", self.base_url);
        let body = QueryRequest {
            user_id: self.user_id,
            query: message.to_string(),
        };
        let res = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await?;
        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(SupportApiError::Api(format!("{} {}", status, body)));
        }
        let reply: AgentReply = res.json().await?;
        Ok(reply)
    }
}

#[derive(Debug, Serialize)]
struct QueryRequest {
    user_id: u64,
    query: String,
}

/// Health payload. Extra informational fields (model names, database) are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthInfo {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub version: String,
}

/// Agent reply. Fields default so a sparse payload still renders.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentReply {
    #[serde(default)]
    pub support_advice: String,
    #[serde(default)]
    pub escalation_required: bool,
    #[serde(default)]
    pub risk_level: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SupportApiClient {
        SupportApiClient::new(server.uri(), 3, Duration::from_secs(2))
    }

    #[tokio::test]
    async fn health_parses_service_and_version() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "healthy",
                "service": "supportagent-api",
                "version": "2.0.0",
                "database": "postgresql+pgvector"
            })))
            .mount(&server)
            .await;

        let info = client_for(&server).health().await.expect("health");
        assert_eq!(info.service, "supportagent-api");
        assert_eq!(info.version, "2.0.0");
    }

    #[tokio::test]
    async fn query_sends_user_id_and_parses_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/agent/query"))
            .and(body_json(json!({ "user_id": 3, "query": "help me" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user_id": 3,
                "query": "help me",
                "support_advice": "Try X",
                "escalation_required": true,
                "risk_level": 8
            })))
            .mount(&server)
            .await;

        let reply = client_for(&server).query("help me").await.expect("query");
        assert_eq!(reply.support_advice, "Try X");
        assert!(reply.escalation_required);
        assert_eq!(reply.risk_level, 8);
    }

    #[tokio::test]
    async fn non_success_status_is_an_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/agent/query"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for(&server).query("hi").await.expect_err("should fail");
        assert!(matches!(err, SupportApiError::Api(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_request_error() {
        // Nothing listens here; bind a socket to find a free port, then drop it.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
            listener.local_addr().expect("addr").port()
        };
        let client = SupportApiClient::new(
            format!("http://127.0.0.1:{}", port),
            3,
            Duration::from_millis(500),
        );
        let err = client.query("hi").await.expect_err("should fail");
        assert!(matches!(err, SupportApiError::Request(_)));
    }
}
