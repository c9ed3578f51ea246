//! Demo HTTP server: serves the chat page and the widget endpoints.
//!
//! The browser stays thin — it posts messages and inserts the returned HTML
//! fragments. Reply resolution, formatting, and transcript state all live
//! here. Concurrent messages in one session resolve independently and append
//! in whichever order their typing delays elapse; there is no ordering
//! guarantee, matching the original demo.

use crate::agent::SupportApiClient;
use crate::config::{self, Config};
use crate::demo::page;
use crate::markup::render_markup;
use crate::resolver::{self, ReplySource};
use crate::transcript::TranscriptStore;
use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

/// Shared state for the demo server (config, API client, transcripts).
#[derive(Clone)]
pub struct DemoState {
    pub config: Arc<Config>,
    pub client: SupportApiClient,
    pub transcripts: Arc<TranscriptStore>,
}

impl DemoState {
    pub fn new(config: Config) -> Self {
        let base_url = config::resolve_api_base_url(&config);
        let client = SupportApiClient::new(
            base_url,
            config.api.user_id,
            Duration::from_secs(config.api.timeout_secs),
        );
        Self {
            config: Arc::new(config),
            client,
            transcripts: Arc::new(TranscriptStore::new()),
        }
    }
}

/// Build the demo router. Exposed so tests can drive it without a socket.
pub fn demo_router(state: DemoState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/status", get(api_status))
        .route("/api/message", post(api_message))
        .route("/api/clear", post(api_clear))
        .with_state(state)
}

/// Run the demo server; binds to config.demo.bind:config.demo.port.
/// Blocks until shutdown (Ctrl+C or SIGTERM).
pub async fn run_demo(config: Config) -> Result<()> {
    let bind = config.demo.bind.trim().to_string();
    if !config::is_loopback_bind(&bind) {
        log::warn!(
            "demo server binding to {} — the demo has no auth, keep it off untrusted networks",
            bind
        );
    }
    let bind_addr = format!("{}:{}", bind, config.demo.port);
    let state = DemoState::new(config);
    let app = demo_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding to {}", bind_addr))?;
    log::info!("demo chat listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("demo server exited")?;
    log::info!("demo server stopped");
    Ok(())
}

/// Future that completes when the process should shut down (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    log::info!("shutdown signal received");
}

/// GET / — the self-contained chat page.
async fn index() -> Html<String> {
    Html(page::build_demo_html())
}

/// GET /api/status — probe upstream /health for the connectivity banner.
/// Probe failure is non-fatal; it just reports demo mode.
async fn api_status(State(state): State<DemoState>) -> Json<serde_json::Value> {
    match state.client.health().await {
        Ok(info) => Json(json!({
            "connected": true,
            "service": info.service,
            "version": info.version,
        })),
        Err(e) => {
            log::debug!("health probe failed: {}", e);
            Json(json!({ "connected": false }))
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageParams {
    #[serde(default)]
    session_id: Option<String>,
    message: String,
}

/// POST /api/message — append the user message, resolve a reply, simulate
/// typing, append the bot message, and return the rendered fragment.
async fn api_message(
    State(state): State<DemoState>,
    Json(params): Json<MessageParams>,
) -> Response {
    let message = params.message.trim().to_string();
    if message.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "message must not be empty");
    }
    let session_id = match params.session_id {
        Some(id) if !id.trim().is_empty() => state.transcripts.get_or_create(id).await,
        _ => state.transcripts.create().await,
    };
    if let Err(e) = state.transcripts.append_user(&session_id, &message).await {
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, &e);
    }

    let mut rng = StdRng::from_os_rng();
    let reply = resolver::resolve_reply(&state.client, &message, &mut rng).await;
    if state.config.demo.simulate_typing {
        tokio::time::sleep(typing_delay(reply.source, &mut rng)).await;
    }

    if let Err(e) = state.transcripts.append_bot(&session_id, &reply.text).await {
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, &e);
    }
    let count = state
        .transcripts
        .message_count(&session_id)
        .await
        .unwrap_or(0);
    Json(json!({
        "sessionId": session_id,
        "replyHtml": render_markup(&reply.text),
        "source": reply.source.as_str(),
        "messageCount": count,
    }))
    .into_response()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClearParams {
    session_id: String,
}

/// POST /api/clear — reset a transcript to its greeting.
async fn api_clear(State(state): State<DemoState>, Json(params): Json<ClearParams>) -> Response {
    match state.transcripts.clear(&params.session_id).await {
        Ok(()) => Json(json!({
            "sessionId": params.session_id,
            "messageCount": 0,
        }))
        .into_response(),
        Err(e) => error_response(StatusCode::NOT_FOUND, &e),
    }
}

/// Randomized "agent is typing" pause: live replies 1.0–2.0 s, canned
/// replies 1.2–2.0 s.
fn typing_delay<R: Rng + ?Sized>(source: ReplySource, rng: &mut R) -> Duration {
    let ms = match source {
        ReplySource::Agent => rng.random_range(1000..=2000),
        ReplySource::Canned => rng.random_range(1200..=2000),
    };
    Duration::from_millis(ms)
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
