//! Reply resolution: live agent first, canned fallback.
//!
//! The demo never surfaces an upstream failure as an error. Any failed query
//! (connect error, timeout, non-2xx) falls back to the canned catalog; the
//! caller only learns which path answered via [`ReplySource`].

use crate::agent::SupportApiClient;
use crate::responses;
use rand::Rng;

/// Which path produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Agent,
    Canned,
}

impl ReplySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplySource::Agent => "agent",
            ReplySource::Canned => "canned",
        }
    }
}

/// A resolved reply ready for rendering.
#[derive(Debug, Clone)]
pub struct ResolvedReply {
    pub text: String,
    pub source: ReplySource,
}

/// Shown when the agent answers but sends no usable advice.
const EMPTY_ADVICE_FALLBACK: &str =
    "I received your message but had trouble generating a response.";

/// Resolve a reply for free-text user input.
///
/// Tries the live agent once (no retries). On success the advice is used
/// as-is, with an escalation notice appended when the agent flags the query
/// for human review. On any failure the input is bucketed by keyword and one
/// of the category's canned variants is picked with the injected rng.
pub async fn resolve_reply<R: Rng + ?Sized>(
    client: &SupportApiClient,
    input: &str,
    rng: &mut R,
) -> ResolvedReply {
    match client.query(input).await {
        Ok(reply) => {
            let mut text = if reply.support_advice.trim().is_empty() {
                EMPTY_ADVICE_FALLBACK.to_string()
            } else {
                reply.support_advice
            };
            if reply.escalation_required {
                text.push_str(&format!(
                    "\n\n⚠️ **Escalation Required** (Risk Level: {}/10)\n\
                     This issue has been flagged for human review.",
                    reply.risk_level
                ));
            }
            ResolvedReply {
                text,
                source: ReplySource::Agent,
            }
        }
        Err(e) => {
            log::debug!("support api unavailable, using canned reply: {}", e);
            let category = responses::classify(input);
            log::debug!("canned fallback category: {}", category.as_str());
            ResolvedReply {
                text: responses::pick(category, rng).to_string(),
                source: ReplySource::Canned,
            }
        }
    }
}
