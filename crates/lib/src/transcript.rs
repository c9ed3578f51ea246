//! Conversation transcripts for the demo chat surface.
//!
//! A transcript is an ordered, append-only message list opened with a fixed
//! greeting from the bot. Clearing removes everything except the greeting and
//! resets the user-message counter. Transcripts are keyed by session id in an
//! in-memory store; nothing is persisted.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Greeting shown at the top of every conversation.
pub const GREETING: &str =
    "Hi! I'm the SupportAgent AI assistant. Ask me about your account, \
     subscription, or anything else you need help with.";

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A single chat message.
#[derive(Debug, Clone)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// One conversation: greeting plus whatever has been exchanged since.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<Message>,
    user_messages: u32,
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            messages: vec![Message::new(Sender::Bot, GREETING)],
            user_messages: 0,
        }
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(Message::new(Sender::User, text));
        self.user_messages += 1;
    }

    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.messages.push(Message::new(Sender::Bot, text));
    }

    /// Remove every message except the greeting and reset the counter.
    pub fn clear(&mut self) {
        self.messages.truncate(1);
        self.user_messages = 0;
    }

    /// Number of user messages sent since the transcript was opened or last
    /// cleared.
    pub fn message_count(&self) -> u32 {
        self.user_messages
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory store for transcripts (create, append, clear).
pub struct TranscriptStore {
    inner: Arc<RwLock<HashMap<String, Transcript>>>,
}

impl Default for TranscriptStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Open a new transcript with a generated id; returns the session id.
    pub async fn create(&self) -> String {
        let id = format!("sess-{}", uuid::Uuid::new_v4());
        self.inner.write().await.insert(id.clone(), Transcript::new());
        id
    }

    /// Open a transcript with the given id if it does not exist; returns the id.
    pub async fn get_or_create(&self, id: impl Into<String>) -> String {
        let id = id.into();
        let mut g = self.inner.write().await;
        g.entry(id.clone()).or_insert_with(Transcript::new);
        id
    }

    /// Return a clone of the transcript if it exists.
    pub async fn get(&self, id: &str) -> Option<Transcript> {
        self.inner.read().await.get(id).cloned()
    }

    /// Append a user message; returns the new user-message count, or an error
    /// if the session is unknown.
    pub async fn append_user(&self, id: &str, text: &str) -> Result<u32, String> {
        let mut g = self.inner.write().await;
        let transcript = g.get_mut(id).ok_or_else(|| "session not found".to_string())?;
        transcript.push_user(text);
        Ok(transcript.message_count())
    }

    /// Append a bot message; returns an error if the session is unknown.
    pub async fn append_bot(&self, id: &str, text: &str) -> Result<(), String> {
        let mut g = self.inner.write().await;
        let transcript = g.get_mut(id).ok_or_else(|| "session not found".to_string())?;
        transcript.push_bot(text);
        Ok(())
    }

    /// Clear a transcript back to its greeting; returns an error if the
    /// session is unknown.
    pub async fn clear(&self, id: &str) -> Result<(), String> {
        let mut g = self.inner.write().await;
        let transcript = g.get_mut(id).ok_or_else(|| "session not found".to_string())?;
        transcript.clear();
        Ok(())
    }

    /// Current user-message count for a session.
    pub async fn message_count(&self, id: &str) -> Option<u32> {
        self.inner.read().await.get(id).map(|t| t.message_count())
    }
}
