//! Scripted chat companion. The session state machine is independent of
//! how replies are produced: `ResponseProvider` is the seam where a real
//! language model can replace the canned-reply table.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::content;

pub trait ResponseProvider: Send + Sync {
    fn respond(&self, message: &str) -> String;
}

/// Uniform random pick from the fixed reply table; ignores the input.
#[derive(Debug, Default)]
pub struct ScriptedResponder;

impl ResponseProvider for ScriptedResponder {
    fn respond(&self, _message: &str) -> String {
        let idx = rand::thread_rng().gen_range(0..content::SCRIPTED_REPLIES.len());
        content::SCRIPTED_REPLIES[idx].to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Companion,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

/// One conversation with the companion, seeded with its greeting.
pub struct ChatSession<P: ResponseProvider> {
    provider: P,
    messages: Vec<ChatMessage>,
}

impl<P: ResponseProvider> ChatSession<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            messages: vec![ChatMessage {
                speaker: Speaker::Companion,
                content: content::COMPANION_GREETING.to_string(),
                sent_at: Utc::now(),
            }],
        }
    }

    /// Append a user message and the companion's reply. Blank input is
    /// ignored and produces no messages at all.
    pub fn send(&mut self, text: &str) -> Option<&ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }

        self.messages.push(ChatMessage {
            speaker: Speaker::User,
            content: text.to_string(),
            sent_at: Utc::now(),
        });

        let reply = self.provider.respond(text);
        self.messages.push(ChatMessage {
            speaker: Speaker::Companion,
            content: reply,
            sent_at: Utc::now(),
        });

        self.messages.last()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}
