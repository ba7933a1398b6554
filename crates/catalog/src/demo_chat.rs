//! Scripted "try it" chat on a listing's detail page.
//!
//! No inference happens here: the agent greets with the listing's demo message
//! and answers every user message with its sample response.

use serde::{Deserialize, Serialize};

use crate::listing::Listing;

const DEFAULT_DEMO_MESSAGE: &str = "How can I help you today?";
const DEFAULT_RESPONSE: &str = "Thank you for your message! This is a demo response.";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Agent,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
}

impl ChatMessage {
    fn agent(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Agent,
            text: text.into(),
        }
    }
}

/// Transcript of one demo session. Starts with the agent's greeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoChat {
    reply: String,
    transcript: Vec<ChatMessage>,
}

impl DemoChat {
    pub fn for_listing(listing: &Listing) -> Self {
        let opener = listing
            .demo_message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(DEFAULT_DEMO_MESSAGE);
        let reply = listing
            .sample_response
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(DEFAULT_RESPONSE);

        Self {
            reply: reply.to_string(),
            transcript: vec![ChatMessage::agent(format!(
                "Hi! I'm {}. {opener}",
                listing.display_name()
            ))],
        }
    }

    /// Append the user's message and the scripted reply. Blank input is
    /// ignored and returns `false`.
    pub fn send(&mut self, message: &str) -> bool {
        if message.trim().is_empty() {
            return false;
        }
        self.transcript.push(ChatMessage {
            speaker: Speaker::User,
            text: message.to_string(),
        });
        self.transcript.push(ChatMessage::agent(self.reply.clone()));
        true
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }
}
