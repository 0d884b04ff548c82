//! Core types: user, chat, message, outgoing message and card, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::poll::CorrelationToken;

/// Author of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub is_bot: bool,
}

/// Channel the message was posted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chat {
    pub id: u64,
}

/// A single incoming message, converted from the transport type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Transport-specific id (Discord snowflake as decimal string).
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    /// True when the author is this bot (an echo of one of our own sends).
    pub from_self: bool,
    /// Correlation token echoed back by the platform, if the send carried one.
    pub nonce: Option<CorrelationToken>,
    pub created_at: DateTime<Utc>,
}

/// Rich attachment (Discord embed). The adapter decides colour and layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: Option<String>,
    pub description: String,
    pub footer: Option<String>,
}

impl Card {
    pub fn with_description(description: impl Into<String>) -> Self {
        Self {
            title: None,
            description: description.into(),
            footer: None,
        }
    }
}

/// Message to send: plain text, an optional card, and an optional correlation token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub text: Option<String>,
    pub card: Option<Card>,
    pub nonce: Option<CorrelationToken>,
}

impl OutgoingMessage {
    /// A message made only of a card (used for the help reply).
    pub fn card(card: Card) -> Self {
        Self {
            card: Some(card),
            ..Self::default()
        }
    }
}

/// Handler result for the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Not for this handler, try next.
    Ignore,
    /// Stop the chain and attach a short summary of what was sent.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Handler with optional before / handle / after. The chain runs all before → handle until
/// Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _message: &Message) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the message. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _message: &Message) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}
