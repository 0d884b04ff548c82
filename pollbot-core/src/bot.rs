//! Bot capability set the poll logic depends on.
//!
//! [`Bot`] is transport-agnostic; pollbot-discord implements it over serenity's HTTP client.

use crate::error::{HandlerError, Result};
use crate::types::{Chat, OutgoingMessage};
use async_trait::async_trait;

/// Outbound actions against the chat platform. `message_id` is the transport id as a string.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a message (text, optional card, optional nonce) and returns the new message id.
    async fn send_message(&self, chat: &Chat, message: &OutgoingMessage) -> Result<String>;
    /// Adds one reaction to a message.
    async fn add_reaction(&self, chat: &Chat, message_id: &str, symbol: &str) -> Result<()>;
    /// Deletes a message.
    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<()>;
}

/// Parses a message id string into the numeric snowflake.
pub fn parse_message_id(s: &str) -> Result<u64> {
    s.parse()
        .map_err(|_| HandlerError::InvalidMessageId(s.to_string()).into())
}
